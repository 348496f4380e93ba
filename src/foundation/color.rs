use crate::foundation::core::Rgba8Premul;
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA8 color.
///
/// Deserializes from `"#RRGGBB"`, `"#RRGGBBAA"`, `{ "r", "g", "b", "a"? }` objects in `[0, 1]`, or
/// `[r, g, b]` / `[r, g, b, a]` arrays in `[0, 1]`. Serializes back to a lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (straight).
    pub a: u8,
}

impl Color {
    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from 8-bit channels with straight alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    ///
    /// Short forms expand each digit, so `#F80` is `#FF8800`.
    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color \"{s}\""));
        }

        // Only ASCII hex digits remain, so every byte is one digit.
        let digit = |i: usize| -> u8 {
            let b = s.as_bytes()[i];
            match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => b - b'A' + 10,
            }
        };
        let short = |i: usize| digit(i) * 17;
        let long = |i: usize| digit(i) * 16 + digit(i + 1);

        match s.len() {
            3 => Ok(Self::rgb(short(0), short(1), short(2))),
            4 => Ok(Self::rgba(short(0), short(1), short(2), short(3))),
            6 => Ok(Self::rgb(long(0), long(2), long(4))),
            8 => Ok(Self::rgba(long(0), long(2), long(4), long(6))),
            _ => Err(
                "hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned(),
            ),
        }
    }

    /// Same color with its alpha replaced, e.g. the `33` in `#FF5A3633`.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiply alpha by `opacity` in `[0, 1]`.
    pub fn fade(self, opacity: f64) -> Self {
        let a = (f64::from(self.a) * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    /// Convert to premultiplied form.
    pub fn premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }

    /// Lowercase `#rrggbb` (opaque) or `#rrggbbaa` string.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        fn unit_to_u8(x: f64) -> Result<u8, String> {
            if !x.is_finite() || !(0.0..=1.0).contains(&x) {
                return Err(format!("color channel {x} must be within [0, 1]"));
            }
            Ok((x * 255.0).round() as u8)
        }

        fn from_units(r: f64, g: f64, b: f64, a: f64) -> Result<Color, String> {
            Ok(Color::rgba(
                unit_to_u8(r)?,
                unit_to_u8(g)?,
                unit_to_u8(b)?,
                unit_to_u8(a)?,
            ))
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Color::parse_hex(&s),
            Repr::RgbaObj { r, g, b, a } => from_units(r, g, b, a),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => from_units(*r, *g, *b, 1.0),
                [r, g, b, a] => from_units(*r, *g, *b, *a),
                _ => Err("rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])".to_owned()),
            },
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
