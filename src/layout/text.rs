use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{TutorialError, TutorialResult};
use crate::scene::model::{FontRole, TextAlign, TextStyle};

// Slack added to the wrap width so text re-shaped at its own measured width does not re-wrap.
const WRAP_SLACK: f32 = 0.5;

/// Raw font files, one per [`FontRole`]. A missing mono font falls back to the sans font.
#[derive(Clone, Debug, Default)]
pub struct FontSet {
    /// Proportional font bytes (TTF/OTF).
    pub sans: Option<Arc<Vec<u8>>>,
    /// Monospace font bytes (TTF/OTF).
    pub mono: Option<Arc<Vec<u8>>>,
}

impl FontSet {
    /// No fonts: text is measured heuristically and not drawn.
    pub fn none() -> Self {
        Self::default()
    }

    /// Read font files from disk.
    pub fn load(sans: Option<&Path>, mono: Option<&Path>) -> TutorialResult<Self> {
        fn read(p: Option<&Path>) -> TutorialResult<Option<Arc<Vec<u8>>>> {
            p.map(|p| {
                std::fs::read(p).map(Arc::new).map_err(|e| {
                    TutorialError::validation(format!("read font '{}': {e}", p.display()))
                })
            })
            .transpose()
        }
        Ok(Self {
            sans: read(sans)?,
            mono: read(mono)?,
        })
    }

    /// `true` when no sans font is available.
    pub fn is_empty(&self) -> bool {
        self.sans.is_none()
    }

    /// Bytes used for `role`, and the role they were registered under.
    pub fn resolve(&self, role: FontRole) -> Option<(FontRole, &Arc<Vec<u8>>)> {
        match role {
            FontRole::Mono => self
                .mono
                .as_ref()
                .map(|b| (FontRole::Mono, b))
                .or_else(|| self.sans.as_ref().map(|b| (FontRole::Sans, b))),
            FontRole::Sans => self.sans.as_ref().map(|b| (FontRole::Sans, b)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    /// Red channel.
    pub(crate) r: u8,
    /// Green channel.
    pub(crate) g: u8,
    /// Blue channel.
    pub(crate) b: u8,
    /// Alpha channel.
    pub(crate) a: u8,
}

/// Glyph id and pen position relative to the text box origin.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PositionedGlyph {
    /// Glyph id in the run's font.
    pub id: u32,
    /// Baseline x.
    pub x: f32,
    /// Baseline y.
    pub y: f32,
}

/// Glyphs sharing one font and size.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlyphRun {
    /// Font the glyph ids index into.
    pub font: FontRole,
    /// Font size in pixels.
    pub font_size: f32,
    /// Positioned glyphs.
    pub glyphs: Vec<PositionedGlyph>,
}

/// Result of shaping a text element.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedText {
    /// Widest line.
    pub width: f32,
    /// Total height of all lines.
    pub height: f32,
    /// Glyph runs in visual order.
    pub runs: Vec<GlyphRun>,
}

/// Stateful helper for measuring and shaping text with registered fonts.
///
/// With no sans font registered, every call uses heuristic metrics and shaping yields `None`.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    sans_family: Option<String>,
    mono_family: Option<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Engine with no fonts registered.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            sans_family: None,
            mono_family: None,
        }
    }

    /// Engine with every font of `fonts` registered.
    pub fn with_fonts(fonts: &FontSet) -> TutorialResult<Self> {
        let mut engine = Self::new();
        if let Some(bytes) = &fonts.sans {
            engine.register_font(FontRole::Sans, bytes)?;
        }
        if let Some(bytes) = &fonts.mono {
            engine.register_font(FontRole::Mono, bytes)?;
        }
        Ok(engine)
    }

    /// Register font bytes for `role`.
    pub fn register_font(&mut self, role: FontRole, font_bytes: &[u8]) -> TutorialResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| TutorialError::validation("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TutorialError::validation("registered font family has no name"))?
            .to_string();

        tracing::debug!(?role, family = %family_name, "registered font");
        match role {
            FontRole::Sans => self.sans_family = Some(family_name),
            FontRole::Mono => self.mono_family = Some(family_name),
        }
        Ok(())
    }

    /// `true` when glyphs can be produced.
    pub fn has_fonts(&self) -> bool {
        self.sans_family.is_some()
    }

    fn family_for(&self, role: FontRole) -> Option<(FontRole, String)> {
        match role {
            FontRole::Mono => self
                .mono_family
                .clone()
                .map(|f| (FontRole::Mono, f))
                .or_else(|| self.sans_family.clone().map(|f| (FontRole::Sans, f))),
            FontRole::Sans => self.sans_family.clone().map(|f| (FontRole::Sans, f)),
        }
    }

    /// Size of `content` laid out with `style`, wrapping at `wrap_width` when given.
    pub fn measure(
        &mut self,
        content: &str,
        style: &TextStyle,
        wrap_width: Option<f32>,
    ) -> TutorialResult<(f32, f32)> {
        match self.shape(content, style, wrap_width)? {
            Some(shaped) => Ok((shaped.width, shaped.height)),
            None => Ok(heuristic_measure(content, style, wrap_width)),
        }
    }

    /// Shape `content` into positioned glyph runs, or `None` when no font is registered.
    pub fn shape(
        &mut self,
        content: &str,
        style: &TextStyle,
        wrap_width: Option<f32>,
    ) -> TutorialResult<Option<ShapedText>> {
        if !style.size.is_finite() || style.size <= 0.0 {
            return Err(TutorialError::layout("text size must be finite and > 0"));
        }
        let Some((role, family)) = self.family_for(style.font) else {
            return Ok(None);
        };

        let text = normalize_whitespace(content, style.pre_wrap);
        let color = style.paint().dominant_color();
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(style.weight)),
        ));
        builder.push_default(parley::style::StyleProperty::LineHeight(
            parley::style::LineHeight::FontSizeRelative(style.line_height),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(&text);
        let alignment = match style.align {
            TextAlign::Start => parley::Alignment::Start,
            TextAlign::Center => parley::Alignment::Center,
        };
        layout.break_all_lines(wrap_width.map(|w| w + WRAP_SLACK));
        layout.align(wrap_width, alignment, parley::AlignmentOptions::default());

        let mut runs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run
                    .glyphs()
                    .map(|g| PositionedGlyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                    .collect();
                runs.push(GlyphRun {
                    font: role,
                    font_size: run.run().font_size(),
                    glyphs,
                });
            }
        }

        Ok(Some(ShapedText {
            width: layout.width(),
            height: layout.height(),
            runs,
        }))
    }
}

/// Collapse whitespace runs (including newlines) to single spaces unless `pre_wrap` is set.
pub fn normalize_whitespace(content: &str, pre_wrap: bool) -> Cow<'_, str> {
    if pre_wrap {
        return Cow::Borrowed(content);
    }
    let needs_work = content.contains(['\n', '\t', '\r']) || content.contains("  ");
    if !needs_work {
        return Cow::Borrowed(content.trim());
    }
    Cow::Owned(content.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn char_advance(c: char, size: f32) -> f32 {
    if c.is_ascii() { 0.6 * size } else { size }
}

// Break opportunities: around spaces, and before/after every non-ASCII char.
fn tokens(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut prev_kind = None;
    for (i, c) in line.char_indices() {
        let kind = if c == ' ' {
            0
        } else if c.is_ascii() {
            1
        } else {
            2
        };
        if let Some(pk) = prev_kind
            && (pk != kind || kind == 2)
        {
            out.push(&line[start..i]);
            start = i;
        }
        prev_kind = Some(kind);
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

/// Font-free text metrics: `0.6·size` per ASCII char, `1.0·size` per other char, greedy wrapping.
pub fn heuristic_measure(content: &str, style: &TextStyle, wrap_width: Option<f32>) -> (f32, f32) {
    let text = normalize_whitespace(content, style.pre_wrap);
    let size = style.size;
    let advance = |s: &str| s.chars().map(|c| char_advance(c, size)).sum::<f32>();
    let limit = wrap_width.map(|w| w + WRAP_SLACK);

    let mut widest = 0.0_f32;
    let mut lines = 0usize;
    for hard_line in text.split('\n') {
        lines += 1;
        let mut width = 0.0_f32;
        let mut trailing = 0.0_f32;
        let mut line_start = true;
        for tok in tokens(hard_line) {
            let tw = advance(tok);
            if tok.starts_with(' ') {
                if width > 0.0 || line_start {
                    width += tw;
                    trailing += tw;
                }
                continue;
            }
            line_start = false;
            if let Some(limit) = limit
                && width > 0.0
                && width + tw > limit
            {
                widest = widest.max(width - trailing);
                lines += 1;
                width = 0.0;
            }
            width += tw;
            trailing = 0.0;
        }
        widest = widest.max(width - trailing);
    }

    (widest, lines as f32 * size * style.line_height)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
