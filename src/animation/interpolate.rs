use crate::animation::ease::Ease;
use crate::foundation::error::{TutorialError, TutorialResult};

/// Behavior of [`interpolate`] outside its input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the nearest output endpoint.
    #[default]
    Clamp,
    /// Continue the linear mapping past the endpoint.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Easing applied to normalized progress inside the range.
    pub ease: Ease,
    /// Behavior below `input_range[0]`.
    pub extrapolate_left: Extrapolate,
    /// Behavior above `input_range[1]`.
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOpts {
    /// Linear mapping clamped on both sides.
    pub const CLAMPED: Self = Self {
        ease: Ease::Linear,
        extrapolate_left: Extrapolate::Clamp,
        extrapolate_right: Extrapolate::Clamp,
    };

    /// Same extrapolation, different easing.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }
}

impl Default for InterpolateOpts {
    fn default() -> Self {
        Self::CLAMPED
    }
}

/// Map `input` from `input_range` onto `output_range`.
///
/// A degenerate range (`a == b`) acts as a step at `a`; use [`try_interpolate`] to reject it.
pub fn interpolate(
    input: f64,
    input_range: [f64; 2],
    output_range: [f64; 2],
    opts: InterpolateOpts,
) -> f64 {
    let [a, b] = input_range;
    let [y0, y1] = output_range;

    if input < a {
        match opts.extrapolate_left {
            Extrapolate::Identity => return input,
            Extrapolate::Clamp => return y0,
            Extrapolate::Extend => {}
        }
    }
    if input > b {
        match opts.extrapolate_right {
            Extrapolate::Identity => return input,
            Extrapolate::Clamp => return y1,
            Extrapolate::Extend => {}
        }
    }
    if y0 == y1 {
        return y0;
    }
    if a == b {
        return if input >= b { y1 } else { y0 };
    }

    let t = (input - a) / (b - a);
    let eased = if (0.0..=1.0).contains(&t) {
        opts.ease.apply(t)
    } else {
        t
    };
    y0 + (y1 - y0) * eased
}

/// Checked form of [`interpolate`].
pub fn try_interpolate(
    input: f64,
    input_range: [f64; 2],
    output_range: [f64; 2],
    opts: InterpolateOpts,
) -> TutorialResult<f64> {
    let [a, b] = input_range;
    if ![input, a, b, output_range[0], output_range[1]]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(TutorialError::animation("interpolate inputs must be finite"));
    }
    if a >= b {
        return Err(TutorialError::animation(format!(
            "interpolate input range must be strictly increasing, got [{a}, {b}]"
        )));
    }
    if !opts.ease.is_valid() {
        return Err(TutorialError::animation(format!(
            "invalid easing curve {:?}",
            opts.ease
        )));
    }
    Ok(interpolate(input, input_range, output_range, opts))
}

/// `interpolate` with [`InterpolateOpts::CLAMPED`] over an integral frame offset.
pub fn clamped(elapsed: i64, input_range: [f64; 2], output_range: [f64; 2]) -> f64 {
    interpolate(
        elapsed as f64,
        input_range,
        output_range,
        InterpolateOpts::CLAMPED,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
