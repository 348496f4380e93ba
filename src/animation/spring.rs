use crate::foundation::error::{TutorialError, TutorialResult};

/// Physical parameters of a damped spring animating from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Attached mass `m`.
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Clamp the response at the target instead of overshooting.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    /// Damping 15, stiffness 100: under-damped (`ζ = 0.75`) with a small overshoot.
    pub const SNAPPY: Self = Self {
        damping: 15.0,
        stiffness: 100.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Damping 20, stiffness 100: critically damped (`ζ = 1`), never overshoots.
    pub const SMOOTH: Self = Self {
        damping: 20.0,
        stiffness: 100.0,
        mass: 1.0,
        overshoot_clamping: false,
    };

    /// Damping ratio `ζ = c / (2·√(k·m))`.
    pub fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Reject non-finite or non-positive parameters.
    pub fn validate(self) -> TutorialResult<()> {
        for (name, v) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(TutorialError::animation(format!(
                    "spring {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct SpringState {
    current: f64,
    velocity: f64,
    last_ms: f64,
}

// Largest simulated step; longer gaps are treated as 64 ms.
const MAX_STEP_MS: f64 = 64.0;

fn advance(state: SpringState, now_ms: f64, cfg: SpringConfig) -> SpringState {
    let dt_ms = (now_ms - state.last_ms).min(MAX_STEP_MS);
    let t = dt_ms / 1000.0;

    let (c, k, m) = (cfg.damping, cfg.stiffness, cfg.mass);
    let v0 = -state.velocity;
    let x0 = 1.0 - state.current;
    let zeta = c / (2.0 * (k * m).sqrt());
    let omega0 = (k / m).sqrt();

    let (position, velocity) = if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let (sin1, cos1) = (omega1 * t).sin_cos();
        let envelope = (-zeta * omega0 * t).exp();
        let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
        let velocity =
            zeta * omega0 * frag - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
        (1.0 - frag, velocity)
    } else {
        let envelope = (-omega0 * t).exp();
        let position = 1.0 - envelope * (x0 + (v0 + omega0 * x0) * t);
        let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
        (position, velocity)
    };

    SpringState {
        current: position,
        velocity,
        last_ms: now_ms,
    }
}

/// Spring response at `elapsed` frames (0 → 1).
///
/// The analytic solution is stepped once per frame from frame 0 so fractional and integral frames
/// agree with a frame-by-frame simulation. `elapsed <= 0` (and NaN) yields exactly `0.0`.
pub fn spring(elapsed: f64, fps: f64, cfg: SpringConfig) -> f64 {
    if !(elapsed > 0.0) || !(fps > 0.0) {
        return 0.0;
    }

    let whole = elapsed.floor();
    let mut state = SpringState {
        current: 0.0,
        velocity: 0.0,
        last_ms: 0.0,
    };

    let mut f = 0.0;
    while f <= whole {
        state = advance(state, f / fps * 1000.0, cfg);
        f += 1.0;
    }
    if elapsed > whole {
        state = advance(state, elapsed / fps * 1000.0, cfg);
    }

    if cfg.overshoot_clamping && state.current > 1.0 {
        1.0
    } else {
        state.current
    }
}

/// Integer-frame convenience wrapper around [`spring`].
pub fn spring_at(elapsed: i64, fps: f64, cfg: SpringConfig) -> f64 {
    spring(elapsed as f64, fps, cfg)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
