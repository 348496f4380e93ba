//! Reusable animated building blocks shared by the scenes.
//!
//! Every widget is a pure function of a scene-local frame (plus a per-instance delay) returning an
//! [`Element`](crate::scene::model::Element) subtree.

pub(crate) mod chip;
pub(crate) mod feature_card;
pub(crate) mod logo;
pub(crate) mod step_indicator;
pub(crate) mod terminal;

/// Frame rate the widget springs are tuned for.
pub const SPRING_FPS: f64 = 30.0;
