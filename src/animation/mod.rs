//! Frame-pure animation primitives.
//!
//! Every function here is a pure function of an elapsed frame count: sampling frame 900 directly
//! gives the same value as sampling frames 0..=900 in order.

pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod spring;
pub(crate) mod typewriter;
