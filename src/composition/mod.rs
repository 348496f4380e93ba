//! Composition boundary: theme props, the scene timeline and composition presets.

pub(crate) mod config;
pub(crate) mod theme;
pub(crate) mod timeline;
