//! Visual tree produced by the scene renderers.

pub(crate) mod model;
