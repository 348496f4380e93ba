//! Display-list compilation, the CPU raster backend and the multi-frame pipeline.

pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod display_list;
pub(crate) mod fingerprint;
pub(crate) mod pipeline;
