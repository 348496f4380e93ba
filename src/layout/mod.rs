//! Layout: flexbox boxes via `taffy`, text metrics and glyph positions via `parley`.

pub(crate) mod taffy_bridge;
pub(crate) mod text;
