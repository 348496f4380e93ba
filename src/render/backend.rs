use crate::foundation::error::TutorialResult;
use crate::layout::text::FontSet;
use crate::render::display_list::DisplayList;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag keeps that explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A renderer that rasterizes a [`DisplayList`] into a [`FrameRGBA`].
///
/// Most callers go through [`crate::render_frame`] and friends, which handle evaluation, layout
/// and compilation.
pub trait RenderBackend {
    /// Rasterize one display list.
    fn render_display_list(&mut self, list: &DisplayList) -> TutorialResult<FrameRGBA>;

    /// Return backend settings required to construct equivalent worker backends.
    ///
    /// This is used by parallel rendering paths.
    fn worker_render_settings(&self) -> Option<RenderSettings> {
        None
    }

    /// Fonts the backend draws glyphs with. Layout must use the same set.
    fn fonts(&self) -> &FontSet;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// If set, backends clear the target to this straight RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
    /// Fonts for text shaping and glyph drawing. Empty means text is laid out but not drawn.
    pub fonts: FontSet,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> TutorialResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}
