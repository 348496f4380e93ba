use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::core::Affine;
use crate::foundation::error::{TutorialError, TutorialResult};
use crate::layout::text::{FontSet, GlyphRun};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::display_list::{DisplayList, DrawOp};
use crate::scene::model::{Border, FontRole, Fill};

// Cubic approximation of a quarter circle.
const KAPPA: f64 = 0.552_284_749_8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    from: [u8; 4],
    to: [u8; 4],
    angle_bits: u32,
    w: u32,
    h: u32,
}

#[derive(Clone, Default)]
struct FontDataSet {
    sans: Option<vello_cpu::peniko::FontData>,
    mono: Option<vello_cpu::peniko::FontData>,
}

impl FontDataSet {
    fn from_fonts(fonts: &FontSet) -> Self {
        let data = |bytes: &Arc<Vec<u8>>| {
            vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                0,
            )
        };
        Self {
            sans: fonts.sans.as_ref().map(data),
            mono: fonts.mono.as_ref().map(data),
        }
    }

    fn get(&self, role: FontRole) -> Option<&vello_cpu::peniko::FontData> {
        match role {
            FontRole::Sans => self.sans.as_ref(),
            FontRole::Mono => self.mono.as_ref().or(self.sans.as_ref()),
        }
    }
}

/// CPU raster backend built on `vello_cpu`.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    fonts: FontDataSet,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
}

impl CpuBackend {
    /// Create a backend; font bytes from `settings` are wrapped once here.
    pub fn new(settings: RenderSettings) -> Self {
        let fonts = FontDataSet::from_fonts(&settings.fonts);
        Self {
            settings,
            ctx: None,
            fonts,
            gradient_cache: HashMap::new(),
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> TutorialResult<R>,
    ) -> TutorialResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Linear gradient image of `w × h` following the CSS `linear-gradient(<angle>, from, to)`
    /// convention (0° points up, 90° points right).
    fn gradient_paint(
        &mut self,
        angle_deg: f32,
        from: Color,
        to: Color,
        w: u32,
        h: u32,
    ) -> TutorialResult<vello_cpu::Image> {
        let key = GradientKey {
            from: [from.r, from.g, from.b, from.a],
            to: [to.r, to.g, to.b, to.a],
            angle_bits: angle_deg.to_bits(),
            w,
            h,
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }

        let theta = f64::from(angle_deg).to_radians();
        let (dx, dy) = (theta.sin(), -theta.cos());
        let (wf, hf) = (f64::from(w), f64::from(h));
        let line_len = (wf * dx.abs() + hf * dy.abs()).max(f64::EPSILON);
        let (cx, cy) = (wf / 2.0, hf / 2.0);

        let lerp = |a: u8, b: u8, t: f64| -> u8 {
            let af = f64::from(a);
            (af + (f64::from(b) - af) * t).round().clamp(0.0, 255.0) as u8
        };
        let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
        for y in 0..h {
            for x in 0..w {
                let px = f64::from(x) + 0.5 - cx;
                let py = f64::from(y) + 0.5 - cy;
                let t = ((px * dx + py * dy) / line_len + 0.5).clamp(0.0, 1.0);
                let c = Color::rgba(
                    lerp(from.r, to.r, t),
                    lerp(from.g, to.g, t),
                    lerp(from.b, to.b, t),
                    lerp(from.a, to.a, t),
                )
                .premul();
                let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&c.to_array());
            }
        }
        let img = rgba_premul_to_image(&bytes, w, h)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }

    fn set_fill_paint(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        fill: Fill,
        w: f64,
        h: f64,
    ) -> TutorialResult<()> {
        match fill {
            Fill::Solid { color } => ctx.set_paint(cpu_color(color)),
            Fill::LinearGradient {
                angle_deg,
                from,
                to,
            } => {
                let img = self.gradient_paint(
                    angle_deg,
                    from,
                    to,
                    w.ceil().max(1.0) as u32,
                    h.ceil().max(1.0) as u32,
                )?;
                ctx.set_paint(img);
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_rect(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        tr: Affine,
        w: f64,
        h: f64,
        radius: f64,
        fill: Option<Fill>,
        border: Option<Border>,
    ) -> TutorialResult<()> {
        ctx.set_transform(affine_to_cpu(tr));
        if let Some(fill) = fill {
            self.set_fill_paint(ctx, fill, w, h)?;
            let mut path = vello_cpu::kurbo::BezPath::new();
            push_rounded_rect(&mut path, 0.0, 0.0, w, h, radius, true);
            ctx.fill_path(&path);
        }
        if let Some(b) = border {
            let bw = f64::from(b.width).min(w / 2.0).min(h / 2.0);
            ctx.set_paint(cpu_color(b.color));
            let mut ring = vello_cpu::kurbo::BezPath::new();
            push_rounded_rect(&mut ring, 0.0, 0.0, w, h, radius, true);
            push_rounded_rect(
                &mut ring,
                bw,
                bw,
                w - bw,
                h - bw,
                (radius - bw).max(0.0),
                false,
            );
            ctx.fill_path(&ring);
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_shadow(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        tr: Affine,
        w: f64,
        h: f64,
        radius: f64,
        std_dev: f64,
        color: Color,
    ) {
        ctx.set_transform(affine_to_cpu(tr));
        ctx.set_paint(cpu_color(color));
        ctx.fill_blurred_rounded_rect(
            &vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h),
            radius as f32,
            std_dev as f32,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        tr: Affine,
        w: f64,
        h: f64,
        paint: Fill,
        runs: &[GlyphRun],
    ) -> TutorialResult<()> {
        if runs.is_empty() {
            return Ok(());
        }
        ctx.set_transform(affine_to_cpu(tr));
        self.set_fill_paint(ctx, paint, w, h)?;
        for run in runs {
            let Some(font) = self.fonts.get(run.font) else {
                tracing::warn!(font = ?run.font, "glyph run without a registered font");
                continue;
            };
            let glyphs = run.glyphs.iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.font_size)
                .fill_glyphs(glyphs);
        }
        Ok(())
    }

    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> TutorialResult<()> {
        let opacity = op.opacity();
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if opacity < 1.0 {
            ctx.push_opacity_layer(opacity);
        }
        match op {
            DrawOp::Shadow {
                transform,
                width,
                height,
                radius,
                std_dev,
                color,
                ..
            } => self.draw_shadow(ctx, *transform, *width, *height, *radius, *std_dev, *color),
            DrawOp::Rect {
                transform,
                width,
                height,
                radius,
                fill,
                border,
                ..
            } => self.draw_rect(ctx, *transform, *width, *height, *radius, *fill, *border)?,
            DrawOp::Text {
                transform,
                width,
                height,
                paint,
                runs,
                ..
            } => self.draw_text(ctx, *transform, *width, *height, *paint, runs)?,
        }
        if opacity < 1.0 {
            ctx.pop_layer();
        }
        Ok(())
    }
}

impl RenderBackend for CpuBackend {
    fn render_display_list(&mut self, list: &DisplayList) -> TutorialResult<FrameRGBA> {
        list.canvas.validate()?;
        let w: u16 = list
            .canvas
            .width
            .try_into()
            .map_err(|_| TutorialError::evaluation("canvas width exceeds u16"))?;
        let h: u16 = list
            .canvas
            .height
            .try_into()
            .map_err(|_| TutorialError::evaluation("canvas height exceeds u16"))?;

        let clear = self.settings.clear_rgba;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.with_ctx_mut(w, h, |this, ctx| {
            let full = vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h));
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            if let Some([r, g, b, a]) = clear {
                ctx.set_paint(cpu_color(Color::rgba(r, g, b, a)));
                ctx.fill_rect(&full);
            }
            ctx.set_paint(cpu_color(list.background));
            ctx.fill_rect(&full);

            for op in &list.ops {
                this.draw_op(ctx, op)?;
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: list.canvas.width,
            height: list.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn worker_render_settings(&self) -> Option<RenderSettings> {
        Some(self.settings.clone())
    }

    fn fonts(&self) -> &FontSet {
        &self.settings.fonts
    }
}

fn cpu_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

/// Append a closed rounded rectangle subpath. Clockwise (in y-down space) when `clockwise`,
/// so an inner counter-clockwise subpath cuts a hole under the nonzero rule.
fn push_rounded_rect(
    path: &mut vello_cpu::kurbo::BezPath,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    r: f64,
    clockwise: bool,
) {
    use vello_cpu::kurbo::Point;

    let r = r.max(0.0).min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);
    // Corners in clockwise order, each as (entry point, corner, exit point).
    let mut corners = [
        (Point::new(x1 - r, y0), Point::new(x1, y0), Point::new(x1, y0 + r)),
        (Point::new(x1, y1 - r), Point::new(x1, y1), Point::new(x1 - r, y1)),
        (Point::new(x0 + r, y1), Point::new(x0, y1), Point::new(x0, y1 - r)),
        (Point::new(x0, y0 + r), Point::new(x0, y0), Point::new(x0 + r, y0)),
    ];
    if !clockwise {
        corners.reverse();
        for c in &mut corners {
            std::mem::swap(&mut c.0, &mut c.2);
        }
    }

    path.move_to(corners[3].2);
    for (entry, corner, exit) in corners {
        path.line_to(entry);
        if r > 0.0 {
            path.curve_to(
                entry + (corner - entry) * KAPPA,
                exit + (corner - exit) * KAPPA,
                exit,
            );
        }
    }
    path.close_path();
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> TutorialResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| TutorialError::evaluation("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| TutorialError::evaluation("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(TutorialError::evaluation("pixmap byte len mismatch"));
    }
    let mut may_have_opacities = false;
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> TutorialResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
