// File: crates/ruler-render-skia/src/lib.rs
// Summary: Skia raster surface implementing ruler-core's DrawSurface, with PNG export.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use ruler_core::{DrawSurface, FontSpec, FontWeight, Point, Rect, Rgba, Stroke, SurfaceSize};
use skia_safe as skia;

/// CPU raster canvas for one ruler. Text uses the system font manager.
pub struct SkiaSurface {
    surface: skia::Surface,
    size: SurfaceSize,
    fonts: skia::FontMgr,
}

impl SkiaSurface {
    pub fn new(size: SurfaceSize) -> Result<Self> {
        let surface = raster(size)?;
        Ok(Self { surface, size, fonts: skia::FontMgr::default() })
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current pixels to `path` as PNG, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn font(&self, spec: &FontSpec) -> skia::Font {
        let style = match spec.weight {
            FontWeight::Bold => skia::FontStyle::bold(),
            FontWeight::Normal => skia::FontStyle::normal(),
        };
        match self.fonts.match_family_style(&spec.family, style) {
            Some(typeface) => skia::Font::from_typeface(typeface, spec.size),
            None => {
                // Family not installed; fall back to the default face.
                let mut font = skia::Font::default();
                font.set_size(spec.size);
                font.set_embolden(spec.weight == FontWeight::Bold);
                font
            }
        }
    }
}

fn raster(size: SurfaceSize) -> Result<skia::Surface> {
    let w = size.width.max(1) as i32;
    let h = size.height.max(1) as i32;
    skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.left as f32, r.top as f32, r.width as f32, r.height as f32)
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(color(stroke.color));
    paint
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

impl DrawSurface for SkiaSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        match raster(size) {
            Ok(surface) => {
                debug!("skia surface resized to {}x{}", size.width, size.height);
                self.surface = surface;
                self.size = size;
            }
            Err(e) => warn!("keeping {}x{} surface: {e}", self.size.width, self.size.height),
        }
    }

    fn clear(&mut self) {
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.clear(skia::Color::TRANSPARENT);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.surface.canvas().translate((dx as f32, dy as f32));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.surface.canvas().draw_line(point(from), point(to), &stroke_paint(stroke));
    }

    fn fill_rect(&mut self, r: Rect, c: Rgba) {
        self.surface.canvas().draw_rect(rect(r), &fill_paint(c));
    }

    fn stroke_rect(&mut self, r: Rect, stroke: Stroke) {
        self.surface.canvas().draw_rect(rect(r), &stroke_paint(stroke));
    }

    fn fill_text(&mut self, text: &str, at: Point, spec: &FontSpec, c: Rgba) {
        let font = self.font(spec);
        self.surface.canvas().draw_str(text, point(at), &font, &fill_paint(c));
    }
}
