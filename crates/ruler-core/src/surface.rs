// File: crates/ruler-core/src/surface.rs
// Summary: 2D drawing-surface abstraction and an in-memory recorder for tests and snapshots.
// Notes:
// - Every draw call carries its own style; surfaces keep no stroke/fill/font
//   state between calls apart from the translation.

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::text::FontSpec;
use crate::theme::Rgba;
use crate::types::SurfaceSize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

/// The only boundary between the ruler and a host toolkit.
pub trait DrawSurface {
    fn size(&self) -> SurfaceSize;
    /// Set the logical size. Implementations may reallocate and must reset
    /// any translation.
    fn resize(&mut self, size: SurfaceSize);
    /// Clear all pixels and reset the translation.
    fn clear(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);
    fn fill_text(&mut self, text: &str, at: Point, font: &FontSpec, color: Rgba);
}

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Translate { dx: f64, dy: f64 },
    Line { from: Point, to: Point, stroke: Stroke },
    FillRect { rect: Rect, color: Rgba },
    StrokeRect { rect: Rect, stroke: Stroke },
    Text { text: String, at: Point, font: FontSpec, color: Rgba },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear => write!(f, "clear"),
            DrawCommand::Translate { dx, dy } => write!(f, "translate {dx:.3} {dy:.3}"),
            DrawCommand::Line { from, to, stroke } => write!(
                f,
                "line {:.3},{:.3} -> {:.3},{:.3} {} w{}",
                from.x, from.y, to.x, to.y, stroke.color, stroke.width
            ),
            DrawCommand::FillRect { rect, color } => write!(
                f,
                "fill_rect {:.3},{:.3} {:.3}x{:.3} {}",
                rect.left, rect.top, rect.width, rect.height, color
            ),
            DrawCommand::StrokeRect { rect, stroke } => write!(
                f,
                "stroke_rect {:.3},{:.3} {:.3}x{:.3} {} w{}",
                rect.left, rect.top, rect.width, rect.height, stroke.color, stroke.width
            ),
            DrawCommand::Text { text, at, font, color } => {
                write!(f, "text {text:?} {:.3},{:.3} [{font}] {color}", at.x, at.y)
            }
        }
    }
}

/// Records draw calls instead of rasterising them; deterministic across platforms.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Option<SurfaceSize>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self { size: Some(size), commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands, keeping the size.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// One command per line, for golden snapshots.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for c in &self.commands {
            out.push_str(&c.to_string());
            out.push('\n');
        }
        out
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size.unwrap_or(SurfaceSize::new(0, 0))
    }
    fn resize(&mut self, size: SurfaceSize) {
        self.size = Some(size);
    }
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }
    fn stroke_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke });
    }
    fn fill_text(&mut self, text: &str, at: Point, font: &FontSpec, color: Rgba) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, font: font.clone(), color });
    }
}
