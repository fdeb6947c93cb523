// File: crates/ruler-core/src/render.rs
// Summary: Draws one ruler (frame, parent ticks with labels, child ticks, corner box) onto a surface.

use log::trace;

use crate::config::RulerConfig;
use crate::geometry::{Point, Rect};
use crate::surface::{DrawSurface, Stroke};
use crate::ticks::{TickMark, TickRun};
use crate::types::{Axis, CRISP_OFFSET};

/// Stroke width for ticks, frame and corner box.
pub const LINE_WIDTH: f64 = 1.0;
/// Gap between a parent tick and the start of its label.
pub const LABEL_GAP: f64 = 1.0;

/// Renders the ticks of one axis. Stateless; the same inputs always
/// produce the same draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulerRenderer {
    axis: Axis,
}

impl RulerRenderer {
    pub const fn new(axis: Axis) -> Self {
        Self { axis }
    }

    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Draw order: clear, frame, parent ticks, child ticks, corner box.
    /// The corner box goes last so it covers ticks running through the corner.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        parent: &TickRun,
        child: &TickRun,
        config: &RulerConfig,
    ) {
        let size = surface.size();
        let length = size.length(self.axis) as f64;
        let depth = size.depth(self.axis) as f64;
        let palette = &config.palette;
        let scale_stroke = Stroke::new(palette.scale, LINE_WIDTH);
        let border_stroke = Stroke::new(palette.border, LINE_WIDTH);

        surface.clear();
        surface.translate(CRISP_OFFSET, CRISP_OFFSET);

        // Frame, leaving the corner free.
        let frame = Rect::on_axis(self.axis, depth, 0.0, length - depth, depth);
        surface.fill_rect(frame, palette.ruler);
        surface.stroke_rect(frame, border_stroke);

        for tick in parent.iter() {
            self.draw_tick(surface, tick, 0.0, depth, scale_stroke);
            if let Some(label) = tick.label {
                let at = self.label_anchor(tick.position, config.font.size as f64);
                surface.fill_text(&label.to_string(), at, &config.font, palette.label);
            }
        }

        for tick in child.iter() {
            self.draw_tick(surface, tick, config.child_tick_start, depth, scale_stroke);
        }

        let corner = Rect::from_ltwh(0.0, 0.0, depth, depth);
        surface.fill_rect(corner, palette.ruler);
        surface.stroke_rect(corner, border_stroke);

        trace!(
            "{} ruler drawn: {} parent, {} child ticks on {}x{}",
            self.axis.name(),
            parent.len(),
            child.len(),
            size.width,
            size.height
        );
    }

    fn draw_tick<S: DrawSurface + ?Sized>(&self, surface: &mut S, tick: &TickMark, start: f64, depth: f64, stroke: Stroke) {
        let from = Point::on_axis(self.axis, tick.position, start);
        let to = Point::on_axis(self.axis, tick.position, depth);
        surface.stroke_line(from, to, stroke);
    }

    /// Labels sit just past the tick, one font-size in from the outer edge
    /// on the horizontal ruler and one font-size below the tick on the vertical one.
    fn label_anchor(&self, position: f64, font_size: f64) -> Point {
        match self.axis {
            Axis::Horizontal => Point::new(position + LABEL_GAP, font_size),
            Axis::Vertical => Point::new(LABEL_GAP, position + font_size),
        }
    }
}
