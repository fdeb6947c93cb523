// File: crates/ruler-core/src/offset.rs
// Summary: Shared pan offsets and scale for the two ruler axes, with pixel/unit mapping.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Point;
use crate::types::{Axis, DEFAULT_PARENT_SCALE, DEFAULT_THICKNESS};

/// Last-write-wins state shared by both axis renderers and by anything
/// that needs to map surface pixels to ruler units (e.g. drop points).
/// The zero tick of each axis sits at `origin + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetStore {
    offset_x: f64,
    offset_y: f64,
    scale: f64,
    /// Unpanned zero position in pixels: the ruler thickness.
    origin: f64,
}

/// Single-threaded shared handle; render passes never overlap.
pub type SharedOffsets = Rc<RefCell<OffsetStore>>;

impl Default for OffsetStore {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: DEFAULT_PARENT_SCALE, origin: DEFAULT_THICKNESS }
    }
}

impl OffsetStore {
    pub fn new(scale: f64) -> Self {
        Self { scale, ..Self::default() }
    }

    pub fn shared(self) -> SharedOffsets {
        Rc::new(RefCell::new(self))
    }

    pub fn offset_x(&self) -> f64 { self.offset_x }
    pub fn offset_y(&self) -> f64 { self.offset_y }
    pub fn set_offset_x(&mut self, value: f64) { self.offset_x = value; }
    pub fn set_offset_y(&mut self, value: f64) { self.offset_y = value; }
    pub fn scale(&self) -> f64 { self.scale }
    pub fn set_scale(&mut self, value: f64) { self.scale = value; }
    pub fn origin(&self) -> f64 { self.origin }
    pub fn set_origin(&mut self, value: f64) { self.origin = value; }

    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.offset_x,
            Axis::Vertical => self.offset_y,
        }
    }

    pub fn set_offset(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.offset_x = value,
            Axis::Vertical => self.offset_y = value,
        }
    }

    /// Surface pixel position to ruler units; the zero tick maps to 0.
    pub fn to_units(&self, px: Point) -> Point {
        Point::new(
            (px.x - self.origin - self.offset_x) / self.scale,
            (px.y - self.origin - self.offset_y) / self.scale,
        )
    }

    /// Inverse of [`OffsetStore::to_units`].
    pub fn to_pixels(&self, units: Point) -> Point {
        Point::new(
            units.x * self.scale + self.origin + self.offset_x,
            units.y * self.scale + self.origin + self.offset_y,
        )
    }
}
