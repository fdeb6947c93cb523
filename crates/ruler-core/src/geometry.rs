// File: crates/ruler-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math on either ruler axis.

use crate::types::Axis;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from ruler-relative coordinates: `along` the measuring
    /// direction and `across` the ruler's thickness.
    pub const fn on_axis(axis: Axis, along: f64, across: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(along, across),
            Axis::Vertical => Self::new(across, along),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Axis-relative rectangle; see [`Point::on_axis`].
    pub const fn on_axis(axis: Axis, along: f64, across: f64, length: f64, depth: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::from_ltwh(along, across, length, depth),
            Axis::Vertical => Self::from_ltwh(across, along, depth, length),
        }
    }
}
