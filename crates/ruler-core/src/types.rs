// File: crates/ruler-core/src/types.rs
// Summary: Shared types and constants (paper sizes, pixel density, surface sizes).

/// Pixels per millimetre at 96 dpi.
pub const PX_PER_MM: f64 = 3.779_527_559_1;
/// Width of an A4 sheet in millimetres (horizontal ruler length).
pub const A4_WIDTH_MM: f64 = 210.0;
/// Height of an A4 sheet in millimetres (vertical ruler length).
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Default ruler thickness in pixels.
pub const DEFAULT_THICKNESS: f64 = 25.0;
/// Default parent scale: one centimetre at 96 dpi, in pixels.
pub const DEFAULT_PARENT_SCALE: f64 = 37.795_275_591;
/// Smallest spacing between ticks, in pixels.
pub const MIN_TICK_SPACING: f64 = 1.0;
/// Half-pixel shift so 1px strokes land on pixel centres.
pub const CRISP_OFFSET: f64 = 0.5;

/// The two rulers drawn by a [`crate::Ruler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    pub const fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// Logical size of a drawing surface, in whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of the canvas backing `axis` for a ruler of the given thickness.
    /// The long side follows the A4 proportions plus room for the corner box.
    pub fn for_axis(axis: Axis, thickness: f64) -> Self {
        let thick = thickness.round().max(0.0) as u32;
        match axis {
            Axis::Horizontal => Self::new(ruler_length(A4_WIDTH_MM, thickness), thick),
            Axis::Vertical => Self::new(thick, ruler_length(A4_HEIGHT_MM, thickness)),
        }
    }

    /// Extent along the ruler's measuring direction.
    pub const fn length(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Extent across the ruler (its thickness as drawn).
    pub const fn depth(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.height,
            Axis::Vertical => self.width,
        }
    }
}

fn ruler_length(paper_mm: f64, thickness: f64) -> u32 {
    (paper_mm * PX_PER_MM + thickness).round().max(0.0) as u32
}
