// File: crates/ruler-core/src/lib.rs
// Summary: Core library entry point; exports tick geometry, offsets, rendering and the ruler controller.

pub mod config;
pub mod error;
pub mod geometry;
pub mod offset;
pub mod render;
pub mod ruler;
pub mod surface;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use config::{RulerConfig, RulerConfigFile};
pub use error::{ConfigError, RulerError};
pub use geometry::{Point, Rect};
pub use offset::{OffsetStore, SharedOffsets};
pub use render::RulerRenderer;
pub use ruler::Ruler;
pub use surface::{DrawCommand, DrawSurface, RecordingSurface, Stroke};
pub use text::{FontSpec, FontWeight};
pub use theme::{RulerPalette, Rgba};
pub use ticks::{AxisTicks, RulerGeometry, TickMark, TickRun};
pub use types::{Axis, SurfaceSize};
