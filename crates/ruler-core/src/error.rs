// File: crates/ruler-core/src/error.rs
// Summary: Error taxonomy: configuration errors (fail fast) and surface preconditions.

use thiserror::Error;

use crate::types::Axis;

/// Rejected ruler configuration. Raised once, at configuration time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parent scale must be positive, got {0}")]
    NonPositiveParentScale(f64),
    #[error("thickness must not be negative, got {0}")]
    NegativeThickness(f64),
    #[error("child scale must be 0 (disabled) or positive, got {0}")]
    NegativeChildScale(f64),
    #[error("tick spacing must be at least 1px, got {0}px")]
    TickSpacingTooSmall(f64),
    #[error("{field} must be finite, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },
    #[error("invalid color {0:?}, expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("invalid font descriptor {0:?}")]
    InvalidFont(String),
    #[error("unknown palette {0:?}")]
    UnknownPalette(String),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RulerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A render was requested before drawing surfaces were attached.
    #[error("drawing surface not attached; mount the ruler first")]
    SurfaceUnavailable,
    /// A pan would move the origin to a non-finite position.
    #[error("{axis:?} offset must stay finite: {offset} + {delta}")]
    NonFiniteOffset { axis: Axis, offset: f64, delta: f64 },
}

pub type Result<T, E = RulerError> = std::result::Result<T, E>;
