// File: crates/ruler-core/src/config.rs
// Summary: Ruler configuration: typed, validated settings plus the TOML file form.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::text::FontSpec;
use crate::theme::{self, RulerPalette, Rgba};
use crate::types::{DEFAULT_PARENT_SCALE, DEFAULT_THICKNESS, MIN_TICK_SPACING};

/// Settings for one ruler pair. Immutable during a render pass.
/// Contract (after [`RulerConfig::validate`]): `thickness >= 0`,
/// `parent_scale > 0`, `child_scale == 0 || child_scale > 0`, all finite,
/// and neither tick spacing below [`MIN_TICK_SPACING`].
#[derive(Clone, Debug, PartialEq)]
pub struct RulerConfig {
    /// Ruler thickness in pixels; also the side of the corner box.
    pub thickness: f64,
    /// Pixels per parent unit.
    pub parent_scale: f64,
    /// Subdivisions per parent unit; 0 disables child ticks.
    pub child_scale: f64,
    /// Distance from the outer edge where child ticks start (0 = full length).
    pub child_tick_start: f64,
    pub palette: RulerPalette,
    pub font: FontSpec,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            parent_scale: DEFAULT_PARENT_SCALE,
            child_scale: 0.0,
            child_tick_start: 0.0,
            palette: RulerPalette::classic(),
            font: FontSpec::default(),
        }
    }
}

impl RulerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("thickness", self.thickness),
            ("parent_scale", self.parent_scale),
            ("child_scale", self.child_scale),
            ("child_tick_start", self.child_tick_start),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue { field, value });
            }
        }
        if self.parent_scale <= 0.0 {
            return Err(ConfigError::NonPositiveParentScale(self.parent_scale));
        }
        if self.thickness < 0.0 {
            return Err(ConfigError::NegativeThickness(self.thickness));
        }
        if self.child_scale < 0.0 {
            return Err(ConfigError::NegativeChildScale(self.child_scale));
        }
        if self.parent_scale < MIN_TICK_SPACING {
            return Err(ConfigError::TickSpacingTooSmall(self.parent_scale));
        }
        if self.has_child_ticks() && self.parent_scale / self.child_scale < MIN_TICK_SPACING {
            return Err(ConfigError::TickSpacingTooSmall(self.parent_scale / self.child_scale));
        }
        Ok(())
    }

    /// True when child ticks are drawn.
    pub fn has_child_ticks(&self) -> bool {
        self.child_scale > 0.0
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let file: RulerConfigFile = toml::from_str(s)?;
        file.resolve()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

/// On-disk form of [`RulerConfig`]; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulerConfigFile {
    pub thickness: Option<f64>,
    pub parent_scale: Option<f64>,
    pub child_scale: Option<f64>,
    pub child_tick_start: Option<f64>,
    /// Named preset; individual colors below override it.
    pub palette: Option<String>,
    pub ruler_color: Option<String>,
    pub scale_color: Option<String>,
    pub label_color: Option<String>,
    pub border_color: Option<String>,
    pub font: Option<String>,
}

impl RulerConfigFile {
    /// Apply defaults, parse colors and font, then validate.
    pub fn resolve(&self) -> Result<RulerConfig, ConfigError> {
        let base = RulerConfig::default();
        let mut palette = match &self.palette {
            Some(name) => theme::find(name)?,
            None => base.palette,
        };
        let color = |v: &Option<String>, fallback: Rgba| match v {
            Some(hex) => Rgba::from_hex(hex),
            None => Ok(fallback),
        };
        palette.ruler = color(&self.ruler_color, palette.ruler)?;
        palette.scale = color(&self.scale_color, palette.scale)?;
        palette.label = color(&self.label_color, palette.label)?;
        palette.border = color(&self.border_color, palette.border)?;

        let font = match &self.font {
            Some(s) => FontSpec::parse(s)?,
            None => base.font,
        };

        let cfg = RulerConfig {
            thickness: self.thickness.unwrap_or(base.thickness),
            parent_scale: self.parent_scale.unwrap_or(base.parent_scale),
            child_scale: self.child_scale.unwrap_or(base.child_scale),
            child_tick_start: self.child_tick_start.unwrap_or(base.child_tick_start),
            palette,
            font,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}
