// File: crates/ruler-core/src/text.rs
// Summary: Font descriptor for tick labels, parsed from a CSS-like shorthand.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Size used when the descriptor names none (the 2D-canvas default).
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub weight: FontWeight,
    pub size: f32,
    pub family: String,
}

impl FontSpec {
    pub fn new(weight: FontWeight, size: f32, family: impl Into<String>) -> Self {
        Self { weight, size, family: family.into() }
    }

    /// Parse `[bold|normal] [<n>px] <family...>`, e.g. `"bold sans-serif"`
    /// or `"12px Roboto Mono"`.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidFont(s.to_string());
        let mut weight = FontWeight::Normal;
        let mut size = DEFAULT_FONT_SIZE;
        let mut words = s.split_whitespace().peekable();

        if let Some(&w) = words.peek() {
            match w.to_ascii_lowercase().as_str() {
                "bold" => { weight = FontWeight::Bold; words.next(); }
                "normal" => { words.next(); }
                _ => {}
            }
        }
        if let Some(&w) = words.peek() {
            if let Some(px) = w.strip_suffix("px") {
                let v: f32 = px.parse().map_err(|_| invalid())?;
                if !(v.is_finite() && v > 0.0) {
                    return Err(invalid());
                }
                size = v;
                words.next();
            }
        }
        let family = words.collect::<Vec<_>>().join(" ");
        if family.is_empty() {
            return Err(invalid());
        }
        Ok(Self { weight, size, family })
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(FontWeight::Bold, DEFAULT_FONT_SIZE, "sans-serif")
    }
}

impl FromStr for FontSpec {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight == FontWeight::Bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}
