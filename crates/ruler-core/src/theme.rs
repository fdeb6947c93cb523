// File: crates/ruler-core/src/theme.rs
// Summary: RGBA colors and named palettes for ruler rendering.

use std::fmt;

use crate::error::ConfigError;

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse CSS hex notation: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let v = ch.to_digit(16).ok_or_else(invalid)? as u8;
                    c[i] = v * 17;
                }
                Ok(Self::rgb(c[0], c[1], c[2]))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// The four colors a ruler is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulerPalette {
    pub name: &'static str,
    /// Ruler background and corner box fill.
    pub ruler: Rgba,
    /// Tick lines.
    pub scale: Rgba,
    /// Tick labels.
    pub label: Rgba,
    /// Frame and corner box outline.
    pub border: Rgba,
}

impl RulerPalette {
    pub const fn classic() -> Self {
        Self {
            name: "classic",
            ruler: Rgba::rgb(0xb9, 0xb7, 0xb5),
            scale: Rgba::rgb(0x60, 0x60, 0x60),
            label: Rgba::rgb(0x40, 0x36, 0x37),
            border: Rgba::rgb(0x60, 0x60, 0x60),
        }
    }

    pub const fn dark() -> Self {
        Self {
            name: "dark",
            ruler: Rgba::rgb(0x2b, 0x2b, 0x30),
            scale: Rgba::rgb(0x96, 0x96, 0xa0),
            label: Rgba::rgb(0xeb, 0xeb, 0xf5),
            border: Rgba::rgb(0x50, 0x50, 0x58),
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            ruler: Rgba::rgb(0xff, 0xff, 0xff),
            scale: Rgba::rgb(0x00, 0x00, 0x00),
            label: Rgba::rgb(0x00, 0x00, 0x00),
            border: Rgba::rgb(0x00, 0x00, 0x00),
        }
    }
}

impl Default for RulerPalette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in palette presets.
pub fn presets() -> Vec<RulerPalette> {
    vec![
        RulerPalette::classic(),
        RulerPalette::dark(),
        RulerPalette::high_contrast(),
    ]
}

/// Find a palette by its `name` (case-insensitive).
pub fn find(name: &str) -> Result<RulerPalette, ConfigError> {
    presets()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownPalette(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgba::from_hex("#b9b7b5").unwrap(), Rgba::rgb(0xb9, 0xb7, 0xb5));
        assert_eq!(Rgba::from_hex("#fff").unwrap(), Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::from_hex("#00000080").unwrap(), Rgba::rgba(0, 0, 0, 0x80));
        assert!(Rgba::from_hex("b9b7b5").is_err());
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#gggggg").is_err());
    }

    #[test]
    fn display_round_trips_through_hex() {
        let c = Rgba::rgb(0x40, 0x36, 0x37);
        assert_eq!(c.to_string(), "#403637");
        assert_eq!(Rgba::from_hex(&c.to_string()).unwrap(), c);
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("DARK").unwrap(), RulerPalette::dark());
        assert!(matches!(find("neon"), Err(ConfigError::UnknownPalette(_))));
    }
}
