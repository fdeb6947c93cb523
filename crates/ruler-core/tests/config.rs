// File: crates/ruler-core/tests/config.rs
// Purpose: TOML configuration loading, defaults, palettes and validation errors.

use ruler_core::{ConfigError, FontWeight, RulerConfig, RulerPalette, Rgba};

#[test]
fn empty_file_gives_defaults() {
    let cfg = RulerConfig::from_toml_str("").expect("empty config");
    assert_eq!(cfg, RulerConfig::default());
    assert_eq!(cfg.thickness, 25.0);
    assert_eq!(cfg.palette.ruler, Rgba::from_hex("#b9b7b5").unwrap());
    assert_eq!(cfg.palette.label, Rgba::from_hex("#403637").unwrap());
    assert_eq!(cfg.font.weight, FontWeight::Bold);
    assert_eq!(cfg.font.family, "sans-serif");
}

#[test]
fn keys_override_defaults() {
    let cfg = RulerConfig::from_toml_str(
        r##"
        thickness = 30
        parent_scale = 3.7795275591
        child_scale = 2
        child_tick_start = 15
        palette = "dark"
        border_color = "#ff0000"
        font = "12px monospace"
        "##,
    )
    .expect("parse");
    assert_eq!(cfg.thickness, 30.0);
    assert_eq!(cfg.child_scale, 2.0);
    assert_eq!(cfg.child_tick_start, 15.0);
    assert_eq!(cfg.palette.ruler, RulerPalette::dark().ruler);
    assert_eq!(cfg.palette.border, Rgba::rgb(255, 0, 0));
    assert_eq!(cfg.font.size, 12.0);
    assert!(cfg.has_child_ticks());
}

#[test]
fn invalid_values_are_config_errors() {
    let cases = [
        ("parent_scale = 0", "scale"),
        ("parent_scale = -1.5", "scale"),
        ("thickness = -2", "thickness"),
        ("child_scale = -1", "child"),
        ("ruler_color = \"red\"", "color"),
        ("palette = \"neon\"", "palette"),
        ("font = \"bold\"", "font"),
        ("thickness = \"wide\"", "parse"),
    ];
    for (src, kind) in cases {
        let err = RulerConfig::from_toml_str(src).expect_err(src);
        let ok = match kind {
            "scale" => matches!(err, ConfigError::NonPositiveParentScale(_)),
            "thickness" => matches!(err, ConfigError::NegativeThickness(_)),
            "child" => matches!(err, ConfigError::NegativeChildScale(_)),
            "color" => matches!(err, ConfigError::InvalidColor(_)),
            "palette" => matches!(err, ConfigError::UnknownPalette(_)),
            "font" => matches!(err, ConfigError::InvalidFont(_)),
            _ => matches!(err, ConfigError::Parse(_)),
        };
        assert!(ok, "{src}: unexpected {err:?}");
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = RulerConfig::load("target/test_out/does-not-exist.toml").expect_err("missing");
    assert!(matches!(err, ConfigError::Io(_)));
}
