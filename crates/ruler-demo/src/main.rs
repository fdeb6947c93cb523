// File: crates/ruler-demo/src/main.rs
// Summary: Demo loads a TOML ruler config, mounts the rulers on Skia surfaces, applies
// optional pans and writes one PNG per axis.
//
// Usage: ruler-demo [config.toml] [pan_x] [pan_y]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use ruler_core::{Axis, Point, Ruler, RulerConfig, SurfaceSize};
use ruler_render_skia::SkiaSurface;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "ruler.toml".to_string());
    let pan_x = parse_pan(args.next(), "pan_x")?;
    let pan_y = parse_pan(args.next(), "pan_y")?;

    let config = load_config(Path::new(&config_path))?;
    println!(
        "Ruler: thickness={} parent_scale={} child_scale={} palette={}",
        config.thickness, config.parent_scale, config.child_scale, config.palette.name
    );

    let mut ruler = Ruler::new(config)?;
    let h = SkiaSurface::new(SurfaceSize::for_axis(Axis::Horizontal, ruler.config().thickness))?;
    let v = SkiaSurface::new(SurfaceSize::for_axis(Axis::Vertical, ruler.config().thickness))?;
    ruler.mount(h, v)?;

    if pan_x != 0.0 {
        ruler.on_pan(Axis::Horizontal, pan_x)?;
    }
    if pan_y != 0.0 {
        ruler.on_pan(Axis::Vertical, pan_y)?;
    }

    // Where a drop at the visible top-left of the work area lands, in ruler units.
    let thickness = ruler.config().thickness;
    let drop = ruler.offsets().borrow().to_units(Point::new(thickness, thickness));
    println!("Top-left of work area = ({:.2}, {:.2}) units from the zero tick", drop.x, drop.y);

    let (mut h, mut v) = ruler.unmount().context("ruler was not mounted")?;
    for (axis, surface) in [(Axis::Horizontal, &mut h), (Axis::Vertical, &mut v)] {
        let out = out_path(axis);
        surface.write_png(&out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// Missing file falls back to defaults; a present but invalid file is an error.
fn load_config(path: &Path) -> Result<RulerConfig> {
    if !path.exists() {
        info!("config {} not found, using defaults", path.display());
        return Ok(RulerConfig::default());
    }
    RulerConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))
}

fn parse_pan(arg: Option<String>, name: &str) -> Result<f64> {
    let Some(s) = arg else { return Ok(0.0) };
    let v = s.trim().parse::<f64>().with_context(|| format!("{name} must be a number, got '{s}'"))?;
    if !v.is_finite() {
        anyhow::bail!("{name} must be finite, got '{s}'");
    }
    Ok(v)
}


fn out_path(axis: Axis) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("ruler_{}.png", axis.name()));
    out
}
