// File: crates/ruler-core/tests/ruler.rs
// Purpose: Ruler lifecycle: mount, resize notifications, pans, reconfiguration and shared offsets.

use ruler_core::{
    Axis, ConfigError, DrawCommand, OffsetStore, Point, RecordingSurface, Ruler, RulerConfig,
    RulerError, SurfaceSize,
};

fn mounted(config: RulerConfig) -> Ruler<RecordingSurface> {
    let mut ruler = Ruler::new(config).expect("valid config");
    ruler
        .mount(RecordingSurface::default(), RecordingSurface::default())
        .expect("mount");
    ruler
}

fn commands(ruler: &Ruler<RecordingSurface>, axis: Axis) -> Vec<DrawCommand> {
    ruler.surface(axis).expect("mounted").commands().to_vec()
}

#[test]
fn render_before_mount_is_a_precondition_error() {
    let mut ruler: Ruler<RecordingSurface> = Ruler::new(RulerConfig::default()).unwrap();
    assert!(matches!(ruler.on_surface_resized(), Err(RulerError::SurfaceUnavailable)));
    assert!(matches!(ruler.on_pan(Axis::Horizontal, 10.0), Err(RulerError::SurfaceUnavailable)));
    assert!(matches!(ruler.redraw(Axis::Vertical, 0.0), Err(RulerError::SurfaceUnavailable)));
    // A failed pan does not move the origin.
    assert_eq!(ruler.offsets().borrow().offset_x(), 0.0);
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let cfg = RulerConfig { parent_scale: 0.0, ..RulerConfig::default() };
    let err = Ruler::<RecordingSurface>::new(cfg).err().expect("should fail");
    assert!(matches!(err, RulerError::Config(ConfigError::NonPositiveParentScale(_))));
}

#[test]
fn mount_sizes_and_draws_both_surfaces() {
    let ruler = mounted(RulerConfig::default());
    assert!(ruler.is_mounted());
    assert_eq!(ruler.surface(Axis::Horizontal).unwrap().commands()[0], DrawCommand::Clear);
    assert_eq!(ruler.surface(Axis::Vertical).unwrap().commands()[0], DrawCommand::Clear);

    use ruler_core::DrawSurface;
    assert_eq!(ruler.surface(Axis::Horizontal).unwrap().size(), SurfaceSize::new(819, 25));
    assert_eq!(ruler.surface(Axis::Vertical).unwrap().size(), SurfaceSize::new(25, 1148));
    assert_eq!(ruler.offsets().borrow().scale(), RulerConfig::default().parent_scale);
}

#[test]
fn pan_updates_one_axis_only() {
    let mut ruler = mounted(RulerConfig::default());
    let vertical_before = commands(&ruler, Axis::Vertical);

    let ticks = ruler.on_pan(Axis::Horizontal, 50.0).expect("pan");
    assert_eq!(ticks.remain, 1);
    ruler.on_pan(Axis::Horizontal, 25.0).expect("pan");

    let offsets = ruler.offsets();
    assert_eq!(offsets.borrow().offset_x(), 75.0);
    assert_eq!(offsets.borrow().offset_y(), 0.0);
    assert_eq!(commands(&ruler, Axis::Vertical), vertical_before);
}

#[test]
fn resize_redraws_at_the_accumulated_offset() {
    let mut ruler = mounted(RulerConfig::default());
    ruler.on_pan(Axis::Vertical, -42.0).unwrap();
    let pan_pass = ruler.surface_mut(Axis::Vertical).unwrap().take_commands();
    ruler.surface_mut(Axis::Horizontal).unwrap().take_commands();

    ruler.on_surface_resized().unwrap();
    assert_eq!(ruler.offsets().borrow().offset_y(), -42.0);
    assert_eq!(commands(&ruler, Axis::Vertical), pan_pass);
    // The horizontal ruler is redrawn too, still at its origin.
    assert_eq!(commands(&ruler, Axis::Horizontal)[0], DrawCommand::Clear);
    assert_eq!(ruler.offsets().borrow().offset_x(), 0.0);
}

#[test]
fn mount_resets_offsets() {
    let mut ruler = mounted(RulerConfig::default());
    ruler.on_pan(Axis::Horizontal, 99.0).unwrap();
    let (h, v) = ruler.unmount().unwrap();
    assert!(!ruler.is_mounted());
    ruler.mount(h, v).unwrap();
    assert_eq!(ruler.offsets().borrow().offset_x(), 0.0);
}

#[test]
fn shared_store_is_visible_to_other_consumers() {
    let store = OffsetStore::default().shared();
    let mut ruler = Ruler::with_offsets(RulerConfig::default(), store.clone()).unwrap();
    ruler.mount(RecordingSurface::default(), RecordingSurface::default()).unwrap();
    ruler.on_pan(Axis::Vertical, 12.5).unwrap();
    assert_eq!(store.borrow().offset_y(), 12.5);
    assert_eq!(store.borrow().offset_x(), 0.0);
}

#[test]
fn reconfigure_validates_and_redraws() {
    let mut ruler = mounted(RulerConfig::default());
    let bad = RulerConfig { thickness: -1.0, ..RulerConfig::default() };
    assert!(ruler.reconfigure(bad).is_err());
    assert_eq!(ruler.config().thickness, 25.0);

    let good = RulerConfig { thickness: 30.0, parent_scale: 20.0, ..RulerConfig::default() };
    ruler.reconfigure(good).unwrap();
    assert_eq!(ruler.offsets().borrow().scale(), 20.0);

    use ruler_core::DrawSurface;
    let h = ruler.surface(Axis::Horizontal).unwrap();
    assert_eq!(h.size().height, 30);
    // Corner box follows the new thickness.
    assert!(matches!(
        h.commands().last(),
        Some(DrawCommand::StrokeRect { rect, .. }) if rect.width == 30.0 && rect.height == 30.0
    ));
}

#[test]
fn non_finite_pans_are_rejected_and_leave_the_axis_usable() {
    let mut ruler = mounted(RulerConfig::default());
    ruler.on_pan(Axis::Horizontal, 30.0).unwrap();
    let before = commands(&ruler, Axis::Horizontal);

    for delta in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let err = ruler.on_pan(Axis::Horizontal, delta).err().expect("rejected");
        assert!(matches!(err, RulerError::NonFiniteOffset { axis: Axis::Horizontal, .. }));
        assert_eq!(ruler.offsets().borrow().offset_x(), 30.0);
    }
    // Nothing was drawn by the rejected pans.
    assert_eq!(commands(&ruler, Axis::Horizontal), before);

    // A finite sum can still overflow.
    ruler.on_pan(Axis::Vertical, f64::MAX).unwrap();
    assert!(ruler.on_pan(Axis::Vertical, f64::MAX).is_err());
    assert_eq!(ruler.offsets().borrow().offset_y(), f64::MAX);

    let ticks = ruler.on_pan(Axis::Horizontal, 10.0).unwrap();
    assert_eq!(ruler.offsets().borrow().offset_x(), 40.0);
    assert!(!ticks.parent.is_empty());
}

#[test]
fn zero_labelled_tick_maps_to_zero_units() {
    let mut ruler = mounted(RulerConfig::default());
    for (axis, delta) in [(Axis::Horizontal, 60.0), (Axis::Vertical, 150.0)] {
        let ticks = ruler.on_pan(axis, delta).unwrap();
        let zero = ticks.parent.positive.iter().find(|t| t.label == Some(0)).expect("zero tick");
        assert!((zero.position - (25.0 + delta)).abs() < 1e-9);

        let store = ruler.offsets();
        let units = store.borrow().to_units(Point::on_axis(axis, zero.position, zero.position));
        let along = match axis {
            Axis::Horizontal => units.x,
            Axis::Vertical => units.y,
        };
        assert!(along.abs() < 1e-9, "{axis:?}: {along}");
    }

    // One parent step further is one unit.
    let store = ruler.offsets();
    let one = store.borrow().to_units(Point::new(25.0 + 60.0 + store.borrow().scale(), 0.0));
    assert!((one.x - 1.0).abs() < 1e-9);
}

#[test]
fn reconfigured_thickness_moves_the_unit_origin() {
    let mut ruler = mounted(RulerConfig::default());
    ruler.reconfigure(RulerConfig { thickness: 40.0, ..RulerConfig::default() }).unwrap();
    let store = ruler.offsets();
    assert_eq!(store.borrow().origin(), 40.0);
    assert_eq!(store.borrow().to_units(Point::new(40.0, 40.0)), Point::new(0.0, 0.0));
}
