// File: crates/ruler-core/src/ruler.rs
// Summary: Ruler controller: owns the two axis surfaces and drives geometry + rendering on
// mount, resize notifications, pans and reconfiguration.

use log::{debug, info, warn};

use crate::config::RulerConfig;
use crate::error::{Result, RulerError};
use crate::offset::{OffsetStore, SharedOffsets};
use crate::render::RulerRenderer;
use crate::surface::DrawSurface;
use crate::ticks::{AxisTicks, RulerGeometry};
use crate::types::{Axis, SurfaceSize};

struct Surfaces<S> {
    horizontal: S,
    vertical: S,
}

impl<S> Surfaces<S> {
    fn get_mut(&mut self, axis: Axis) -> &mut S {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    fn get(&self, axis: Axis) -> &S {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}

/// A horizontal and a vertical ruler sharing one [`OffsetStore`].
/// Each axis draws only on its own surface.
pub struct Ruler<S> {
    config: RulerConfig,
    geometry: RulerGeometry,
    offsets: SharedOffsets,
    surfaces: Option<Surfaces<S>>,
}

impl<S: DrawSurface> Ruler<S> {
    pub fn new(config: RulerConfig) -> Result<Self> {
        Self::with_offsets(config, OffsetStore::default().shared())
    }

    /// Use an offset store shared with other consumers.
    pub fn with_offsets(config: RulerConfig, offsets: SharedOffsets) -> Result<Self> {
        let geometry = RulerGeometry::from_config(&config)?;
        {
            let mut store = offsets.borrow_mut();
            store.set_scale(config.parent_scale);
            store.set_origin(config.thickness);
        }
        Ok(Self { config, geometry, offsets, surfaces: None })
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    pub fn offsets(&self) -> SharedOffsets {
        SharedOffsets::clone(&self.offsets)
    }

    pub fn is_mounted(&self) -> bool {
        self.surfaces.is_some()
    }

    pub fn surface(&self, axis: Axis) -> Option<&S> {
        self.surfaces.as_ref().map(|s| s.get(axis))
    }

    pub fn surface_mut(&mut self, axis: Axis) -> Option<&mut S> {
        self.surfaces.as_mut().map(|s| s.get_mut(axis))
    }

    /// Attach both surfaces, reset offsets to zero and draw the first frame.
    pub fn mount(&mut self, horizontal: S, vertical: S) -> Result<()> {
        info!(
            "mounting ruler: thickness={} parent_scale={} child_scale={}",
            self.config.thickness, self.config.parent_scale, self.config.child_scale
        );
        {
            let mut store = self.offsets.borrow_mut();
            store.set_offset_x(0.0);
            store.set_offset_y(0.0);
        }
        self.surfaces = Some(Surfaces { horizontal, vertical });
        self.redraw_all()
    }

    /// Detach and return the surfaces (horizontal, vertical).
    pub fn unmount(&mut self) -> Option<(S, S)> {
        self.surfaces.take().map(|s| (s.horizontal, s.vertical))
    }

    /// Size-change notification: redraw both axes at their current offsets.
    pub fn on_surface_resized(&mut self) -> Result<()> {
        self.redraw_all()
    }

    /// Pan one axis by `delta` pixels and redraw it; the other axis is untouched.
    pub fn on_pan(&mut self, axis: Axis, delta: f64) -> Result<AxisTicks> {
        if !self.is_mounted() {
            warn!("pan on {} ruler ignored: not mounted", axis.name());
        }
        self.redraw(axis, delta)
    }

    /// Swap in a new configuration. Invalid configs are rejected and the
    /// current one is kept. Redraws when mounted.
    pub fn reconfigure(&mut self, config: RulerConfig) -> Result<()> {
        let geometry = RulerGeometry::from_config(&config)?;
        info!("ruler reconfigured: parent_scale={} child_scale={}", config.parent_scale, config.child_scale);
        {
            let mut store = self.offsets.borrow_mut();
            store.set_scale(config.parent_scale);
            store.set_origin(config.thickness);
        }
        self.config = config;
        self.geometry = geometry;
        if self.is_mounted() {
            self.redraw_all()?;
        }
        Ok(())
    }

    fn redraw_all(&mut self) -> Result<()> {
        for axis in Axis::ALL {
            self.redraw(axis, 0.0)?;
        }
        Ok(())
    }

    /// One render pass for `axis` at the stored offset plus `delta`.
    /// A non-finite delta or resulting offset is rejected before anything
    /// is drawn or stored.
    pub fn redraw(&mut self, axis: Axis, delta: f64) -> Result<AxisTicks> {
        let surfaces = self.surfaces.as_mut().ok_or(RulerError::SurfaceUnavailable)?;
        let surface = surfaces.get_mut(axis);

        let current = self.offsets.borrow().offset(axis);
        let offset = current + delta;
        if !offset.is_finite() {
            return Err(RulerError::NonFiniteOffset { axis, offset: current, delta });
        }

        let size = SurfaceSize::for_axis(axis, self.config.thickness);
        if surface.size() != size {
            surface.resize(size);
        }

        let ticks = self.geometry.compute_ticks(size.length(axis) as f64, offset);
        debug!(
            "{} pass: offset={offset} remain={} cutoff={:.3} parent={} child={}",
            axis.name(),
            ticks.remain,
            ticks.cutoff,
            ticks.parent.len(),
            ticks.child.len()
        );

        RulerRenderer::new(axis).render(surface, &ticks.parent, &ticks.child, &self.config);
        self.offsets.borrow_mut().set_offset(axis, offset);
        Ok(ticks)
    }
}
