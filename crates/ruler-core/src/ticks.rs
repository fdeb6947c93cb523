// File: crates/ruler-core/src/ticks.rs
// Summary: Tick layout along one ruler axis: parent ticks with labels, optional child ticks.

use crate::config::RulerConfig;
use crate::error::ConfigError;

/// One tick mark. Only parent ticks carry a label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Pixel position along the ruler's length.
    pub position: f64,
    pub label: Option<u64>,
    pub is_parent: bool,
}

/// Ticks walked from the cutoff in both directions.
/// `positive` strictly increases and `negative` strictly decreases; both
/// start at the cutoff, so that tick appears in each list when visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickRun {
    pub positive: Vec<TickMark>,
    pub negative: Vec<TickMark>,
}

impl TickRun {
    pub fn iter(&self) -> impl Iterator<Item = &TickMark> {
        self.positive.iter().chain(self.negative.iter())
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Output of one geometry pass; recomputed on every draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    /// Whole parent units the origin has been panned past.
    pub remain: u64,
    /// Pixel position of the first parent tick; both walks start here.
    pub cutoff: f64,
    pub parent: TickRun,
    pub child: TickRun,
}

/// Validated scale parameters for tick layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerGeometry {
    thickness: f64,
    parent_scale: f64,
    child_scale: f64,
}

impl RulerGeometry {
    pub fn new(thickness: f64, parent_scale: f64, child_scale: f64) -> Result<Self, ConfigError> {
        let cfg = RulerConfig { thickness, parent_scale, child_scale, ..RulerConfig::default() };
        Self::from_config(&cfg)
    }

    pub fn from_config(cfg: &RulerConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            thickness: cfg.thickness,
            parent_scale: cfg.parent_scale,
            child_scale: cfg.child_scale,
        })
    }

    pub fn parent_scale(&self) -> f64 { self.parent_scale }

    /// Spacing between child ticks, or `None` when child ticks are disabled.
    pub fn child_step(&self) -> Option<f64> {
        (self.child_scale > 0.0).then(|| self.parent_scale / self.child_scale)
    }

    /// Lay out ticks for a ruler `axis_length` pixels long whose origin is
    /// panned by `offset` pixels. Only ticks on the surface are emitted; a
    /// non-finite offset yields no ticks.
    pub fn compute_ticks(&self, axis_length: f64, offset: f64) -> AxisTicks {
        let remain = (offset / self.parent_scale).floor().abs() as u64;
        let cutoff = (self.thickness + offset) - remain as f64 * self.parent_scale;
        if !cutoff.is_finite() || !axis_length.is_finite() {
            return AxisTicks { remain, cutoff, ..AxisTicks::default() };
        }

        let parent = TickRun {
            positive: walk(cutoff, self.parent_scale, axis_length)
                .map(|(k, p)| parent_tick(p, remain, k))
                .collect(),
            negative: walk(cutoff, -self.parent_scale, axis_length)
                .map(|(k, p)| parent_tick(p, remain, k))
                .collect(),
        };

        let child = match self.child_step() {
            Some(step) => TickRun {
                positive: walk(cutoff, step, axis_length).map(|(_, p)| child_tick(p)).collect(),
                negative: walk(cutoff, -step, axis_length).map(|(_, p)| child_tick(p)).collect(),
            },
            None => TickRun::default(),
        };

        AxisTicks { remain, cutoff, parent, child }
    }
}

/// Step indices past this are beyond exact `f64` integers; a walk that
/// would start there never reaches the surface.
const MAX_STEP_INDEX: f64 = 9_007_199_254_740_992.0;

/// Step indices `k` and positions `start + k * step` on the surface, walking
/// away from `start` in the direction of `step`. Indices before the surface
/// edge are skipped, not visited. Positions are computed, not accumulated,
/// so long rulers do not drift.
fn walk(start: f64, step: f64, end: f64) -> impl Iterator<Item = (u64, f64)> {
    first_index(start, step, end).into_iter().flat_map(move |k0| {
        (k0..)
            .map(move |k| (k, start + k as f64 * step))
            .take_while(move |&(_, p)| if step > 0.0 { p < end } else { p > 0.0 })
    })
}

/// First `k` whose position is inside `[0, end)`: `ceil(-start / step)`
/// walking up from a negative start, `floor((start - end) / |step|) + 1`
/// walking down from at or past the far end.
fn first_index(start: f64, step: f64, end: f64) -> Option<u64> {
    let k = if step > 0.0 {
        if start >= 0.0 { 0.0 } else { (-start / step).ceil() }
    } else if start < end {
        0.0
    } else {
        ((start - end) / -step).floor() + 1.0
    };
    (k < MAX_STEP_INDEX).then(|| k as u64)
}

fn parent_tick(position: f64, remain: u64, step_index: u64) -> TickMark {
    TickMark {
        position,
        label: Some(remain.abs_diff(step_index)),
        is_parent: true,
    }
}

fn child_tick(position: f64) -> TickMark {
    TickMark { position, label: None, is_parent: false }
}
