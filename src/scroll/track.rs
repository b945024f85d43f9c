use std::rc::Rc;

use log::debug;

#[cfg(test)]
use super::region::Phase;
use super::region::{Region, RegionSpec, RegionState, TrackLayout};
use crate::motion::{Channel, Ease, Keyframes, StyleTarget};

/// How the applied progress follows the raw scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scrub {
    Instant,
    /// Exponential catch-up with this time constant, in seconds.
    Lag(f64),
}

const SNAP: f64 = 1e-4;

impl Scrub {
    pub fn follow(self, shown: f64, raw: f64, dt_ms: f64) -> f64 {
        let next = match self {
            Scrub::Instant => raw,
            Scrub::Lag(lag) if lag > 0.0 && dt_ms > 0.0 => {
                let alpha = 1.0 - (-dt_ms / (lag * 1000.0)).exp();
                shown + (raw - shown) * alpha
            }
            Scrub::Lag(lag) if lag > 0.0 => shown,
            Scrub::Lag(_) => raw,
        };
        if (raw - next).abs() < SNAP {
            raw
        } else {
            next
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scale {
    Absolute,
    /// Output is multiplied by the track's horizontal travel.
    Travel,
}

/// Sub-range of the parent progress, computed from layout on refresh.
pub type WindowFn = Box<dyn Fn(&TrackLayout) -> Option<(f64, f64)>>;
pub type MeasureFn = Box<dyn Fn() -> Option<TrackLayout>>;

/// One visual channel of one target driven by a track's progress.
pub struct Binding {
    target: Rc<dyn StyleTarget>,
    channel: Channel,
    keyframes: Keyframes,
    ease: Ease,
    scale: Scale,
    window: Option<WindowFn>,
    resolved: (f64, f64),
    rest: Option<f64>,
}

impl Binding {
    pub fn new(target: Rc<dyn StyleTarget>, channel: Channel, keyframes: Keyframes) -> Self {
        Self {
            target,
            channel,
            keyframes,
            ease: Ease::Linear,
            scale: Scale::Absolute,
            window: None,
            resolved: (0.0, 1.0),
            rest: None,
        }
    }

    pub fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn travel_scaled(mut self) -> Self {
        self.scale = Scale::Travel;
        self
    }

    /// Restricts the binding to part of the parent progress. A window that
    /// cannot be computed counts as already finished.
    pub fn within(
        mut self,
        window: impl Fn(&TrackLayout) -> Option<(f64, f64)> + 'static,
    ) -> Self {
        self.window = Some(Box::new(window));
        self
    }

    /// Value written when the region has no scroll length, instead of the
    /// channel's identity value.
    pub fn resting_at(mut self, value: f64) -> Self {
        self.rest = Some(value);
        self
    }

    fn rest_value(&self) -> f64 {
        self.rest.unwrap_or_else(|| self.channel.rest_value())
    }

    fn resolve(&mut self, layout: Option<&TrackLayout>) {
        self.resolved = match (&self.window, layout) {
            (None, _) => (0.0, 1.0),
            (Some(window), Some(layout)) => window(layout).unwrap_or((0.0, 0.0)),
            (Some(_), None) => (0.0, 0.0),
        };
    }

    fn local_progress(&self, progress: f64) -> f64 {
        let (start, end) = self.resolved;
        if end - start > f64::EPSILON {
            ((progress - start) / (end - start)).clamp(0.0, 1.0)
        } else if progress >= end {
            1.0
        } else {
            0.0
        }
    }

    pub fn value(&self, progress: f64, travel: f64) -> f64 {
        let value = self.keyframes.sample(self.ease.apply(self.local_progress(progress)));
        match self.scale {
            Scale::Absolute => value,
            Scale::Travel => value * travel,
        }
    }

    fn write(&self, value: f64) {
        if self.target.is_attached() {
            self.target.write(self.channel, value);
        }
    }
}

/// A scroll region with everything it drives.
pub struct Track {
    label: &'static str,
    spec: RegionSpec,
    measure: MeasureFn,
    bindings: Vec<Binding>,
    pin: Option<Rc<dyn StyleTarget>>,
    scrub: Scrub,
    layout: Option<TrackLayout>,
    region: Option<Region>,
    state: RegionState,
    shown: Option<f64>,
    last_ms: Option<f64>,
    applied: Option<f64>,
    at_rest: bool,
}

impl Track {
    pub fn new(
        label: &'static str,
        spec: RegionSpec,
        measure: impl Fn() -> Option<TrackLayout> + 'static,
    ) -> Self {
        Self {
            label,
            spec,
            measure: Box::new(measure),
            bindings: Vec::new(),
            pin: None,
            scrub: Scrub::Instant,
            layout: None,
            region: None,
            state: RegionState::default(),
            shown: None,
            last_ms: None,
            applied: None,
            at_rest: false,
        }
    }

    pub fn bind(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Reserves `viewport height + travel` of scroll space on `spacer`; its
    /// sticky child stays in view while the content moves sideways.
    pub fn pinned(mut self, spacer: Rc<dyn StyleTarget>) -> Self {
        self.pin = Some(spacer);
        self
    }

    pub fn scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = scrub;
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn travel(&self) -> f64 {
        self.layout.map(|layout| layout.travel()).unwrap_or(0.0)
    }

    /// First refresh phase: size the pin spacer from the current layout.
    pub(crate) fn reserve_pin(&mut self) {
        let Some(spacer) = &self.pin else {
            return;
        };
        if let Some(layout) = (self.measure)() {
            if spacer.is_attached() {
                spacer.write(Channel::MinHeight, layout.viewport_height + layout.travel());
            }
        }
    }

    /// Second refresh phase: re-read layout and recompute every boundary.
    pub(crate) fn resolve(&mut self) {
        self.layout = (self.measure)();
        self.region = self.layout.map(|layout| self.spec.resolve(&layout));
        let layout = self.layout;
        for binding in &mut self.bindings {
            binding.resolve(layout.as_ref());
        }
        self.applied = None;
        self.at_rest = false;
        debug!("track {} resolved to {:?}", self.label, self.region);
    }

    /// Applies one scroll sample to every binding. Returns `true` while a
    /// lagged scrub is still catching up with the scroll position.
    pub(crate) fn update(&mut self, scroll: f64, now_ms: f64) -> bool {
        let Some(region) = self.region else {
            return false;
        };
        let Some(raw) = region.progress(scroll) else {
            if !self.at_rest {
                for binding in &self.bindings {
                    binding.write(binding.rest_value());
                }
                self.at_rest = true;
            }
            return false;
        };

        let dt = self.last_ms.map(|last| now_ms - last).unwrap_or(0.0);
        self.last_ms = Some(now_ms);
        let shown = match self.shown {
            Some(shown) => self.scrub.follow(shown, raw, dt),
            None => raw,
        };
        self.shown = Some(shown);
        let catching_up = shown != raw;

        if self.applied == Some(shown) {
            return catching_up;
        }
        self.state.advance(shown);
        let travel = self.travel();
        for binding in &self.bindings {
            binding.write(binding.value(shown, travel));
        }
        self.applied = Some(shown);
        self.at_rest = false;
        catching_up
    }
}

#[cfg(test)]
impl Track {
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Progress as last applied to the targets.
    pub fn progress(&self) -> Option<f64> {
        self.applied
    }
}
