//! Scroll regions: where a track starts and ends, and how far along the
//! page is inside it.

use log::debug;

const MIN_REGION: f64 = 1e-6;

/// A line on the tracked element meeting a line on the viewport, each given
/// as a fraction of its height. `top 80%` is `Anchor::new(0.0, 0.8)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: f64,
    pub viewport: f64,
}

impl Anchor {
    pub const TOP_TOP: Anchor = Anchor::new(0.0, 0.0);
    pub const TOP_BOTTOM: Anchor = Anchor::new(0.0, 1.0);
    pub const BOTTOM_TOP: Anchor = Anchor::new(1.0, 0.0);
    pub const BOTTOM_BOTTOM: Anchor = Anchor::new(1.0, 1.0);

    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which the two lines meet.
    pub fn scroll_position(&self, layout: &TrackLayout) -> f64 {
        layout.element_top + layout.element_height * self.element
            - layout.viewport_height * self.viewport
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionEnd {
    Anchor(Anchor),
    /// `+=` the track's horizontal travel.
    Travel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionSpec {
    pub start: Anchor,
    pub end: RegionEnd,
}

impl RegionSpec {
    pub const fn new(start: Anchor, end: RegionEnd) -> Self {
        Self { start, end }
    }

    /// The whole time the element crosses the viewport.
    pub const fn crossing() -> Self {
        Self::new(Anchor::TOP_BOTTOM, RegionEnd::Anchor(Anchor::BOTTOM_TOP))
    }

    /// From pinning at the top of the viewport until the element's bottom
    /// leaves through the top.
    pub const fn leaving() -> Self {
        Self::new(Anchor::TOP_TOP, RegionEnd::Anchor(Anchor::BOTTOM_TOP))
    }

    /// From the element's top at the viewport top until its bottom meets the
    /// viewport bottom. On the root element this is the whole page scroll.
    pub const fn scrolling_through() -> Self {
        Self::new(Anchor::TOP_TOP, RegionEnd::Anchor(Anchor::BOTTOM_BOTTOM))
    }

    /// Pinned at the top for as long as the horizontal content needs.
    pub const fn pinned_travel() -> Self {
        Self::new(Anchor::TOP_TOP, RegionEnd::Travel)
    }

    pub fn resolve(&self, layout: &TrackLayout) -> Region {
        let start = self.start.scroll_position(layout);
        let end = match self.end {
            RegionEnd::Anchor(anchor) => anchor.scroll_position(layout),
            RegionEnd::Travel => start + layout.travel(),
        };
        Region { start, end }
    }
}

/// Layout facts a track depends on, re-read on every refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackLayout {
    /// Top of the trigger element in document coordinates.
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Full scroll width of horizontally-moving content, if any.
    pub content_width: f64,
}

impl TrackLayout {
    /// Horizontal distance content must move to show its last pixel.
    pub fn travel(&self) -> f64 {
        let travel = self.content_width - self.viewport_width;
        if travel.is_finite() {
            travel.max(0.0)
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub start: f64,
    pub end: f64,
}

impl Region {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.start.is_finite() && self.end.is_finite() && self.length() > MIN_REGION)
    }

    /// Normalized position of `scroll` inside the region, clamped to
    /// `[0, 1]`. `None` for a zero-length region.
    pub fn progress(&self, scroll: f64) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(((scroll - self.start) / self.length()).clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not reached yet.
    Idle,
    /// Strictly inside the region.
    Active,
    /// Held at a boundary after having been reached.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionState {
    phase: Phase,
}

impl Default for RegionState {
    fn default() -> Self {
        Self { phase: Phase::Idle }
    }
}

impl RegionState {
    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Moves the state machine to match `progress`; transitions depend on
    /// position only.
    pub fn advance(&mut self, progress: f64) -> Phase {
        let next = if progress > 0.0 && progress < 1.0 {
            Phase::Active
        } else if self.phase == Phase::Idle && progress <= 0.0 {
            Phase::Idle
        } else {
            Phase::Settled
        };
        if next != self.phase {
            debug!("region {:?} -> {:?} at {:.3}", self.phase, next, progress);
            self.phase = next;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TrackLayout {
        TrackLayout {
            element_top: 2000.0,
            element_height: 800.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
            content_width: 5280.0,
        }
    }

    #[test]
    fn progress_clamps_outside_region() {
        let region = Region { start: 100.0, end: 1100.0 };
        assert_eq!(region.progress(-50.0), Some(0.0));
        assert_eq!(region.progress(100.0), Some(0.0));
        assert_eq!(region.progress(600.0), Some(0.5));
        assert_eq!(region.progress(1100.0), Some(1.0));
        assert_eq!(region.progress(9000.0), Some(1.0));
    }

    #[test]
    fn quarter_of_the_way_through() {
        let region = RegionSpec::leaving().resolve(&TrackLayout {
            element_top: 500.0,
            element_height: 1000.0,
            ..TrackLayout::default()
        });
        assert_eq!(region.progress(750.0), Some(0.25));
    }

    #[test]
    fn scrolling_through_the_root_spans_the_whole_page() {
        let page = TrackLayout {
            element_top: 0.0,
            element_height: 3000.0,
            viewport_height: 800.0,
            ..TrackLayout::default()
        };
        let region = RegionSpec::scrolling_through().resolve(&page);
        assert_eq!(region, Region { start: 0.0, end: 2200.0 });
        assert_eq!(region.progress(1100.0), Some(0.5));

        let short_page = TrackLayout { element_height: 800.0, ..page };
        assert_eq!(RegionSpec::scrolling_through().resolve(&short_page).progress(0.0), None);
    }

    #[test]
    fn anchors_resolve_against_viewport_lines() {
        let l = layout();
        assert_eq!(Anchor::TOP_TOP.scroll_position(&l), 2000.0);
        assert_eq!(Anchor::TOP_BOTTOM.scroll_position(&l), 1200.0);
        assert_eq!(Anchor::BOTTOM_TOP.scroll_position(&l), 2800.0);
        assert_eq!(Anchor::new(0.0, 0.8).scroll_position(&l), 1360.0);
    }

    #[test]
    fn pinned_travel_region_spans_the_horizontal_travel() {
        let region = RegionSpec::pinned_travel().resolve(&layout());
        assert_eq!(region, Region { start: 2000.0, end: 6000.0 });
    }

    #[test]
    fn content_narrower_than_viewport_has_no_travel() {
        let l = TrackLayout { content_width: 600.0, ..layout() };
        assert_eq!(l.travel(), 0.0);
        let region = RegionSpec::pinned_travel().resolve(&l);
        assert!(region.is_degenerate());
        assert_eq!(region.progress(2000.0), None);
    }

    #[test]
    fn non_finite_layout_is_degenerate() {
        let region = Region { start: f64::NAN, end: 10.0 };
        assert_eq!(region.progress(5.0), None);
    }

    #[test]
    fn state_machine_follows_position() {
        let mut state = RegionState::default();
        assert_eq!(state.advance(0.0), Phase::Idle);
        assert_eq!(state.advance(0.3), Phase::Active);
        assert_eq!(state.advance(1.0), Phase::Settled);
        assert_eq!(state.advance(0.999), Phase::Active);
        assert_eq!(state.advance(0.0), Phase::Settled);
    }

    #[test]
    fn jumping_past_the_region_settles_directly() {
        let mut state = RegionState::default();
        assert_eq!(state.advance(1.0), Phase::Settled);
    }
}
