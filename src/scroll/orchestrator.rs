//! Drives every registered track from one scroll sample per update.
//!
//! Scroll and resize events wake the frame loop; it keeps running only
//! while a lagged track is still catching up.

use std::cell::RefCell;

use gloo_events::EventListener;
use log::{debug, info};

#[cfg(test)]
use super::region::Phase;
use super::track::Track;
use crate::dom;
use crate::motion::frame::{self, add_frame_listener, FrameListener, FrameOrder};

pub type TrackId = u32;

#[derive(Default)]
pub struct ScrollOrchestrator {
    tracks: Vec<(TrackId, Track)>,
    next_id: TrackId,
}

impl ScrollOrchestrator {
    /// Adds a track, measuring it straight away.
    pub fn register(&mut self, mut track: Track) -> TrackId {
        self.next_id += 1;
        let id = self.next_id;
        track.reserve_pin();
        track.resolve();
        debug!("registered track {} ({})", id, track.label());
        self.tracks.push((id, track));
        id
    }

    pub fn unregister(&mut self, id: TrackId) {
        self.tracks.retain(|(other, _)| *other != id);
    }

    /// Re-measures all tracks. Pins are sized first because they move
    /// everything below them.
    pub fn refresh(&mut self) {
        for (_, track) in &mut self.tracks {
            track.reserve_pin();
        }
        for (_, track) in &mut self.tracks {
            track.resolve();
        }
    }

    /// Applies `scroll` to every track. Returns whether any track needs
    /// more frames to catch up.
    pub fn update(&mut self, scroll: f64, now_ms: f64) -> bool {
        let mut busy = false;
        for (_, track) in &mut self.tracks {
            busy |= track.update(scroll, now_ms);
        }
        busy
    }
}

#[cfg(test)]
impl ScrollOrchestrator {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|(other, _)| *other == id).map(|(_, track)| track)
    }

    pub fn progress(&self, id: TrackId) -> Option<f64> {
        self.track(id).and_then(Track::progress)
    }

    pub fn phase(&self, id: TrackId) -> Option<Phase> {
        self.track(id).map(Track::phase)
    }
}

thread_local! {
    static ORCHESTRATOR: RefCell<ScrollOrchestrator> = RefCell::new(ScrollOrchestrator::default());
}

pub fn with_orchestrator<R>(f: impl FnOnce(&mut ScrollOrchestrator) -> R) -> R {
    ORCHESTRATOR.with(|orchestrator| f(&mut orchestrator.borrow_mut()))
}

/// Samples the scroll position once and applies it to every track, waking
/// the frame loop if a lagged track has to catch up.
pub fn sync() {
    let scroll = dom::scroll_y();
    let now = dom::now_ms();
    if with_orchestrator(|orchestrator| orchestrator.update(scroll, now)) {
        frame::wake();
    }
}

/// Re-measures every track and re-applies the current position.
pub fn refresh() {
    with_orchestrator(ScrollOrchestrator::refresh);
    sync();
}

/// Window listeners and the frame hook that keep tracks in step with the
/// page. Dropping it stops all scroll-linked updates.
pub struct ScrollDriver {
    _scroll: EventListener,
    _resize: EventListener,
    _frame: FrameListener,
}

pub fn install() -> Option<ScrollDriver> {
    let window = dom::window().ok()?;
    let scroll = EventListener::new(&window, "scroll", |_| frame::wake());
    let resize = EventListener::new(&window, "resize", |_| {
        debug!("viewport resized, refreshing tracks");
        refresh();
    });
    let frame_listener = add_frame_listener(FrameOrder::Layout, |timestamp| {
        let scroll = dom::scroll_y();
        with_orchestrator(|orchestrator| orchestrator.update(scroll, timestamp))
    });
    info!("scroll orchestrator installed");
    Some(ScrollDriver {
        _scroll: scroll,
        _resize: resize,
        _frame: frame_listener,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::testing::RecordingTarget;
    use crate::motion::{Channel, Ease, Keyframes};
    use crate::scroll::region::{RegionSpec, TrackLayout};
    use crate::scroll::track::{Binding, Scrub};
    use std::cell::Cell;
    use std::rc::Rc;

    fn gallery_layout(viewport_width: f64) -> TrackLayout {
        TrackLayout {
            element_top: 1000.0,
            element_height: 800.0,
            viewport_width,
            viewport_height: 800.0,
            content_width: 4000.0 + viewport_width,
        }
    }

    /// Horizontal strip moving left by the full travel.
    fn strip(content: Rc<RecordingTarget>) -> Binding {
        Binding::new(content, Channel::X, Keyframes::linear(0.0, -1.0)).travel_scaled()
    }

    fn gallery(
        layout: Rc<Cell<TrackLayout>>,
        content: Rc<RecordingTarget>,
        spacer: Rc<RecordingTarget>,
    ) -> Track {
        Track::new("gallery", RegionSpec::pinned_travel(), move || Some(layout.get()))
            .pinned(spacer)
            .bind(strip(content))
    }

    #[test]
    fn pinned_gallery_translates_by_progress_times_travel() {
        let layout = Rc::new(Cell::new(gallery_layout(1280.0)));
        let content = Rc::new(RecordingTarget::default());
        let spacer = Rc::new(RecordingTarget::default());
        let mut orchestrator = ScrollOrchestrator::default();
        let id = orchestrator.register(gallery(layout, content.clone(), spacer.clone()));

        assert_eq!(spacer.last(Channel::MinHeight), Some(4800.0));

        orchestrator.update(1000.0 + 1000.0, 0.0);
        assert_eq!(orchestrator.progress(id), Some(0.25));
        assert_eq!(content.last(Channel::X), Some(-1000.0));
        assert_eq!(orchestrator.phase(id), Some(Phase::Active));
    }

    #[test]
    fn positions_outside_region_clamp_and_settle() {
        let layout = Rc::new(Cell::new(gallery_layout(1280.0)));
        let content = Rc::new(RecordingTarget::default());
        let spacer = Rc::new(RecordingTarget::default());
        let mut orchestrator = ScrollOrchestrator::default();
        let id = orchestrator.register(gallery(layout, content.clone(), spacer));

        orchestrator.update(0.0, 0.0);
        assert_eq!(orchestrator.progress(id), Some(0.0));
        assert_eq!(orchestrator.phase(id), Some(Phase::Idle));
        assert_eq!(content.last(Channel::X), Some(0.0));

        orchestrator.update(99_999.0, 16.0);
        assert_eq!(orchestrator.progress(id), Some(1.0));
        assert_eq!(orchestrator.phase(id), Some(Phase::Settled));
        assert_eq!(content.last(Channel::X), Some(-4000.0));
    }

    #[test]
    fn every_binding_sees_the_same_sample() {
        let content = Rc::new(RecordingTarget::default());
        let backdrop = Rc::new(RecordingTarget::default());
        let bar = Rc::new(RecordingTarget::default());
        let layout = gallery_layout(1000.0);
        let track = Track::new("gallery", RegionSpec::pinned_travel(), move || Some(layout))
            .bind(strip(content.clone()))
            .bind(
                Binding::new(backdrop.clone(), Channel::X, Keyframes::linear(0.0, -0.3))
                    .travel_scaled(),
            )
            .bind(Binding::new(bar.clone(), Channel::ScaleX, Keyframes::linear(0.0, 1.0)));
        let mut orchestrator = ScrollOrchestrator::default();
        orchestrator.register(track);

        orchestrator.update(1000.0 + 2000.0, 0.0);
        assert_eq!(content.last(Channel::X), Some(-2000.0));
        assert!((backdrop.last(Channel::X).unwrap() + 600.0).abs() < 1e-9);
        assert_eq!(bar.last(Channel::ScaleX), Some(0.5));
    }

    #[test]
    fn outputs_are_monotonic_in_scroll() {
        let content = Rc::new(RecordingTarget::default());
        let layout = gallery_layout(1280.0);
        let track = Track::new("gallery", RegionSpec::pinned_travel(), move || Some(layout))
            .bind(strip(content.clone()));
        let mut orchestrator = ScrollOrchestrator::default();
        orchestrator.register(track);

        let mut previous = f64::INFINITY;
        for step in 0..=60 {
            orchestrator.update(900.0 + step as f64 * 80.0, step as f64 * 16.0);
            let x = content.last(Channel::X).unwrap();
            assert!(x <= previous);
            previous = x;
        }
    }

    #[test]
    fn resize_remaps_boundaries_without_a_jump() {
        let layout = Rc::new(Cell::new(gallery_layout(1280.0)));
        let content = Rc::new(RecordingTarget::default());
        let spacer = Rc::new(RecordingTarget::default());
        let mut orchestrator = ScrollOrchestrator::default();
        let id = orchestrator.register(gallery(layout.clone(), content.clone(), spacer.clone()));

        orchestrator.update(3000.0, 0.0);
        assert_eq!(orchestrator.progress(id), Some(0.5));

        // Same layout: refresh is idempotent.
        orchestrator.refresh();
        orchestrator.update(3000.0, 16.0);
        assert_eq!(orchestrator.progress(id), Some(0.5));
        assert_eq!(content.last(Channel::X), Some(-2000.0));

        // Wider content after a resize: the pin grows and the same scroll
        // position maps through the new boundaries.
        layout.set(TrackLayout { content_width: 9280.0, ..gallery_layout(1280.0) });
        orchestrator.refresh();
        assert_eq!(spacer.last(Channel::MinHeight), Some(8800.0));
        orchestrator.update(3000.0, 32.0);
        assert_eq!(orchestrator.progress(id), Some(0.25));
        assert_eq!(content.last(Channel::X), Some(-2000.0));
    }

    #[test]
    fn degenerate_track_rests_at_identity() {
        let content = Rc::new(RecordingTarget::default());
        let layout = TrackLayout { content_width: 0.0, ..gallery_layout(1280.0) };
        let track = Track::new("empty", RegionSpec::pinned_travel(), move || Some(layout))
            .bind(strip(content.clone()))
            .bind(Binding::new(content.clone(), Channel::Scale, Keyframes::linear(1.2, 1.0)));
        let mut orchestrator = ScrollOrchestrator::default();
        orchestrator.register(track);

        orchestrator.update(1500.0, 0.0);
        orchestrator.update(1600.0, 16.0);
        assert_eq!(content.last(Channel::X), Some(0.0));
        assert_eq!(content.last(Channel::Scale), Some(1.0));
        assert_eq!(content.count(), 2);
    }

    #[test]
    fn detached_targets_are_skipped() {
        let content = Rc::new(RecordingTarget::default());
        let layout = gallery_layout(1280.0);
        let track = Track::new("gallery", RegionSpec::pinned_travel(), move || Some(layout))
            .bind(strip(content.clone()));
        let mut orchestrator = ScrollOrchestrator::default();
        orchestrator.register(track);
        content.detached.set(true);
        orchestrator.update(2000.0, 0.0);
        assert_eq!(content.count(), 0);
    }

    #[test]
    fn unmeasurable_track_is_a_no_op() {
        let content = Rc::new(RecordingTarget::default());
        let track = Track::new("gone", RegionSpec::crossing(), || None)
            .bind(Binding::new(content.clone(), Channel::Y, Keyframes::linear(100.0, -100.0)));
        let mut orchestrator = ScrollOrchestrator::default();
        let id = orchestrator.register(track);
        orchestrator.update(500.0, 0.0);
        assert_eq!(orchestrator.progress(id), None);
        assert_eq!(content.count(), 0);
    }

    #[test]
    fn windowed_binding_reveals_inside_its_sub_range() {
        let card = Rc::new(RecordingTarget::default());
        let layout = gallery_layout(1000.0);
        // Card 3000px into the strip: enters at the right edge at p = 0.5,
        // reaches the center at p = 0.625.
        let track = Track::new("gallery", RegionSpec::pinned_travel(), move || Some(layout)).bind(
            Binding::new(card.clone(), Channel::ClipRight, Keyframes::linear(100.0, 0.0)).within(
                |l| {
                    let offset = 3000.0;
                    let travel = l.travel();
                    let enter = (offset - l.viewport_width) / travel;
                    Some((enter, (offset - l.viewport_width / 2.0) / travel))
                },
            ),
        );
        let mut orchestrator = ScrollOrchestrator::default();
        orchestrator.register(track);

        orchestrator.update(1000.0 + 1000.0, 0.0);
        assert_eq!(card.last(Channel::ClipRight), Some(100.0));
        orchestrator.update(1000.0 + 2250.0, 16.0);
        assert_eq!(card.last(Channel::ClipRight), Some(50.0));
        orchestrator.update(1000.0 + 3000.0, 32.0);
        assert_eq!(card.last(Channel::ClipRight), Some(0.0));
    }

    #[test]
    fn lagged_scrub_converges_toward_raw_progress() {
        let content = Rc::new(RecordingTarget::default());
        let layout = TrackLayout {
            element_top: 0.0,
            element_height: 1000.0,
            ..gallery_layout(1000.0)
        };
        let track = Track::new("hero", RegionSpec::leaving(), move || Some(layout))
            .scrub(Scrub::Lag(1.0))
            .bind(Binding::new(content.clone(), Channel::YPercent, Keyframes::linear(0.0, 30.0)));
        let mut orchestrator = ScrollOrchestrator::default();
        let id = orchestrator.register(track);

        assert!(!orchestrator.update(0.0, 0.0));
        assert!(orchestrator.update(1000.0, 100.0));
        let first = orchestrator.progress(id).unwrap();
        assert!(first > 0.0 && first < 0.2);
        let mut previous = first;
        let mut frames_until_idle = None;
        for frame in 2..400 {
            let busy = orchestrator.update(1000.0, frame as f64 * 100.0);
            let p = orchestrator.progress(id).unwrap();
            assert!(p >= previous);
            previous = p;
            if !busy && frames_until_idle.is_none() {
                frames_until_idle = Some(frame);
            }
        }
        assert_eq!(orchestrator.progress(id), Some(1.0));
        assert_eq!(content.last(Channel::YPercent), Some(30.0));
        // Converged well before the loop ended, and stays idle.
        assert!(matches!(frames_until_idle, Some(frame) if frame < 200));
        assert!(!orchestrator.update(1000.0, 50_000.0));
    }

    #[test]
    fn instant_tracks_never_ask_for_more_frames() {
        let content = Rc::new(RecordingTarget::default());
        let layout = gallery_layout(1280.0);
        let track = Track::new("gallery", RegionSpec::pinned_travel(), move || Some(layout))
            .bind(strip(content.clone()));
        let mut orchestrator = ScrollOrchestrator::default();
        orchestrator.register(track);

        assert!(!orchestrator.update(1500.0, 0.0));
        assert!(!orchestrator.update(2500.0, 16.0));
        assert!(!ScrollOrchestrator::default().update(2500.0, 32.0));
    }

    #[test]
    fn page_progress_bar_follows_the_whole_page() {
        let bar = Rc::new(RecordingTarget::default());
        let page = Rc::new(Cell::new(TrackLayout {
            element_top: 0.0,
            element_height: 3000.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
            content_width: 0.0,
        }));
        let measured = page.clone();
        let track = Track::new("page progress", RegionSpec::scrolling_through(), move || {
            Some(measured.get())
        })
        .bind(
            Binding::new(bar.clone(), Channel::ScaleX, Keyframes::linear(0.0, 1.0)).resting_at(0.0),
        );
        let mut orchestrator = ScrollOrchestrator::default();
        orchestrator.register(track);

        orchestrator.update(1100.0, 0.0);
        assert_eq!(bar.last(Channel::ScaleX), Some(0.5));
        orchestrator.update(2200.0, 16.0);
        assert_eq!(bar.last(Channel::ScaleX), Some(1.0));

        // A page that fits the viewport shows an empty bar, not a full one.
        page.set(TrackLayout { element_height: 800.0, ..page.get() });
        orchestrator.refresh();
        orchestrator.update(0.0, 32.0);
        assert_eq!(bar.last(Channel::ScaleX), Some(0.0));
    }

    #[test]
    fn unregistered_tracks_stop_updating() {
        let content = Rc::new(RecordingTarget::default());
        let layout = gallery_layout(1000.0);
        let track = Track::new("gallery", RegionSpec::pinned_travel(), move || Some(layout))
            .bind(strip(content.clone()))
            .bind(
                Binding::new(content.clone(), Channel::Opacity, Keyframes::linear(0.0, 1.0))
                    .eased(Ease::Power2Out),
            );
        let mut orchestrator = ScrollOrchestrator::default();
        let id = orchestrator.register(track);
        orchestrator.update(1500.0, 0.0);
        let writes = content.count();
        orchestrator.unregister(id);
        orchestrator.update(2500.0, 16.0);
        assert_eq!(content.count(), writes);
        assert_eq!(orchestrator.len(), 0);
    }
}
