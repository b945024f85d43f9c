//! Wheel smoothing for fine-pointer devices.
//!
//! Wheel input moves a target position; the window eases toward it over a
//! fixed duration. Touch scrolling and keyboard/scrollbar scrolling stay
//! native, and the controller adopts the native position whenever it is
//! not animating. It only asks for frames while a tween is running.

use std::cell::RefCell;

use gloo_events::{EventListener, EventListenerOptions};
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions, WheelEvent};

use crate::config;
use crate::dom;
use crate::error::DomError;
use crate::motion::frame::{self, add_frame_listener, FrameListener, FrameOrder};
use crate::motion::tween::Tween;
use crate::motion::Ease;

const LINE_HEIGHT: f64 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScroller {
    current: f64,
    target: f64,
    limit: f64,
    duration: f64,
    wheel_multiplier: f64,
    tween: Option<Tween>,
}

impl SmoothScroller {
    pub fn new(duration: f64, wheel_multiplier: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            duration,
            wheel_multiplier,
            tween: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    /// Adopts a position the page reached without us.
    pub fn sync(&mut self, native: f64) {
        if !self.is_animating() {
            self.current = native;
            self.target = native;
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64, now_ms: f64) {
        let target = self.target + delta_y * self.wheel_multiplier;
        self.scroll_to(target, now_ms);
    }

    pub fn scroll_to(&mut self, y: f64, now_ms: f64) {
        self.target = y.clamp(0.0, self.limit);
        self.tween = Some(Tween::new(
            self.current,
            self.target,
            now_ms,
            self.duration,
            Ease::ExpoOut,
        ));
    }

    /// Position for this frame, if the controller is moving the page.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let tween = self.tween?;
        self.current = tween.sample(now_ms);
        if tween.is_complete(now_ms) {
            self.tween = None;
        }
        Some(self.current)
    }
}

#[cfg(test)]
impl SmoothScroller {
    fn current(&self) -> f64 {
        self.current
    }

    fn target(&self) -> f64 {
        self.target
    }
}

/// Converts a wheel delta to pixels (`deltaMode` 1 is lines, 2 is pages).
pub fn wheel_pixels(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        1 => delta * LINE_HEIGHT,
        2 => delta * page_height,
        _ => delta,
    }
}

thread_local! {
    static SCROLLER: RefCell<Option<SmoothScroller>> = RefCell::new(None);
}

fn with_scroller<R>(f: impl FnOnce(&mut SmoothScroller) -> R) -> Option<R> {
    SCROLLER.with(|scroller| scroller.borrow_mut().as_mut().map(f))
}

/// Keeps the controller alive; dropping it hands scrolling back to the
/// browser.
pub struct SmoothScrollHandle {
    _wheel: EventListener,
    _frame: FrameListener,
}

impl Drop for SmoothScrollHandle {
    fn drop(&mut self) {
        SCROLLER.with(|scroller| scroller.borrow_mut().take());
        debug!("smooth scroll removed");
    }
}

pub fn install() -> Option<SmoothScrollHandle> {
    if dom::matches_media(config::COARSE_POINTER_QUERY) {
        info!("coarse pointer, keeping native scrolling");
        return None;
    }
    let window = dom::window().ok()?;

    let mut scroller = SmoothScroller::new(
        config::SMOOTH_SCROLL_DURATION,
        config::SMOOTH_SCROLL_WHEEL_MULTIPLIER,
    );
    scroller.set_limit(dom::max_scroll());
    scroller.sync(dom::scroll_y());
    SCROLLER.with(|slot| *slot.borrow_mut() = Some(scroller));

    let wheel = EventListener::new_with_options(
        &window,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            if wheel.ctrl_key() {
                return;
            }
            event.prevent_default();
            let delta = wheel_pixels(wheel.delta_y(), wheel.delta_mode(), dom::viewport().1);
            let limit = dom::max_scroll();
            let native = dom::scroll_y();
            let now = dom::now_ms();
            with_scroller(|scroller| {
                scroller.set_limit(limit);
                scroller.sync(native);
                scroller.on_wheel(delta, now);
            });
            frame::wake();
        },
    );

    let frame_listener = add_frame_listener(FrameOrder::Scroll, |timestamp| {
        match with_scroller(|scroller| scroller.tick(timestamp)).flatten() {
            Some(y) => {
                if let Ok(window) = dom::window() {
                    window.scroll_to_with_x_and_y(0.0, y);
                }
                true
            }
            None => false,
        }
    });

    info!("smooth scroll installed");
    Some(SmoothScrollHandle {
        _wheel: wheel,
        _frame: frame_listener,
    })
}

/// Scrolls to `y`, eased by the controller when present.
pub fn scroll_to(y: f64) -> Result<(), DomError> {
    let limit = dom::max_scroll();
    let native = dom::scroll_y();
    let now = dom::now_ms();
    let handled = with_scroller(|scroller| {
        scroller.set_limit(limit);
        scroller.sync(native);
        scroller.scroll_to(y, now);
    });
    if handled.is_some() {
        frame::wake();
    } else {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        dom::window()?.scroll_to_with_scroll_to_options(&options);
    }
    Ok(())
}

/// Brings a section into view below the fixed navbar; `home` goes to the top.
pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
    if id == "home" {
        return scroll_to(0.0);
    }
    let section = dom::element_by_id(id)?;
    scroll_to(dom::document_top(&section) - config::NAV_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SmoothScroller {
        let mut s = SmoothScroller::new(0.8, 1.0);
        s.set_limit(5000.0);
        s
    }

    #[test]
    fn wheel_eases_toward_accumulated_target() {
        let mut s = scroller();
        s.on_wheel(100.0, 0.0);
        s.on_wheel(100.0, 10.0);
        assert_eq!(s.target(), 200.0);
        let early = s.tick(100.0).unwrap();
        assert!(early > 0.0 && early < 200.0);
        assert_eq!(s.tick(810.0), Some(200.0));
        assert!(!s.is_animating());
        assert_eq!(s.tick(900.0), None);
    }

    #[test]
    fn target_is_clamped_to_the_page() {
        let mut s = scroller();
        s.on_wheel(-300.0, 0.0);
        assert_eq!(s.target(), 0.0);
        s.on_wheel(99_999.0, 0.0);
        assert_eq!(s.target(), 5000.0);
    }

    #[test]
    fn idle_controller_adopts_native_position() {
        let mut s = scroller();
        s.sync(1234.0);
        assert_eq!(s.current(), 1234.0);
        s.on_wheel(100.0, 0.0);
        s.sync(50.0);
        assert_eq!(s.target(), 1334.0);
    }

    #[test]
    fn wheel_after_native_scrolling_starts_from_the_native_position() {
        let mut s = scroller();
        s.on_wheel(100.0, 0.0);
        assert_eq!(s.tick(900.0), Some(100.0));
        assert_eq!(s.tick(916.0), None);

        s.sync(2000.0);
        s.on_wheel(100.0, 1000.0);
        assert_eq!(s.target(), 2100.0);
        let first = s.tick(1016.0).unwrap();
        assert!(first >= 2000.0 && first < 2100.0);
    }

    #[test]
    fn shrinking_limit_pulls_target_back() {
        let mut s = scroller();
        s.scroll_to(4000.0, 0.0);
        s.set_limit(3000.0);
        assert_eq!(s.target(), 3000.0);
    }

    #[test]
    fn wheel_modes_convert_to_pixels() {
        assert_eq!(wheel_pixels(3.0, 0, 800.0), 3.0);
        assert_eq!(wheel_pixels(3.0, 1, 800.0), 48.0);
        assert_eq!(wheel_pixels(1.0, 2, 800.0), 800.0);
    }
}
