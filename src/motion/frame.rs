//! The one per-frame driver shared by the whole page.
//!
//! Each animation frame advances the animation tasks first, then runs the
//! frame listeners in `FrameOrder`: the smooth-scroll controller moves the
//! window, then the scroll orchestrator samples the final position once.
//! Frames are only requested while there is work: a running task, or a
//! listener that reported itself busy on the last frame or was woken since.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

use super::easing::Ease;
use super::style::{Channel, ElementStyle, StyleTarget};
use super::ticker::Ticker;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrameOrder {
    Scroll,
    Layout,
}

/// Called once per frame with the frame timestamp; returns whether it
/// needs another frame.
type Listener = Rc<RefCell<dyn FnMut(f64) -> bool>>;

/// Frame listeners in run order, plus whether any of them still has work.
#[derive(Default)]
struct FrameListeners {
    entries: Vec<(u64, FrameOrder, Listener)>,
    next_id: u64,
    busy: bool,
}

impl FrameListeners {
    fn add(&mut self, order: FrameOrder, listener: Listener) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push((id, order, listener));
        self.entries.sort_by_key(|(_, order, _)| *order);
        self.busy = true;
        id
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|(other, _, _)| *other != id);
    }

    fn wake(&mut self) {
        self.busy = true;
    }

    fn wants_frame(&self) -> bool {
        self.busy && !self.entries.is_empty()
    }

    /// Clears the busy flag and hands out the listeners to run this frame.
    /// Wakes that happen while they run count toward the next frame.
    fn begin_frame(&mut self) -> Vec<Listener> {
        self.busy = false;
        self.entries.iter().map(|(_, _, listener)| listener.clone()).collect()
    }

    fn end_frame(&mut self, busy: bool) {
        self.busy |= busy;
    }
}

/// Runs every listener, even after one has reported busy.
fn run_listeners(listeners: &[Listener], timestamp: f64) -> bool {
    let mut busy = false;
    for listener in listeners {
        busy |= (listener.borrow_mut())(timestamp);
    }
    busy
}

thread_local! {
    static TICKER: RefCell<Ticker> = RefCell::new(Ticker::default());
    static LISTENERS: RefCell<FrameListeners> = RefCell::new(FrameListeners::default());
    static FRAME: RefCell<Option<AnimationFrame>> = RefCell::new(None);
}

/// Runs `f` against the shared ticker and makes sure a frame is pending.
/// Task writes happen inside the borrow, so `StyleTarget`s must not call
/// back into the ticker.
pub fn with_ticker<R>(f: impl FnOnce(&mut Ticker) -> R) -> R {
    let result = TICKER.with(|ticker| f(&mut ticker.borrow_mut()));
    ensure_frame();
    result
}

/// Tweens one channel of an element from wherever it is now.
pub fn animate(
    style: &Rc<ElementStyle>,
    channel: Channel,
    to: f64,
    duration_secs: f64,
    ease: Ease,
) {
    let now = dom::now_ms();
    let target: Rc<dyn StyleTarget> = style.clone();
    with_ticker(|ticker| {
        ticker.animate(style.id(), target, channel, to, duration_secs, ease, now)
    });
}

/// Writes a channel immediately, cancelling any tween on it.
pub fn set(style: &Rc<ElementStyle>, channel: Channel, value: f64) {
    with_ticker(|ticker| ticker.set(style.id(), &**style, channel, value));
}

pub fn forget(style: &ElementStyle) {
    TICKER.with(|ticker| ticker.borrow_mut().forget_target(style.id()));
}

/// Keeps a frame listener registered until dropped.
#[must_use = "the listener is removed when this handle is dropped"]
pub struct FrameListener {
    id: u64,
}

impl Drop for FrameListener {
    fn drop(&mut self) {
        let id = self.id;
        LISTENERS.with(|listeners| listeners.borrow_mut().remove(id));
    }
}

/// Registers `listener` and runs it on the next frame. After that it keeps
/// getting frames only while it returns `true` or something calls `wake`.
pub fn add_frame_listener(
    order: FrameOrder,
    listener: impl FnMut(f64) -> bool + 'static,
) -> FrameListener {
    let listener: Listener = Rc::new(RefCell::new(listener));
    let id = LISTENERS.with(|listeners| listeners.borrow_mut().add(order, listener));
    ensure_frame();
    FrameListener { id }
}

/// Gives every frame listener at least one more frame. Input handlers call
/// this when the page moved under them.
pub fn wake() {
    LISTENERS.with(|listeners| listeners.borrow_mut().wake());
    ensure_frame();
}

fn has_work() -> bool {
    let busy = TICKER.with(|ticker| !ticker.borrow().is_idle());
    busy || LISTENERS.with(|listeners| listeners.borrow().wants_frame())
}

fn ensure_frame() {
    let pending = FRAME.with(|frame| frame.borrow().is_some());
    if pending || !has_work() {
        return;
    }
    let handle = request_animation_frame(on_frame);
    FRAME.with(|frame| *frame.borrow_mut() = Some(handle));
}

fn on_frame(timestamp: f64) {
    FRAME.with(|frame| frame.borrow_mut().take());

    TICKER.with(|ticker| ticker.borrow_mut().tick(timestamp));

    let listeners = LISTENERS.with(|listeners| listeners.borrow_mut().begin_frame());
    let busy = run_listeners(&listeners, timestamp);
    LISTENERS.with(|listeners| listeners.borrow_mut().end_frame(busy));

    ensure_frame();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting(frames_left: Rc<Cell<u32>>, ran: Rc<Cell<u32>>) -> Listener {
        Rc::new(RefCell::new(move |_: f64| {
            ran.set(ran.get() + 1);
            let left = frames_left.get().saturating_sub(1);
            frames_left.set(left);
            left > 0
        }))
    }

    fn frame(listeners: &mut FrameListeners, timestamp: f64) {
        let batch = listeners.begin_frame();
        let busy = run_listeners(&batch, timestamp);
        listeners.end_frame(busy);
    }

    #[test]
    fn no_listeners_means_no_frames() {
        let mut listeners = FrameListeners::default();
        listeners.wake();
        assert!(!listeners.wants_frame());
    }

    #[test]
    fn loop_stops_once_every_listener_is_done() {
        let mut listeners = FrameListeners::default();
        let ran = Rc::new(Cell::new(0));
        listeners.add(FrameOrder::Layout, counting(Rc::new(Cell::new(3)), ran.clone()));
        assert!(listeners.wants_frame());

        let mut frames = 0;
        while listeners.wants_frame() && frames < 100 {
            frame(&mut listeners, frames as f64 * 16.0);
            frames += 1;
        }
        assert_eq!(frames, 3);
        assert_eq!(ran.get(), 3);
    }

    #[test]
    fn wake_restarts_an_idle_loop_for_one_frame() {
        let mut listeners = FrameListeners::default();
        let ran = Rc::new(Cell::new(0));
        listeners.add(FrameOrder::Layout, counting(Rc::new(Cell::new(1)), ran.clone()));
        frame(&mut listeners, 0.0);
        assert!(!listeners.wants_frame());

        listeners.wake();
        assert!(listeners.wants_frame());
        frame(&mut listeners, 16.0);
        assert_eq!(ran.get(), 2);
        assert!(!listeners.wants_frame());
    }

    #[test]
    fn one_busy_listener_keeps_the_loop_and_all_listeners_running() {
        let mut listeners = FrameListeners::default();
        let idle_runs = Rc::new(Cell::new(0));
        let busy_runs = Rc::new(Cell::new(0));
        listeners.add(FrameOrder::Scroll, counting(Rc::new(Cell::new(1)), idle_runs.clone()));
        listeners.add(FrameOrder::Layout, counting(Rc::new(Cell::new(5)), busy_runs.clone()));
        for i in 0..3 {
            frame(&mut listeners, i as f64);
        }
        assert!(listeners.wants_frame());
        assert_eq!(idle_runs.get(), 3);
        assert_eq!(busy_runs.get(), 3);
    }

    #[test]
    fn listeners_run_in_frame_order() {
        let mut listeners = FrameListeners::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (order, name) in [(FrameOrder::Layout, "layout"), (FrameOrder::Scroll, "scroll")] {
            let log = log.clone();
            listeners.add(
                order,
                Rc::new(RefCell::new(move |_: f64| {
                    log.borrow_mut().push(name);
                    false
                })),
            );
        }
        frame(&mut listeners, 0.0);
        assert_eq!(*log.borrow(), vec!["scroll", "layout"]);
    }

    #[test]
    fn removed_listener_stops_running() {
        let mut listeners = FrameListeners::default();
        let ran = Rc::new(Cell::new(0));
        let id = listeners.add(FrameOrder::Layout, counting(Rc::new(Cell::new(10)), ran.clone()));
        frame(&mut listeners, 0.0);
        listeners.remove(id);
        assert!(!listeners.wants_frame());
        frame(&mut listeners, 16.0);
        assert_eq!(ran.get(), 1);
    }
}
