//! Hooks that tie components to the scroll orchestrator and frame clock.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::motion::frame::{add_frame_listener, FrameListener, FrameOrder};
use crate::motion::tween::Tween;
use crate::motion::Ease;
use crate::scroll::orchestrator::{self, with_orchestrator};
use crate::scroll::{Track, TrackLayout};

/// `top 85%`: reveal once an element's top passes 85% of the viewport.
pub const REVEAL_TRIGGER: f64 = 0.85;

/// Reads the layout a track needs. `content` is the horizontally moving
/// child of a pinned section, if there is one.
pub fn measure(element: &Element, content: Option<&Element>) -> Option<TrackLayout> {
    if !element.is_connected() {
        return None;
    }
    let rect = element.get_bounding_client_rect();
    let (viewport_width, viewport_height) = dom::viewport();
    let content_width = content
        .map(|content| content.scroll_width() as f64)
        .unwrap_or(viewport_width);
    Some(TrackLayout {
        element_top: rect.top() + dom::scroll_y(),
        element_height: rect.height(),
        viewport_width,
        viewport_height,
        content_width,
    })
}

/// Registers the track `build` returns once the component has mounted and
/// removes it on unmount.
#[hook]
pub fn use_scroll_track<F>(build: F)
where
    F: FnOnce() -> Option<Track> + 'static,
{
    use_effect_with_deps(
        move |_| {
            let id = build().map(|track| with_orchestrator(|o| o.register(track)));
            if id.is_some() {
                orchestrator::sync();
            }
            move || {
                if let Some(id) = id {
                    with_orchestrator(|o| o.unregister(id));
                }
            }
        },
        (),
    );
}

pub fn crosses_trigger(element_top: f64, viewport_height: f64, trigger: f64) -> bool {
    element_top <= viewport_height * trigger
}

/// True from the first time the element's top crosses `trigger` of the
/// viewport height. Stays true afterwards.
#[hook]
pub fn use_reveal(node: &NodeRef, trigger: f64) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let listeners: Rc<RefCell<Vec<EventListener>>> = Rc::new(RefCell::new(Vec::new()));
                let check = {
                    let listeners = listeners.clone();
                    Rc::new(move || {
                        let Some(element) = node.cast::<Element>() else {
                            return;
                        };
                        let top = element.get_bounding_client_rect().top();
                        if crosses_trigger(top, dom::viewport().1, trigger) {
                            revealed.set(true);
                            listeners.borrow_mut().clear();
                        }
                    })
                };
                match dom::window() {
                    Ok(window) => {
                        let mut slots = listeners.borrow_mut();
                        for event in ["scroll", "resize"] {
                            let check = check.clone();
                            slots.push(EventListener::new(&window, event, move |_| check()));
                        }
                    }
                    Err(err) => debug!("reveal without window: {}", err),
                }
                check();
                move || listeners.borrow_mut().clear()
            },
            (),
        );
    }
    *revealed
}

/// Counts from 0 to `target` once `active` turns true.
#[hook]
pub fn use_count_up(target: u32, active: bool, duration_secs: f64) -> u32 {
    let shown = use_state_eq(|| 0u32);
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(target, active)| {
                let slot: Rc<RefCell<Option<FrameListener>>> = Rc::new(RefCell::new(None));
                if *active {
                    let tween = Tween::new(
                        0.0,
                        *target as f64,
                        dom::now_ms(),
                        duration_secs,
                        Ease::Power2Out,
                    );
                    let finished = slot.clone();
                    let listener = add_frame_listener(FrameOrder::Layout, move |now| {
                        shown.set(tween.sample(now).round() as u32);
                        let complete = tween.is_complete(now);
                        if complete {
                            finished.borrow_mut().take();
                        }
                        !complete
                    });
                    *slot.borrow_mut() = Some(listener);
                }
                move || {
                    slot.borrow_mut().take();
                }
            },
            (target, active),
        );
    }
    *shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_line_is_a_fraction_of_the_viewport() {
        assert!(crosses_trigger(680.0, 800.0, REVEAL_TRIGGER));
        assert!(!crosses_trigger(681.0, 800.0, REVEAL_TRIGGER));
        assert!(crosses_trigger(-200.0, 800.0, REVEAL_TRIGGER));
    }
}
