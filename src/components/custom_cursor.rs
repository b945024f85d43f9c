use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::cursor::{CursorLook, CursorMode, RESET_SELECTOR};
use crate::dom;
use crate::error::DomError;
use crate::motion::frame;
use crate::motion::{Channel, Ease, ElementStyle};

const FOLLOW_DURATION: f64 = 0.5;
const MODE_DURATION: f64 = 0.3;

struct CursorFollow {
    _listeners: Vec<EventListener>,
    ring: Rc<ElementStyle>,
    dot: Rc<ElementStyle>,
}

impl Drop for CursorFollow {
    fn drop(&mut self) {
        frame::forget(&self.ring);
        frame::forget(&self.dot);
    }
}

fn show(ring: &Rc<ElementStyle>, dot: &Rc<ElementStyle>, look: &CursorLook) {
    frame::animate(ring, Channel::ScaleX, look.scale_x, MODE_DURATION, Ease::Power2Out);
    frame::animate(ring, Channel::ScaleY, look.scale_y, MODE_DURATION, Ease::Power2Out);
    frame::animate(dot, Channel::Scale, look.dot_scale, MODE_DURATION, Ease::Power2Out);
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn follow(
    ring_ref: &NodeRef,
    dot_ref: &NodeRef,
    mode: UseStateHandle<CursorMode>,
) -> Result<CursorFollow, DomError> {
    let ring = ElementStyle::new(
        ring_ref
            .cast::<HtmlElement>()
            .ok_or_else(|| DomError::MissingElement("cursor ring".to_string()))?,
    );
    let dot = ElementStyle::new(
        dot_ref
            .cast::<HtmlElement>()
            .ok_or_else(|| DomError::MissingElement("cursor dot".to_string()))?,
    );
    for style in [&ring, &dot] {
        frame::set(style, Channel::XPercent, -50.0);
        frame::set(style, Channel::YPercent, -50.0);
    }

    let document = dom::document()?;

    let on_move = {
        let ring = ring.clone();
        let dot = dot.clone();
        EventListener::new(&document, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = (mouse.client_x() as f64, mouse.client_y() as f64);
            frame::set(&dot, Channel::X, x);
            frame::set(&dot, Channel::Y, y);
            frame::animate(&ring, Channel::X, x, FOLLOW_DURATION, Ease::Power2Out);
            frame::animate(&ring, Channel::Y, y, FOLLOW_DURATION, Ease::Power2Out);
        })
    };

    // mouseenter/mouseleave do not bubble, so listen while capturing.
    let on_enter = {
        let ring = ring.clone();
        let dot = dot.clone();
        let mode = mode.clone();
        EventListener::new_with_options(
            &document,
            "mouseenter",
            EventListenerOptions::run_in_capture_phase(),
            move |event| {
                let Some(element) = event_element(event) else {
                    return;
                };
                let matches = |selector: &str| element.matches(selector).unwrap_or(false);
                let text = element.get_attribute("data-cursor-text");
                if let Some(next) = CursorMode::classify(matches, text) {
                    show(&ring, &dot, &next.look());
                    mode.set(next);
                }
            },
        )
    };

    let on_leave = {
        let ring = ring.clone();
        let dot = dot.clone();
        EventListener::new_with_options(
            &document,
            "mouseleave",
            EventListenerOptions::run_in_capture_phase(),
            move |event| {
                let Some(element) = event_element(event) else {
                    return;
                };
                let resets = element.matches(RESET_SELECTOR).unwrap_or(false)
                    || element.has_attribute("data-cursor-text");
                if resets {
                    show(&ring, &dot, &CursorMode::Default.look());
                    mode.set(CursorMode::Default);
                }
            },
        )
    };

    Ok(CursorFollow {
        _listeners: vec![on_move, on_enter, on_leave],
        ring,
        dot,
    })
}

/// Ring and dot that replace the system cursor on fine pointers.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let ring_ref = use_node_ref();
    let dot_ref = use_node_ref();
    let mode = use_state_eq(|| CursorMode::Default);
    let enabled = use_state(|| !dom::matches_media(config::COARSE_POINTER_QUERY));

    {
        let ring_ref = ring_ref.clone();
        let dot_ref = dot_ref.clone();
        let mode = mode.clone();
        use_effect_with_deps(
            move |enabled| {
                let guard = if *enabled {
                    follow(&ring_ref, &dot_ref, mode)
                        .map_err(|err| debug!("custom cursor disabled: {}", err))
                        .ok()
                } else {
                    None
                };
                move || drop(guard)
            },
            *enabled,
        );
    }

    if !*enabled {
        return html! {};
    }

    let look = mode.look();
    let label = look.label.clone();

    html! {
        <>
            <div
                ref={ring_ref}
                class={classes!(
                    "cursor-ring",
                    look.filled.then_some("filled"),
                    look.rounded.then_some("rounded"),
                    look.difference_blend.then_some("difference"),
                )}
            >
                if let Some(label) = label {
                    <span class="cursor-label">{label}</span>
                }
            </div>
            <div ref={dot_ref} class="cursor-dot" />
            <style>
                {r#"
                .cursor-ring {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: 1px solid var(--white);
                    background-color: transparent;
                    pointer-events: none;
                    z-index: 99999;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: background-color 0.3s ease, border-color 0.3s ease, border-radius 0.3s ease;
                }

                .cursor-ring.filled {
                    background-color: var(--primary);
                    border-color: var(--primary);
                }

                .cursor-ring.rounded {
                    border-radius: 20px;
                }

                .cursor-ring.difference {
                    mix-blend-mode: difference;
                }

                .cursor-label {
                    font-size: 0.25rem;
                    font-weight: 700;
                    letter-spacing: 1px;
                    text-transform: uppercase;
                    color: var(--white);
                    white-space: nowrap;
                }

                .cursor-dot {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background-color: var(--primary);
                    pointer-events: none;
                    z-index: 100000;
                }

                @media (pointer: fine) {
                    body, a, button {
                        cursor: none;
                    }
                }
                "#}
            </style>
        </>
    }
}
