//! Attaching pointer behaviors to elements.
//!
//! `attach` wires the listeners for one behavior and hands back a `Detach`
//! guard; dropping the guard removes the listeners and stops the element's
//! animations.

use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::magnetic::MagneticConfig;
use super::tilt::TiltConfig;
use crate::dom;
use crate::error::DomError;
use crate::geometry::Point;
use crate::motion::frame;
use crate::motion::{Channel, ElementStyle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    Magnetic(MagneticConfig),
    Tilt(TiltConfig),
}

#[must_use = "the behavior is detached when this guard is dropped"]
pub struct Detach {
    _listeners: Vec<EventListener>,
    styles: Vec<Rc<ElementStyle>>,
}

impl Drop for Detach {
    fn drop(&mut self) {
        for style in &self.styles {
            frame::forget(style);
        }
    }
}

fn pointer_of(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(mouse.client_x() as f64, mouse.client_y() as f64))
}

pub fn attach(element: &HtmlElement, behavior: Behavior) -> Result<Detach, DomError> {
    match behavior {
        Behavior::Magnetic(config) => attach_magnetic(element, config),
        Behavior::Tilt(config) => attach_tilt(element, config),
    }
}

fn attach_magnetic(element: &HtmlElement, config: MagneticConfig) -> Result<Detach, DomError> {
    let style = ElementStyle::new(element.clone());
    let follower = match config.follower {
        Some((selector, ratio)) => element
            .query_selector(selector)?
            .and_then(|child| child.dyn_into::<HtmlElement>().ok())
            .map(|child| (ElementStyle::new(child), ratio)),
        None => None,
    };

    let move_target: EventTarget = if config.listen_on_parent {
        element
            .parent_element()
            .ok_or_else(|| DomError::MissingElement("magnetic parent".to_string()))?
            .into()
    } else {
        element.clone().into()
    };

    let on_move = {
        let style = style.clone();
        let follower = follower.clone();
        let element = element.clone();
        EventListener::new(&move_target, "mousemove", move |event| {
            let Some(pointer) = pointer_of(event) else {
                return;
            };
            let rect = dom::rect_of(&element);
            let Some(offset) = config.offset(&rect, pointer) else {
                return;
            };
            let (duration, ease) = (config.move_duration, config.move_ease);
            frame::animate(&style, Channel::X, offset.x, duration, ease);
            frame::animate(&style, Channel::Y, offset.y, duration, ease);
            if let Some((child, ratio)) = &follower {
                frame::animate(child, Channel::X, offset.x * ratio, duration, ease);
                frame::animate(child, Channel::Y, offset.y * ratio, duration, ease);
            }
        })
    };

    let on_leave = {
        let style = style.clone();
        let follower = follower.clone();
        EventListener::new(element, "mouseleave", move |_| {
            let (duration, ease) = (config.return_duration, config.return_ease);
            let children = follower.as_ref().map(|(child, _)| child);
            for target in std::iter::once(&style).chain(children) {
                frame::animate(target, Channel::X, 0.0, duration, ease);
                frame::animate(target, Channel::Y, 0.0, duration, ease);
            }
        })
    };

    let mut styles = vec![style];
    styles.extend(follower.map(|(child, _)| child));
    Ok(Detach {
        _listeners: vec![on_move, on_leave],
        styles,
    })
}

fn attach_tilt(element: &HtmlElement, config: TiltConfig) -> Result<Detach, DomError> {
    let style = ElementStyle::new(element.clone());
    frame::set(&style, Channel::Perspective, config.perspective);

    let on_move = {
        let style = style.clone();
        let tilted = element.clone();
        EventListener::new(element, "mousemove", move |event| {
            let Some(pointer) = pointer_of(event) else {
                return;
            };
            let (rotate_x, rotate_y) = config.rotation(&dom::rect_of(&tilted), pointer);
            let (duration, ease) = (config.move_duration, config.move_ease);
            frame::animate(&style, Channel::RotateX, rotate_x, duration, ease);
            frame::animate(&style, Channel::RotateY, rotate_y, duration, ease);
        })
    };

    let on_leave = {
        let style = style.clone();
        EventListener::new(element, "mouseleave", move |_| {
            let (duration, ease) = (config.return_duration, config.return_ease);
            frame::animate(&style, Channel::RotateX, 0.0, duration, ease);
            frame::animate(&style, Channel::RotateY, 0.0, duration, ease);
        })
    };

    Ok(Detach {
        _listeners: vec![on_move, on_leave],
        styles: vec![style],
    })
}

/// Attaches `behavior` to the element behind `node` for as long as the
/// component is mounted. A missing element is skipped.
#[hook]
pub fn use_pointer_behavior(node: &NodeRef, behavior: Behavior) {
    let node = node.clone();
    use_effect_with_deps(
        move |behavior| {
            let guard = node.cast::<HtmlElement>().and_then(|element| {
                attach(&element, *behavior)
                    .map_err(|err| debug!("pointer behavior skipped: {}", err))
                    .ok()
            });
            move || drop(guard)
        },
        behavior,
    );
}
