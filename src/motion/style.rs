//! Composable visual state for one element.
//!
//! Several animations may drive the same element at once (a gallery image is
//! scaled by one track and shifted by another), so every write goes through a
//! `VisualState` that re-renders the whole `transform` from its parts.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;
use web_sys::HtmlElement;

pub type TargetId = u32;

static NEXT_TARGET: AtomicU32 = AtomicU32::new(1);

pub fn next_target_id() -> TargetId {
    NEXT_TARGET.fetch_add(1, Ordering::Relaxed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    X,
    Y,
    XPercent,
    YPercent,
    Scale,
    ScaleX,
    ScaleY,
    RotateX,
    RotateY,
    Perspective,
    Opacity,
    /// Right inset of a clip-path, in percent.
    ClipRight,
    ObjectPositionX,
    MinHeight,
}

impl Channel {
    /// Value of the channel when nothing has touched it.
    pub fn rest_value(self) -> f64 {
        match self {
            Channel::Scale | Channel::ScaleX | Channel::ScaleY | Channel::Opacity => 1.0,
            Channel::ObjectPositionX => 50.0,
            _ => 0.0,
        }
    }

    pub fn property(self) -> Property {
        match self {
            Channel::Opacity => Property::Opacity,
            Channel::ClipRight => Property::ClipPath,
            Channel::ObjectPositionX => Property::ObjectPosition,
            Channel::MinHeight => Property::MinHeight,
            _ => Property::Transform,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Transform,
    Opacity,
    ClipPath,
    ObjectPosition,
    MinHeight,
}

impl Property {
    pub fn css_name(self) -> &'static str {
        match self {
            Property::Transform => "transform",
            Property::Opacity => "opacity",
            Property::ClipPath => "clip-path",
            Property::ObjectPosition => "object-position",
            Property::MinHeight => "min-height",
        }
    }
}

/// Formats a CSS number without float noise (`-0` becomes `0`).
pub fn css_number(value: f64) -> String {
    let mut text = format!("{:.3}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub x_percent: f64,
    pub y_percent: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub perspective: f64,
    pub opacity: f64,
    pub clip_right: Option<f64>,
    pub object_position_x: f64,
    pub min_height: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x_percent: 0.0,
            y_percent: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            perspective: 0.0,
            opacity: 1.0,
            clip_right: None,
            object_position_x: 50.0,
            min_height: 0.0,
        }
    }
}

impl VisualState {
    pub fn set(&mut self, channel: Channel, value: f64) -> Property {
        match channel {
            Channel::X => self.x = value,
            Channel::Y => self.y = value,
            Channel::XPercent => self.x_percent = value,
            Channel::YPercent => self.y_percent = value,
            Channel::Scale => self.scale = value,
            Channel::ScaleX => self.scale_x = value,
            Channel::ScaleY => self.scale_y = value,
            Channel::RotateX => self.rotate_x = value,
            Channel::RotateY => self.rotate_y = value,
            Channel::Perspective => self.perspective = value,
            Channel::Opacity => self.opacity = value.clamp(0.0, 1.0),
            Channel::ClipRight => self.clip_right = Some(value),
            Channel::ObjectPositionX => self.object_position_x = value,
            Channel::MinHeight => self.min_height = value.max(0.0),
        }
        channel.property()
    }

    pub fn transform_css(&self) -> String {
        let mut parts = Vec::new();
        if self.perspective > 0.0 {
            parts.push(format!("perspective({}px)", css_number(self.perspective)));
        }
        parts.push(format!(
            "translate3d({}px, {}px, 0)",
            css_number(self.x),
            css_number(self.y)
        ));
        if self.x_percent != 0.0 || self.y_percent != 0.0 {
            parts.push(format!(
                "translate({}%, {}%)",
                css_number(self.x_percent),
                css_number(self.y_percent)
            ));
        }
        if self.rotate_x != 0.0 || self.rotate_y != 0.0 {
            parts.push(format!(
                "rotateX({}deg) rotateY({}deg)",
                css_number(self.rotate_x),
                css_number(self.rotate_y)
            ));
        }
        let sx = self.scale * self.scale_x;
        let sy = self.scale * self.scale_y;
        if sx != 1.0 || sy != 1.0 {
            parts.push(format!("scale({}, {})", css_number(sx), css_number(sy)));
        }
        parts.join(" ")
    }

    pub fn css(&self, property: Property) -> String {
        match property {
            Property::Transform => self.transform_css(),
            Property::Opacity => css_number(self.opacity),
            Property::ClipPath => {
                format!("inset(0 {}% 0 0)", css_number(self.clip_right.unwrap_or(0.0)))
            }
            Property::ObjectPosition => format!("{}% center", css_number(self.object_position_x)),
            Property::MinHeight => format!("{}px", css_number(self.min_height)),
        }
    }
}

/// Anything the animation machinery can write visual values into.
pub trait StyleTarget {
    /// `false` once the element has left the document; writes are skipped.
    fn is_attached(&self) -> bool;
    fn write(&self, channel: Channel, value: f64);
}

/// A live DOM element with its composed visual state.
pub struct ElementStyle {
    id: TargetId,
    element: HtmlElement,
    state: RefCell<VisualState>,
}

impl ElementStyle {
    pub fn new(element: HtmlElement) -> Rc<Self> {
        Rc::new(Self {
            id: next_target_id(),
            element,
            state: RefCell::new(VisualState::default()),
        })
    }

    pub fn id(&self) -> TargetId {
        self.id
    }
}

impl StyleTarget for ElementStyle {
    fn is_attached(&self) -> bool {
        self.element.is_connected()
    }

    fn write(&self, channel: Channel, value: f64) {
        if !self.is_attached() {
            return;
        }
        let (property, css) = {
            let mut state = self.state.borrow_mut();
            let property = state.set(channel, value);
            (property, state.css(property))
        };
        if let Err(err) = self.element.style().set_property(property.css_name(), &css) {
            debug!("could not write {}: {:?}", property.css_name(), err);
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::Cell;

    /// Records every write; used in place of a DOM element.
    #[derive(Default)]
    pub struct RecordingTarget {
        pub detached: Cell<bool>,
        pub writes: RefCell<Vec<(Channel, f64)>>,
    }

    impl RecordingTarget {
        pub fn last(&self, channel: Channel) -> Option<f64> {
            self.writes
                .borrow()
                .iter()
                .rev()
                .find(|(c, _)| *c == channel)
                .map(|(_, v)| *v)
        }

        pub fn count(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl StyleTarget for RecordingTarget {
        fn is_attached(&self) -> bool {
            !self.detached.get()
        }

        fn write(&self, channel: Channel, value: f64) {
            if self.is_attached() {
                self.writes.borrow_mut().push((channel, value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_numbers_drop_float_noise() {
        assert_eq!(css_number(-1000.0), "-1000");
        assert_eq!(css_number(0.30000000000000004), "0.3");
        assert_eq!(css_number(-0.0001), "0");
        assert_eq!(css_number(12.125), "12.125");
    }

    #[test]
    fn rest_state_is_identity_translate() {
        assert_eq!(VisualState::default().transform_css(), "translate3d(0px, 0px, 0)");
    }

    #[test]
    fn transform_composes_every_part() {
        let mut state = VisualState::default();
        state.set(Channel::Perspective, 1000.0);
        state.set(Channel::X, 12.0);
        state.set(Channel::Y, -4.5);
        state.set(Channel::RotateX, -3.0);
        state.set(Channel::RotateY, 7.0);
        state.set(Channel::Scale, 1.2);
        assert_eq!(
            state.transform_css(),
            "perspective(1000px) translate3d(12px, -4.5px, 0) rotateX(-3deg) rotateY(7deg) scale(1.2, 1.2)"
        );
    }

    #[test]
    fn non_transform_channels_render_their_own_property() {
        let mut state = VisualState::default();
        assert_eq!(state.set(Channel::ClipRight, 40.0), Property::ClipPath);
        assert_eq!(state.css(Property::ClipPath), "inset(0 40% 0 0)");
        state.set(Channel::ObjectPositionX, 20.0);
        assert_eq!(state.css(Property::ObjectPosition), "20% center");
        state.set(Channel::Opacity, 1.7);
        assert_eq!(state.css(Property::Opacity), "1");
    }
}
