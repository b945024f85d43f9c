//! Hover modes of the custom cursor.

pub const IMAGE_SELECTOR: &str = r#"img, [data-cursor="image"]"#;
pub const DRAG_SELECTOR: &str = r#"[data-cursor="drag"]"#;
pub const LINK_SELECTOR: &str = r#"a, button, [data-cursor="pointer"]"#;
/// Elements whose exit resets the cursor.
pub const RESET_SELECTOR: &str =
    r#"a, button, img, [data-cursor="pointer"], [data-cursor="drag"], [data-cursor="image"]"#;

#[derive(Clone, Debug, PartialEq)]
pub enum CursorMode {
    Default,
    Image,
    Drag,
    Link,
    Text(String),
}

/// How the ring looks in a mode.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorLook {
    pub scale_x: f64,
    pub scale_y: f64,
    pub dot_scale: f64,
    pub filled: bool,
    pub rounded: bool,
    pub difference_blend: bool,
    pub label: Option<String>,
}

impl CursorMode {
    /// Picks the mode for a hovered element. `matches` answers whether the
    /// element matches a CSS selector; `cursor_text` is its
    /// `data-cursor-text`. A custom text wins over every mode but drag.
    pub fn classify(matches: impl Fn(&str) -> bool, cursor_text: Option<String>) -> Option<Self> {
        let drag = matches(DRAG_SELECTOR);
        if let Some(text) = cursor_text.filter(|text| !text.is_empty()) {
            if !drag {
                return Some(CursorMode::Text(text));
            }
        }
        if matches(IMAGE_SELECTOR) {
            Some(CursorMode::Image)
        } else if drag {
            Some(CursorMode::Drag)
        } else if matches(LINK_SELECTOR) {
            Some(CursorMode::Link)
        } else {
            None
        }
    }

    pub fn look(&self) -> CursorLook {
        let base = CursorLook {
            scale_x: 1.0,
            scale_y: 1.0,
            dot_scale: 0.0,
            filled: true,
            rounded: false,
            difference_blend: false,
            label: None,
        };
        match self {
            CursorMode::Default => CursorLook {
                dot_scale: 1.0,
                filled: false,
                ..base
            },
            CursorMode::Image => CursorLook {
                scale_x: 2.5,
                scale_y: 2.5,
                difference_blend: true,
                ..base
            },
            CursorMode::Drag => CursorLook {
                scale_x: 3.0,
                scale_y: 3.0,
                label: Some("DRAG".to_string()),
                ..base
            },
            CursorMode::Link => CursorLook {
                scale_x: 2.2,
                scale_y: 1.8,
                rounded: true,
                ..base
            },
            CursorMode::Text(text) => CursorLook {
                scale_x: 3.0,
                scale_y: 3.0,
                label: Some(text.clone()),
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(hits: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |selector| hits.contains(&selector)
    }

    #[test]
    fn image_wins_over_link() {
        let mode = CursorMode::classify(matcher(&[IMAGE_SELECTOR, LINK_SELECTOR]), None);
        assert_eq!(mode, Some(CursorMode::Image));
    }

    #[test]
    fn plain_element_has_no_mode() {
        assert_eq!(CursorMode::classify(matcher(&[]), None), None);
    }

    #[test]
    fn custom_text_overrides_link() {
        let mode = CursorMode::classify(matcher(&[LINK_SELECTOR]), Some("VIEW".into()));
        assert_eq!(mode, Some(CursorMode::Text("VIEW".into())));
        assert_eq!(mode.map(|m| m.look().scale_x), Some(3.0));
    }

    #[test]
    fn drag_ignores_custom_text() {
        let mode = CursorMode::classify(matcher(&[DRAG_SELECTOR]), Some("VIEW".into()));
        assert_eq!(mode, Some(CursorMode::Drag));
    }

    #[test]
    fn empty_text_is_not_a_label() {
        let mode = CursorMode::classify(matcher(&[LINK_SELECTOR]), Some(String::new()));
        assert_eq!(mode, Some(CursorMode::Link));
    }

    #[test]
    fn looks_match_modes() {
        let link = CursorMode::Link.look();
        assert_eq!((link.scale_x, link.scale_y), (2.2, 1.8));
        assert!(link.rounded);
        assert!(CursorMode::Image.look().difference_blend);
        assert_eq!(CursorMode::Drag.look().label.as_deref(), Some("DRAG"));
        let rest = CursorMode::Default.look();
        assert_eq!((rest.scale_x, rest.scale_y, rest.dot_scale), (1.0, 1.0, 1.0));
    }
}
