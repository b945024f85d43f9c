use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlVideoElement, Window};

use crate::error::DomError;
use crate::geometry::Rect;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn root_element() -> Result<HtmlElement, DomError> {
    document()?
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .ok_or(DomError::NoRoot)
}

/// Writes a custom property such as `--primary` on `<html>`.
pub fn set_root_variable(name: &str, value: &str) -> Result<(), DomError> {
    root_element()?.style().set_property(name, value)?;
    Ok(())
}

pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Inner width and height of the viewport.
pub fn viewport() -> (f64, f64) {
    let Ok(window) = window() else {
        return (0.0, 0.0);
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// How far the document can scroll vertically.
pub fn max_scroll() -> f64 {
    let scroll_height = root_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    (scroll_height - viewport().1).max(0.0)
}

pub fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn matches_media(query: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub fn rect_of(element: &Element) -> Rect {
    Rect::from(&element.get_bounding_client_rect())
}

/// Top edge of `element` in document coordinates.
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Starts fetching a video into the browser cache without attaching it.
pub fn preload_video(src: &str) -> Result<(), DomError> {
    let video = document()?
        .create_element("video")?
        .dyn_into::<HtmlVideoElement>()
        .map_err(|_| DomError::Js("created element is not a video".to_string()))?;
    video.set_preload("auto");
    video.set_src(src);
    video.load();
    Ok(())
}
