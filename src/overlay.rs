use crate::constants::{VISIBILITY_HIDDEN, VISIBILITY_VISIBLE};
use web_sys as web;

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("[dom] failed to set {}: {:?}", property, e);
    }
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    let value = if visible {
        VISIBILITY_VISIBLE
    } else {
        VISIBILITY_HIDDEN
    };
    set_style(el, "visibility", value);
}

#[inline]
pub fn set_height(el: &web::HtmlElement, height_px: f32) {
    set_style(el, "height", &format!("{}px", height_px));
}
