//! Full-screen "Loading..." overlay.
//!
//! There is at most one overlay per page: `show` does nothing when
//! `#globalSpinner` is already present, and `hide` removes every element
//! carrying that id in case a page template added its own.

use maud::{html, PreEscaped};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::SPINNER_ID;
use crate::dom_utils;

const BACKDROP_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
    background:rgba(0,0,0,0.5);display:flex;align-items:center;justify-content:center;z-index:9999;";
const PANEL_STYLE: &str = "background:white;padding:2rem;border-radius:12px;text-align:center;";
const WHEEL_STYLE: &str = "width:50px;height:50px;border:4px solid #f3f4f6;\
    border-top:4px solid var(--primary-color);border-radius:50%;\
    animation:spin 1s linear infinite;margin:0 auto 1rem;";

pub fn overlay_markup() -> String {
    let markup = html! {
        div style=(PreEscaped(BACKDROP_STYLE)) {
            div style=(PreEscaped(PANEL_STYLE)) {
                div style=(PreEscaped(WHEEL_STYLE)) {}
                p { "Loading..." }
            }
        }
    };
    markup.into_string()
}

/// Returns `true` if an overlay was created, `false` if one was already up.
pub fn show(document: &Document) -> Result<bool, JsValue> {
    if document.get_element_by_id(SPINNER_ID).is_some() {
        return Ok(false);
    }

    let spinner = document.create_element("div")?;
    spinner.set_id(SPINNER_ID);
    spinner.set_inner_html(&overlay_markup());
    dom_utils::body(document)?.append_child(&spinner)?;
    Ok(true)
}

/// Returns `true` if anything was removed.
pub fn hide(document: &Document) -> bool {
    let mut removed = false;
    while let Some(spinner) = document.get_element_by_id(SPINNER_ID) {
        spinner.remove();
        removed = true;
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_uses_spin_keyframes_and_theme_color() {
        let markup = overlay_markup();
        assert!(markup.contains("animation:spin 1s linear infinite"));
        assert!(markup.contains("var(--primary-color)"));
        assert!(markup.contains("<p>Loading...</p>"));
    }
}
