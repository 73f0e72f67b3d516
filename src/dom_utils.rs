//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Lookups return `Result<_, JsValue>` so callers can `?` them inside the
//! wasm-bindgen exports; everything here is a no-op-or-error when the page
//! lacks the element in question.

use maud::html;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::constants::ANIMATION_STYLE_ID;

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

pub fn body(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no <body>"))
}

/// Replace an element's contents with the loading placeholder.
pub fn show_loading(element: &Element) {
    element.set_inner_html(&loading_markup());
}

pub fn loading_markup() -> String {
    let markup = html! { div class="loading" { "Loading..." } };
    markup.into_string()
}

/// Smooth-scroll the first element matching `selector` to the top of the
/// viewport. Returns whether anything matched.
pub fn smooth_scroll(document: &Document, selector: &str) -> bool {
    let target = match document.query_selector(selector) {
        Ok(Some(el)) => el,
        Ok(None) => return false,
        Err(e) => {
            tracing::warn!(selector, error = ?e, "invalid scroll selector");
            return false;
        }
    };

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Wire `.nav-toggle` to flip `active` on `.nav-menu`. Returns `false`
/// when either element is missing.
pub fn bind_nav_toggle(document: &Document) -> Result<bool, JsValue> {
    let (toggle, menu) = match (
        document.query_selector(".nav-toggle")?,
        document.query_selector(".nav-menu")?,
    ) {
        (Some(t), Some(m)) => (t, m),
        _ => return Ok(false),
    };

    let click = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let _ = menu.class_list().toggle("active");
    }) as Box<dyn FnMut(_)>);
    toggle.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    click.forget();
    Ok(true)
}

/// Keyframes used by the spinner (`spin`) and notifications
/// (`slideIn`/`slideOut`).
pub const ANIMATION_CSS: &str = "
@keyframes spin{to{transform:rotate(360deg)}}
@keyframes slideIn{from{transform:translateX(100%);opacity:0}to{transform:translateX(0);opacity:1}}
@keyframes slideOut{from{transform:translateX(0);opacity:1}to{transform:translateX(100%);opacity:0}}
";

/// Add the keyframes to `<head>` once per page.
pub fn inject_animations(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ANIMATION_STYLE_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(ANIMATION_STYLE_ID);
    style.set_text_content(Some(ANIMATION_CSS));
    match document.head() {
        Some(head) => head.append_child(&style)?,
        // fallback – append to body
        None => body(document)?.append_child(&style)?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_placeholder_markup() {
        assert_eq!(loading_markup(), r#"<div class="loading">Loading...</div>"#);
    }

    #[test]
    fn keyframes_cover_spinner_and_toasts() {
        for name in ["spin", "slideIn", "slideOut"] {
            assert!(ANIMATION_CSS.contains(&format!("@keyframes {}", name)));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn animations_are_injected_once() {
        let doc = document().unwrap();
        inject_animations(&doc).unwrap();
        inject_animations(&doc).unwrap();
        let styles = doc
            .query_selector_all(&format!("#{}", ANIMATION_STYLE_ID))
            .unwrap();
        assert_eq!(styles.length(), 1);
    }

    #[wasm_bindgen_test]
    fn nav_toggle_flips_active_class() {
        let doc = document().unwrap();
        let body = body(&doc).unwrap();
        let toggle = doc.create_element("button").unwrap();
        toggle.set_class_name("nav-toggle");
        let menu = doc.create_element("ul").unwrap();
        menu.set_class_name("nav-menu");
        body.append_child(&toggle).unwrap();
        body.append_child(&menu).unwrap();

        assert!(bind_nav_toggle(&doc).unwrap());
        toggle.dyn_ref::<HtmlElement>().unwrap().click();
        assert!(menu.class_list().contains("active"));
        toggle.dyn_ref::<HtmlElement>().unwrap().click();
        assert!(!menu.class_list().contains("active"));

        toggle.remove();
        menu.remove();
    }

    #[wasm_bindgen_test]
    fn show_loading_replaces_content() {
        let doc = document().unwrap();
        let el = doc.create_element("div").unwrap();
        el.set_inner_html("<p>old</p>");
        show_loading(&el);
        assert_eq!(el.inner_html(), loading_markup());
    }

    #[wasm_bindgen_test]
    fn scroll_reports_missing_target() {
        let doc = document().unwrap();
        assert!(!smooth_scroll(&doc, "#nowhere-to-be-found"));
    }
}
