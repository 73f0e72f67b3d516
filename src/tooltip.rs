//! Hover labels for elements carrying `data-tooltip`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{TOOLTIP_ATTR, TOOLTIP_CLASS, TOOLTIP_GAP_PX};
use crate::dom_utils;

/// Viewport box of the hovered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

/// Top-left corner for a tooltip of the given size: centered above the
/// anchor with a small gap.
pub fn tooltip_origin(anchor: AnchorRect, tip_width: f64, tip_height: f64) -> (f64, f64) {
    let top = anchor.top - tip_height - TOOLTIP_GAP_PX;
    let left = anchor.left + (anchor.width - tip_width) / 2.0;
    (top, left)
}

/// Attach hover listeners to every `[data-tooltip]` element currently in
/// the document. Returns how many elements were wired.
pub fn init_tooltips(document: &Document) -> Result<u32, JsValue> {
    let targets = document.query_selector_all(&format!("[{}]", TOOLTIP_ATTR))?;
    let mut wired = 0;
    for i in 0..targets.length() {
        let Some(element) = targets.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        attach(document, &element)?;
        wired += 1;
    }
    tracing::debug!(wired, "tooltips initialised");
    Ok(wired)
}

fn attach(document: &Document, element: &Element) -> Result<(), JsValue> {
    {
        let doc = document.clone();
        let anchor = element.clone();
        let enter = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Err(e) = show_for(&doc, &anchor) {
                tracing::warn!(error = ?e, "tooltip failed");
            }
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
        enter.forget();
    }

    {
        let doc = document.clone();
        let leave = Closure::wrap(Box::new(move |_: web_sys::Event| {
            remove_all(&doc);
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
        leave.forget();
    }

    Ok(())
}

fn show_for(document: &Document, anchor: &Element) -> Result<HtmlElement, JsValue> {
    let tooltip: HtmlElement = document.create_element("div")?.dyn_into()?;
    tooltip.set_class_name(TOOLTIP_CLASS);
    tooltip.set_text_content(anchor.get_attribute(TOOLTIP_ATTR).as_deref());
    dom_utils::body(document)?.append_child(&tooltip)?;

    // Measure after insertion so offset sizes are real.
    let rect = anchor.get_bounding_client_rect();
    let (top, left) = tooltip_origin(
        AnchorRect { top: rect.top(), left: rect.left(), width: rect.width() },
        f64::from(tooltip.offset_width()),
        f64::from(tooltip.offset_height()),
    );
    let style = tooltip.style();
    style.set_property("top", &format!("{}px", top))?;
    style.set_property("left", &format!("{}px", left))?;
    Ok(tooltip)
}

/// Remove every tooltip on the page.
pub fn remove_all(document: &Document) -> u32 {
    let Ok(open) = document.query_selector_all(&format!(".{}", TOOLTIP_CLASS)) else {
        return 0;
    };
    let mut removed = 0;
    for i in 0..open.length() {
        if let Some(el) = open.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            el.remove();
            removed += 1;
        }
    }
    removed
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventTarget};

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire(target: &EventTarget, name: &str) {
        target.dispatch_event(&Event::new(name).unwrap()).unwrap();
    }

    #[wasm_bindgen_test]
    fn hover_creates_and_removes_label() {
        let doc = dom_utils::document().unwrap();
        let button = doc.create_element("button").unwrap();
        button.set_attribute(TOOLTIP_ATTR, "Download final work").unwrap();
        dom_utils::body(&doc).unwrap().append_child(&button).unwrap();

        assert!(init_tooltips(&doc).unwrap() >= 1);

        fire(&button, "mouseenter");
        let label = doc.query_selector(".tooltip").unwrap().unwrap();
        assert_eq!(label.text_content().as_deref(), Some("Download final work"));

        fire(&button, "mouseleave");
        assert!(doc.query_selector(".tooltip").unwrap().is_none());

        button.remove();
    }
}
