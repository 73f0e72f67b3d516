//! Copy text to the system clipboard.
//!
//! Uses `navigator.clipboard.writeText` when the page has it (secure
//! contexts) and otherwise the legacy hidden-textarea + `execCommand`
//! route. The outcome is returned; [`copy_and_notify`] turns it into a toast.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

use crate::dom_utils;
use crate::error::{js_error_message, ClipboardError};
use crate::constants::DEFAULT_TOAST_MS;
use crate::toast::{self, ToastKind};

pub const COPY_OK_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

pub async fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unsupported)?;
    match async_clipboard(&window.navigator()) {
        Some((clipboard, write_text)) => write_with(&clipboard, &write_text, text).await,
        None => {
            let document = window.document().ok_or(ClipboardError::Unsupported)?;
            legacy_copy(&document, text)
        }
    }
}

/// `navigator.clipboard` and its `writeText`, looked up dynamically since
/// the property is absent on insecure origins.
fn async_clipboard(navigator: &web_sys::Navigator) -> Option<(JsValue, Function)> {
    let clipboard = Reflect::get(navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((clipboard, write_text))
}

async fn write_with(clipboard: &JsValue, write_text: &Function, text: &str) -> Result<(), ClipboardError> {
    let promise: Promise = write_text
        .call1(clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(js_error_message(&e)))?
        .dyn_into()
        .map_err(|_| ClipboardError::Rejected("writeText did not return a promise".into()))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(js_error_message(&e)))?;
    Ok(())
}

fn legacy_copy(document: &Document, text: &str) -> Result<(), ClipboardError> {
    let rejected = |e: JsValue| ClipboardError::Rejected(js_error_message(&e));

    let area: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(rejected)?
        .dyn_into()
        .map_err(|_| ClipboardError::Unsupported)?;
    area.set_value(text);
    let body = dom_utils::body(document).map_err(rejected)?;
    body.append_child(&area).map_err(rejected)?;
    area.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(ClipboardError::Unsupported)
        .and_then(|html| html.exec_command("copy").map_err(rejected));

    // Always take the helper element back out.
    area.remove();

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(ClipboardError::Rejected("copy command was refused".into())),
        Err(e) => Err(e),
    }
}

/// Fire-and-forget copy that reports through a toast.
pub fn copy_and_notify(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = copy_to_clipboard(&text).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "clipboard copy failed");
        }
        let (kind, message) = outcome_toast(&outcome);
        toast::show(message, kind, DEFAULT_TOAST_MS);
    });
}

/// Toast severity and text for a finished copy.
pub fn outcome_toast(outcome: &Result<(), ClipboardError>) -> (ToastKind, &'static str) {
    match outcome {
        Ok(()) => (ToastKind::Success, COPY_OK_MESSAGE),
        Err(_) => (ToastKind::Error, COPY_FAILED_MESSAGE),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fake_clipboard(body: &str) -> (JsValue, Function) {
        let write_text = Function::new_with_args("text", body);
        let clipboard = Object::new();
        Reflect::set(&clipboard, &JsValue::from_str("writeText"), &write_text).unwrap();
        (clipboard.into(), write_text)
    }

    fn textarea_count(doc: &Document) -> u32 {
        doc.query_selector_all("textarea").unwrap().length()
    }

    #[wasm_bindgen_test]
    async fn rejected_write_maps_to_rejected() {
        let (clipboard, write_text) = fake_clipboard("return Promise.reject(new Error('denied'));");
        let err = write_with(&clipboard, &write_text, "WX1").await.unwrap_err();
        assert_eq!(err, ClipboardError::Rejected("denied".into()));
    }

    #[wasm_bindgen_test]
    async fn non_promise_write_is_rejected() {
        let (clipboard, write_text) = fake_clipboard("return 42;");
        let err = write_with(&clipboard, &write_text, "WX1").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Rejected(_)));
    }

    #[wasm_bindgen_test]
    async fn resolved_write_succeeds_with_the_text() {
        let (clipboard, write_text) =
            fake_clipboard("this.last = text; return Promise.resolve();");
        write_with(&clipboard, &write_text, "WX1").await.unwrap();
        let last = Reflect::get(&clipboard, &JsValue::from_str("last")).unwrap();
        assert_eq!(last.as_string().as_deref(), Some("WX1"));
    }

    #[wasm_bindgen_test]
    fn legacy_copy_always_removes_its_textarea() {
        let doc = dom_utils::document().unwrap();
        let before = textarea_count(&doc);
        // Headless browsers may refuse execCommand; either outcome must clean up.
        let _ = legacy_copy(&doc, "WX1");
        assert_eq!(textarea_count(&doc), before);
        let _ = legacy_copy(&doc, "");
        assert_eq!(textarea_count(&doc), before);
    }
}
