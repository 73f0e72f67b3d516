use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

#[macro_use]
mod macros;

pub mod alerts;
pub mod bindings;
pub mod clipboard;
pub mod constants;
pub mod debounce;
pub mod dom_utils;
pub mod error;
pub mod models;
pub mod network;
pub mod recent_tasks;
pub mod spinner;
pub mod storage;
pub mod toast;
pub mod tooltip;
pub mod upload;
pub mod utils;
pub mod validation;

pub use error::{ApiError, ClipboardError, StorageError};
pub use network::{ApiClient, ApiConfig};
pub use recent_tasks::RecentTasks;
pub use storage::{JsonStore, KeyValueStore, LocalStorage, MemoryStorage};

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    wasm_tracing::set_as_global_default();

    let document = dom_utils::document()?;

    // The module may load before or after the DOM is parsed.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = on_dom_ready(&doc) {
                tracing::error!(error = ?e, "page bootstrap failed");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        on_dom_ready(&document)?;
    }

    Ok(())
}

fn on_dom_ready(document: &Document) -> Result<(), JsValue> {
    dom_utils::inject_animations(document)?;

    if dom_utils::bind_nav_toggle(document)? {
        tracing::debug!("mobile menu toggle bound");
    }

    Ok(())
}
