//! Functions exported to the page scripts, under the names the templates
//! already call.

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlInputElement};

use crate::alerts::{self, WindowAlerts};
use crate::clipboard;
use crate::constants::{DEFAULT_TOAST_MS, MAX_UPLOAD_BYTES};
use crate::debounce::debounce;
use crate::dom_utils;
use crate::network::{self, ApiClient, ApiConfig};
use crate::recent_tasks::RecentTasks;
use crate::spinner;
use crate::storage::JsonStore;
use crate::toast::{self, ToastKind};
use crate::tooltip;
use crate::upload;
use crate::utils;
use crate::validation;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn recent_tasks() -> Option<RecentTasks<crate::storage::LocalStorage>> {
    JsonStore::local().map(RecentTasks::new)
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = initApiConfig)]
pub fn init_api_config(base_url: &str) {
    ApiConfig::install(ApiConfig::from_url(base_url));
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = apiGet)]
pub async fn api_get(url: String) -> Result<JsValue, JsValue> {
    let data = ApiClient::browser().get(&url).await?;
    to_js(&data)
}

/// `isFormData` expects a `FormData` body and sends it as multipart;
/// otherwise `body` is JSON-encoded.
#[wasm_bindgen(js_name = apiPost)]
pub async fn api_post(url: String, body: JsValue, is_form_data: Option<bool>) -> Result<JsValue, JsValue> {
    let api = ApiClient::browser();
    let data = if is_form_data.unwrap_or(false) {
        let form: FormData = body.dyn_into()?;
        api.post_form(&url, form).await?
    } else {
        let json: Value = serde_wasm_bindgen::from_value(body)?;
        api.post_json(&url, &json).await?
    };
    to_js(&data)
}

/// Resolves to the quote, or `null` after alerting the user.
#[wasm_bindgen(js_name = calculatePrice)]
pub async fn calculate_price(work_type: String, pages: JsValue) -> JsValue {
    let pages = pages
        .as_string()
        .or_else(|| pages.as_f64().map(|n| n.to_string()))
        .unwrap_or_default();
    let api = ApiClient::browser();
    match network::quote_price(&api, &WindowAlerts, &work_type, &pages).await {
        Some(quote) => to_js(&quote).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// Load a task for display and add it to the recently viewed list.
#[wasm_bindgen(js_name = viewTask)]
pub async fn view_task(task_id: String) -> Result<JsValue, JsValue> {
    let api = ApiClient::browser();
    let summary = match recent_tasks() {
        Some(recent) => network::view_task(&api, &recent, &task_id).await?,
        None => api.task_summary(&task_id).await?,
    };
    to_js(&summary)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    utils::format_currency(amount)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: &str) -> String {
    utils::format_date(value)
}

#[wasm_bindgen(js_name = getStatusBadge)]
pub fn get_status_badge(status: &str) -> String {
    utils::status_badge(status)
}

// ---------------------------------------------------------------------------
// Forms and uploads
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    match dom_utils::document() {
        Ok(document) => validation::validate_form(&document, form_id),
        Err(_) => false,
    }
}

/// Returns the selected files that fit under `maxSize` (default 16 MiB).
#[wasm_bindgen(js_name = handleFileUpload)]
pub fn handle_file_upload(input: &HtmlInputElement, max_size: Option<f64>) -> Array {
    let max_bytes = max_size.map(|n| n.max(0.0) as u64).unwrap_or(MAX_UPLOAD_BYTES);
    upload::handle_file_upload(input, max_bytes, &WindowAlerts)
        .into_iter()
        .collect()
}

// ---------------------------------------------------------------------------
// Debounce
// ---------------------------------------------------------------------------

/// Returns a plain function, so `const f = debounce(fn, 300); f(x)` works
/// as before. `f.cancel()` drops a pending call.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce_fn(func: Function, wait: u32) -> Result<Function, JsValue> {
    let inner = debounce(wait, move |args: Array| {
        if let Err(e) = func.apply(&JsValue::NULL, &args) {
            tracing::error!(error = ?e, "debounced function threw");
        }
    });

    let on_call = {
        let inner = inner.clone();
        Closure::<dyn FnMut(Array)>::new(move |args: Array| inner.call(args))
    };
    let on_cancel = Closure::<dyn FnMut()>::new(move || inner.cancel());

    // Closures take a fixed arity; this shim forwards `arguments` as one array.
    let spread = Function::new_with_args(
        "call",
        "return function () { call(Array.prototype.slice.call(arguments)); };",
    );
    let debounced: Function = spread
        .call1(&JsValue::NULL, &on_call.into_js_value())?
        .dyn_into()?;
    Reflect::set(&debounced, &JsValue::from_str("cancel"), &on_cancel.into_js_value())?;
    Ok(debounced)
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = storageSet)]
pub fn storage_set(key: &str, value: JsValue) -> bool {
    let json: Value = match serde_wasm_bindgen::from_value(value) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(key, error = %e, "Storage Error");
            return false;
        }
    };
    JsonStore::local().map(|s| s.set(key, &json)).unwrap_or(false)
}

#[wasm_bindgen(js_name = storageGet)]
pub fn storage_get(key: &str) -> JsValue {
    JsonStore::local()
        .and_then(|s| s.get::<Value>(key))
        .and_then(|v| to_js(&v).ok())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = storageRemove)]
pub fn storage_remove(key: &str) -> bool {
    JsonStore::local().map(|s| s.remove(key)).unwrap_or(false)
}

#[wasm_bindgen(js_name = saveRecentTaskId)]
pub fn save_recent_task_id(task_id: &str) -> bool {
    recent_tasks().map(|r| r.record(task_id)).unwrap_or(false)
}

#[wasm_bindgen(js_name = getRecentTaskIds)]
pub fn get_recent_task_ids() -> Array {
    recent_tasks()
        .map(|r| r.ids())
        .unwrap_or_default()
        .into_iter()
        .map(JsValue::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Cosmetic UI
// ---------------------------------------------------------------------------

#[wasm_bindgen(js_name = notify)]
pub fn notify(message: &str, kind: Option<String>, duration: Option<u32>) {
    let kind = kind.as_deref().map(ToastKind::parse).unwrap_or_default();
    toast::show(message, kind, duration.unwrap_or(DEFAULT_TOAST_MS));
}

#[wasm_bindgen(js_name = notifySuccess)]
pub fn notify_success(message: &str) {
    toast::success(message);
}

#[wasm_bindgen(js_name = notifyError)]
pub fn notify_error(message: &str) {
    toast::error(message);
}

#[wasm_bindgen(js_name = notifyInfo)]
pub fn notify_info(message: &str) {
    toast::info(message);
}

#[wasm_bindgen(js_name = showError)]
pub fn show_error(message: &str) {
    alerts::show_error(message);
}

#[wasm_bindgen(js_name = showSuccess)]
pub fn show_success(message: &str) {
    alerts::show_success(message);
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: Option<Element>) {
    if let Some(el) = element {
        dom_utils::show_loading(&el);
    }
}

#[wasm_bindgen(js_name = showSpinner)]
pub fn show_spinner() -> Result<bool, JsValue> {
    spinner::show(&dom_utils::document()?)
}

#[wasm_bindgen(js_name = hideSpinner)]
pub fn hide_spinner() -> bool {
    dom_utils::document().map(|d| spinner::hide(&d)).unwrap_or(false)
}

#[wasm_bindgen(js_name = initTooltips)]
pub fn init_tooltips() -> Result<u32, JsValue> {
    tooltip::init_tooltips(&dom_utils::document()?)
}

#[wasm_bindgen(js_name = smoothScroll)]
pub fn smooth_scroll(target: &str) -> bool {
    dom_utils::document()
        .map(|d| dom_utils::smooth_scroll(&d, target))
        .unwrap_or(false)
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) {
    clipboard::copy_and_notify(text);
}
