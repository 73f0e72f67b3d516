//! Tiny toast / notification helper.
//! Each notification is a fixed-position div in the top-right corner that
//! slides out after its duration and is removed once the exit animation
//! has played.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::constants::{DEFAULT_TOAST_MS, TOAST_EXIT_MS};
use crate::dom_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Unknown names fall back to `Info`.
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    fn accent(&self) -> &'static str {
        match self {
            ToastKind::Info => css_var!("primary-color"),
            ToastKind::Success => css_var!("success-color"),
            ToastKind::Error => css_var!("danger-color"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: DEFAULT_TOAST_MS,
        }
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind.name())
    }

    pub fn css_text(&self) -> String {
        format!(
            "position:fixed;top:20px;right:20px;padding:1rem 1.5rem;background:white;\
             border-radius:8px;box-shadow:0 4px 6px rgba(0,0,0,0.1);z-index:3000;\
             animation:slideIn 0.3s ease;border-left:4px solid {};",
            self.kind.accent()
        )
    }

    /// Put the toast on screen and schedule its removal.
    pub fn show(&self, document: &Document) -> Result<HtmlElement, JsValue> {
        let toast: HtmlElement = document.create_element("div")?.dyn_into()?;
        toast.set_class_name(&self.class_name());
        // text content, never markup
        toast.set_text_content(Some(&self.message));
        toast.style().set_css_text(&self.css_text());

        dom_utils::body(document)?.append_child(&toast)?;

        let el = toast.clone();
        Timeout::new(self.duration_ms, move || {
            let _ = el.style().set_property("animation", "slideOut 0.3s ease");
            Timeout::new(TOAST_EXIT_MS, move || el.remove()).forget();
        })
        .forget();

        Ok(toast)
    }
}

pub fn show(message: &str, kind: ToastKind, duration_ms: u32) {
    let result = dom_utils::document()
        .and_then(|doc| Toast::new(message, kind).duration(duration_ms).show(&doc));
    if let Err(e) = result {
        tracing::warn!(error = ?e, "could not show notification");
    }
}

pub fn success(msg: &str) {
    show(msg, ToastKind::Success, DEFAULT_TOAST_MS);
}

pub fn error(msg: &str) {
    show(msg, ToastKind::Error, DEFAULT_TOAST_MS);
}

pub fn info(msg: &str) {
    show(msg, ToastKind::Info, DEFAULT_TOAST_MS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in [ToastKind::Info, ToastKind::Success, ToastKind::Error] {
            assert_eq!(ToastKind::parse(kind.name()), kind);
        }
        assert_eq!(ToastKind::parse("warning"), ToastKind::Info);
    }

    #[test]
    fn accent_follows_severity() {
        let css = |kind| Toast::new("m", kind).css_text();
        assert!(css(ToastKind::Success).contains("border-left:4px solid var(--success-color)"));
        assert!(css(ToastKind::Error).contains("border-left:4px solid var(--danger-color)"));
        assert!(css(ToastKind::Info).contains("border-left:4px solid var(--primary-color)"));
    }

    #[test]
    fn defaults_to_three_seconds() {
        let t = Toast::new("Saved", ToastKind::Success);
        assert_eq!(t.duration_ms, 3000);
        assert_eq!(t.duration(500).duration_ms, 500);
    }

    #[test]
    fn class_name_carries_kind() {
        assert_eq!(Toast::new("x", ToastKind::Error).class_name(), "notification notification-error");
    }
}
