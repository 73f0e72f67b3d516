//! Blocking user alerts (`window.alert`).

pub trait AlertSink {
    fn alert(&self, message: &str);
}

impl<A: AlertSink + ?Sized> AlertSink for &A {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAlerts;

impl AlertSink for WindowAlerts {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    tracing::warn!(error = ?e, "alert() failed");
                }
            }
            None => tracing::warn!(message, "no window to alert on"),
        }
    }
}

pub fn show_error(message: &str) {
    WindowAlerts.alert(message);
}

pub fn show_success(message: &str) {
    WindowAlerts.alert(message);
}
