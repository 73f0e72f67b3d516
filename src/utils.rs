//! Display helpers shared by the WorkX pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use maud::html;

use crate::models::TaskStatus;

/// Rupee amount as the pages show it: `₹100`, `₹12.5`.
pub fn format_currency(amount: f64) -> String {
    format!("₹{}", amount)
}

/// Long Indian-English date, e.g. `16 October 2026`. Accepts RFC 3339,
/// naive ISO datetimes (as the server's `isoformat()` writes them) and plain
/// `YYYY-MM-DD`. Anything else renders as `Invalid Date`.
pub fn format_date(value: &str) -> String {
    match parse_date(value.trim()) {
        Some(date) => date.format("%-d %B %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Badge class for a status label. Unknown labels render as pending.
pub fn status_class(label: &str) -> &'static str {
    TaskStatus::from_label(label)
        .map(|s| s.css_class())
        .unwrap_or_else(|| TaskStatus::Pending.css_class())
}

/// `<span class="status-badge status-…">label</span>`; the label is escaped.
pub fn status_badge(label: &str) -> String {
    let class = format!("status-badge {}", status_class(label));
    let markup = html! {
        span class=(class) { (label) }
    };
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_rupee_sign_and_js_number_text() {
        assert_eq!(format_currency(100.0), "₹100");
        assert_eq!(format_currency(12.5), "₹12.5");
        assert_eq!(format_currency(0.0), "₹0");
    }

    #[test]
    fn dates_render_in_long_form() {
        assert_eq!(format_date("2026-10-16"), "16 October 2026");
        assert_eq!(format_date("2026-03-05T14:22:09.123456"), "5 March 2026");
        assert_eq!(format_date("2026-01-31 23:00"), "31 January 2026");
        assert_eq!(format_date("2026-07-01T08:00:00+05:30"), "1 July 2026");
    }

    #[test]
    fn unparseable_dates_say_so() {
        assert_eq!(format_date("tomorrow"), "Invalid Date");
        assert_eq!(format_date(""), "Invalid Date");
    }

    #[test]
    fn delivered_and_completed_share_a_class() {
        assert_eq!(status_class("Delivered"), "status-completed");
        assert_eq!(status_class("Completed"), "status-completed");
        assert_eq!(status_class("In Progress"), "status-in-progress");
        assert_eq!(status_class("Assigned"), "status-assigned");
    }

    #[test]
    fn unknown_status_falls_back_to_pending() {
        assert_eq!(status_class("Archived"), "status-pending");
        assert_eq!(status_class("completed"), "status-pending");
    }

    #[test]
    fn badge_markup() {
        assert_eq!(
            status_badge("Delivered"),
            r#"<span class="status-badge status-completed">Delivered</span>"#
        );
        assert_eq!(
            status_badge("<b>x</b>"),
            r#"<span class="status-badge status-pending">&lt;b&gt;x&lt;/b&gt;</span>"#
        );
    }
}
