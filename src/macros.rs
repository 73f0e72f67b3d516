//! Small crate-wide convenience macros.

/// Embed a CSS custom property (`var(--token)`) without sprinkling
/// `format!("var(--{})", token)` across the DOM helpers.
///
/// ```rust,ignore
/// let color = css_var!("danger-color");   // "var(--danger-color)"
/// ```
#[macro_export]
macro_rules! css_var {
    ($name:literal) => {
        concat!("var(--", $name, ")")
    };
    ($name:expr) => {
        format!("var(--{})", $name)
    };
}
