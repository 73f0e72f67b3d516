//! Required-field checks for the order / signup forms.
//!
//! Presence only: a field passes when its value has any non-whitespace
//! content. Every field is visited so the border of each one reflects its
//! own state.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

pub const INVALID_BORDER: &str = css_var!("danger-color");
pub const VALID_BORDER: &str = css_var!("border-color");

pub trait RequiredField {
    fn current_value(&self) -> String;
    fn set_border_color(&self, color: &str);
}

/// Returns `true` only if every field has content.
pub fn validate_required<F: RequiredField>(fields: &[F]) -> bool {
    let mut is_valid = true;
    for field in fields {
        if field.current_value().trim().is_empty() {
            is_valid = false;
            field.set_border_color(INVALID_BORDER);
        } else {
            field.set_border_color(VALID_BORDER);
        }
    }
    is_valid
}

/// A `[required]` element inside a form.
#[derive(Debug, Clone)]
pub struct DomField(pub Element);

impl RequiredField for DomField {
    fn current_value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.0.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_border_color(&self, color: &str) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("border-color", color);
        }
    }
}

/// Validate the form with id `form_id`. A missing form is invalid.
pub fn validate_form(document: &Document, form_id: &str) -> bool {
    let form = match document.get_element_by_id(form_id) {
        Some(f) => f,
        None => {
            tracing::warn!(form_id, "form not found");
            return false;
        }
    };

    let nodes = match form.query_selector_all("[required]") {
        Ok(n) => n,
        Err(e) => {
            tracing::error!(form_id, error = ?e, "required-field query failed");
            return false;
        }
    };

    let fields: Vec<DomField> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(DomField)
        .collect();

    validate_required(&fields)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn marks_only_the_empty_required_input() {
        let document = web_sys::window().unwrap().document().unwrap();
        let form = document.create_element("form").unwrap();
        form.set_id("validation-test-form");
        form.set_inner_html(
            r#"<input id="vt-empty" required value="">
               <input id="vt-filled" required value="Blue Book">
               <input id="vt-optional" value="">"#,
        );
        document.body().unwrap().append_child(&form).unwrap();

        assert!(!validate_form(&document, "validation-test-form"));

        let border = |id: &str| {
            document
                .get_element_by_id(id)
                .unwrap()
                .dyn_into::<HtmlElement>()
                .unwrap()
                .style()
                .get_property_value("border-color")
                .unwrap()
        };
        assert_eq!(border("vt-empty"), INVALID_BORDER);
        assert_eq!(border("vt-filled"), VALID_BORDER);
        assert_eq!(border("vt-optional"), "");

        form.remove();
    }

    #[wasm_bindgen_test]
    fn missing_form_is_invalid() {
        let document = web_sys::window().unwrap().document().unwrap();
        assert!(!validate_form(&document, "no-such-form"));
    }
}
