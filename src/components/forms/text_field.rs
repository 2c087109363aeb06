//! Text and numeric input fields.
//!
//! Both wrappers are fully controlled: the rendered value is always exactly
//! the prop, and edits flow upward through the change callback. The numeric
//! field normalizes its events: empty input propagates `None`, a valid
//! number propagates its parsed value, and anything else produces no event
//! at all, so a `NaN` can never leak upward.

use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Field label
    pub label: String,
    /// Current value
    pub value: String,
    /// Handler called with the new value on every edit
    pub on_change: EventHandler<String>,
    /// Validation error shown under the input
    #[props(default)]
    pub error: Option<String>,
    /// Helper text shown when there is no error
    #[props(default)]
    pub helper: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, url, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Render as a textarea instead of a single-line input
    #[props(default = false)]
    pub multiline: bool,
    /// Visible rows when multiline
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Controlled text input with label, error and helper text.
///
/// # Example
///
/// ```ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     TextField {
///         label: "Name",
///         value: name(),
///         on_change: move |v| name.set(v),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let on_change = props.on_change;
    let input_class = if props.error.is_some() {
        "input-field invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            FieldLabel { label: props.label.clone(), required: props.required }

            if props.multiline {
                textarea {
                    class: "{input_class} textarea",
                    rows: "{props.rows}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    oninput: move |e| on_change.call(e.value()),
                }
            } else {
                input {
                    class: "{input_class}",
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    oninput: move |e| on_change.call(e.value()),
                }
            }

            FieldFooter { error: props.error.clone(), helper: props.helper.clone() }
        }
    }
}

/// Properties for the NumberField component
#[derive(Clone, PartialEq, Props)]
pub struct NumberFieldProps {
    /// Field label
    pub label: String,
    /// Current value; `None` renders as an empty input
    pub value: Option<f64>,
    /// Handler called with the parsed value, or `None` when cleared
    pub on_change: EventHandler<Option<f64>>,
    #[props(default)]
    pub min: Option<f64>,
    #[props(default)]
    pub max: Option<f64>,
    #[props(default)]
    pub step: Option<f64>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub helper: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Controlled numeric text input.
///
/// Clearing the input yields `None` upward (never zero); text that does not
/// parse as a finite number is ignored and the owner's value stands.
#[component]
pub fn NumberField(props: NumberFieldProps) -> Element {
    let on_change = props.on_change;
    let input_class = if props.error.is_some() {
        "input-field invalid"
    } else {
        "input-field"
    };
    let display = props.value.map(|n| n.to_string()).unwrap_or_default();

    rsx! {
        div { class: "form-field",
            FieldLabel { label: props.label.clone(), required: props.required }

            input {
                class: "{input_class}",
                r#type: "number",
                value: "{display}",
                min: props.min.map(|n| n.to_string()).unwrap_or_default(),
                max: props.max.map(|n| n.to_string()).unwrap_or_default(),
                step: props.step.map(|n| n.to_string()).unwrap_or_default(),
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| {
                    if let Some(parsed) = parse_number_input(&e.value()) {
                        on_change.call(parsed);
                    }
                },
            }

            FieldFooter { error: props.error.clone(), helper: props.helper.clone() }
        }
    }
}

/// Label row shared by the field wrappers.
#[component]
pub(crate) fn FieldLabel(label: String, required: bool) -> Element {
    rsx! {
        label { class: "input-label",
            "{label}"
            if required {
                span { class: "required-mark", " *" }
            }
        }
    }
}

/// Error/helper row shared by the field wrappers. Error wins over helper.
#[component]
pub(crate) fn FieldFooter(error: Option<String>, helper: Option<String>) -> Element {
    if let Some(error) = error {
        return rsx! {
            p { class: "field-error", "{error}" }
        };
    }
    if let Some(helper) = helper {
        return rsx! {
            p { class: "field-helper", "{helper}" }
        };
    }
    rsx! {}
}

/// Normalize raw numeric input.
///
/// Returns `Some(None)` for an empty field, `Some(Some(n))` for a finite
/// number, and `None` when the text should produce no change event.
pub fn parse_number_input(raw: &str) -> Option<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_propagates_none() {
        assert_eq!(parse_number_input(""), Some(None));
        assert_eq!(parse_number_input("   "), Some(None));
    }

    #[test]
    fn test_valid_numbers_parse() {
        assert_eq!(parse_number_input("42"), Some(Some(42.0)));
        assert_eq!(parse_number_input("0.7"), Some(Some(0.7)));
        assert_eq!(parse_number_input("-3.5"), Some(Some(-3.5)));
        assert_eq!(parse_number_input(" 8192 "), Some(Some(8192.0)));
    }

    #[test]
    fn test_garbage_produces_no_event() {
        assert_eq!(parse_number_input("abc"), None);
        assert_eq!(parse_number_input("1.2.3"), None);
    }

    #[test]
    fn test_nan_and_infinity_never_leak() {
        // "NaN" and "inf" parse as f64 but must not reach the owner
        assert_eq!(parse_number_input("NaN"), None);
        assert_eq!(parse_number_input("inf"), None);
        assert_eq!(parse_number_input("-infinity"), None);
    }
}
