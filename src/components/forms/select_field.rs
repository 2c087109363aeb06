//! Select field wrapper.

use dioxus::prelude::*;

use super::text_field::{FieldFooter, FieldLabel};

/// One choice in a select field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    /// Field label
    pub label: String,
    /// Currently selected value; empty string selects the placeholder
    pub value: String,
    /// Available choices
    pub options: Vec<SelectOption>,
    /// Handler called with the chosen option's value, or the empty string
    /// when the placeholder is chosen
    pub on_change: EventHandler<String>,
    /// Placeholder text; when set, an empty option is injected first
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub helper: Option<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Controlled select. Option values pass through unchanged; the injected
/// placeholder option reports the empty string.
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let on_change = props.on_change;
    let select_class = if props.error.is_some() {
        "input-field invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            FieldLabel { label: props.label.clone(), required: props.required }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: props.value == opt.value,
                        "{opt.label}"
                    }
                }
            }

            FieldFooter { error: props.error.clone(), helper: props.helper.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_construction() {
        let opt = SelectOption::new("gguf", "GGUF (quantized)");
        assert_eq!(opt.value, "gguf");
        assert_eq!(opt.label, "GGUF (quantized)");
    }
}
