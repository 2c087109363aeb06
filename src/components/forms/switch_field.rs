//! Switch (toggle) field wrapper.

use dioxus::prelude::*;

/// Properties for the SwitchField component
#[derive(Clone, PartialEq, Props)]
pub struct SwitchFieldProps {
    /// Field label, rendered next to the toggle
    pub label: String,
    /// Current state
    pub checked: bool,
    /// Handler called with the new boolean state
    pub on_toggle: EventHandler<bool>,
    #[props(default)]
    pub helper: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labeled toggle. The change event is coerced to a plain boolean.
#[component]
pub fn SwitchField(props: SwitchFieldProps) -> Element {
    let on_toggle = props.on_toggle;

    rsx! {
        div { class: "form-field",
            label { class: "form-field switch-field",
                input {
                    r#type: "checkbox",
                    checked: props.checked,
                    disabled: props.disabled,
                    onchange: move |e| on_toggle.call(e.checked()),
                }
                span { class: "input-label", "{props.label}" }
            }

            if let Some(helper) = &props.helper {
                p { class: "field-helper", "{helper}" }
            }
        }
    }
}
