//! Slider field wrapper.

use dioxus::prelude::*;

use super::text_field::FieldLabel;

/// A labeled tick along the slider track.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl SliderMark {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Properties for the SliderField component
#[derive(Clone, PartialEq, Props)]
pub struct SliderFieldProps {
    /// Field label
    pub label: String,
    /// Current value
    pub value: f64,
    pub min: f64,
    pub max: f64,
    #[props(default = 1.0)]
    pub step: f64,
    /// Handler called with the new value while dragging
    pub on_change: EventHandler<f64>,
    /// Formats the value for the display label; plain `to_string` otherwise
    #[props(default)]
    pub format_value: Option<Callback<f64, String>>,
    /// Discrete labeled ticks rendered under the track
    #[props(default)]
    pub marks: Vec<SliderMark>,
    #[props(default)]
    pub helper: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Controlled range input with a formatted value label and optional marks.
///
/// # Example
///
/// ```ignore
/// SliderField {
///     label: "Temperature",
///     value: temperature(),
///     min: 0.0,
///     max: 2.0,
///     step: 0.1,
///     format_value: move |v: f64| format!("{v:.1}"),
///     marks: vec![SliderMark::new(0.0, "precise"), SliderMark::new(2.0, "wild")],
///     on_change: move |v| temperature.set(v),
/// }
/// ```
#[component]
pub fn SliderField(props: SliderFieldProps) -> Element {
    let on_change = props.on_change;
    let display = match &props.format_value {
        Some(format) => format.call(props.value),
        None => props.value.to_string(),
    };

    rsx! {
        div { class: "form-field",
            div { class: "slider-row",
                FieldLabel { label: props.label.clone(), required: false }
                span { class: "slider-value", "{display}" }
            }

            input {
                class: "slider-input",
                r#type: "range",
                min: "{props.min}",
                max: "{props.max}",
                step: "{props.step}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |e| {
                    if let Ok(v) = e.value().parse::<f64>() {
                        on_change.call(v);
                    }
                },
            }

            if !props.marks.is_empty() {
                div { class: "slider-marks",
                    for mark in props.marks.iter() {
                        span {
                            key: "{mark.value}",
                            class: "slider-mark",
                            style: "left: {mark_percent(mark.value, props.min, props.max)}%;",
                            "{mark.label}"
                        }
                    }
                }
            }

            if let Some(helper) = &props.helper {
                p { class: "field-helper", "{helper}" }
            }
        }
    }
}

/// Horizontal position of a mark along the track, clamped to [0, 100].
fn mark_percent(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    (((value - min) / (max - min)) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_percent_endpoints() {
        assert_eq!(mark_percent(0.0, 0.0, 2.0), 0.0);
        assert_eq!(mark_percent(2.0, 0.0, 2.0), 100.0);
    }

    #[test]
    fn test_mark_percent_midpoint() {
        assert_eq!(mark_percent(1.0, 0.0, 2.0), 50.0);
        assert_eq!(mark_percent(50.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_mark_percent_clamps_out_of_range() {
        assert_eq!(mark_percent(-1.0, 0.0, 2.0), 0.0);
        assert_eq!(mark_percent(5.0, 0.0, 2.0), 100.0);
    }

    #[test]
    fn test_mark_percent_degenerate_range() {
        assert_eq!(mark_percent(1.0, 3.0, 3.0), 0.0);
    }
}
