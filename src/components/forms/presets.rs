//! Field presets.
//!
//! Default label/kind/hint bundles for fields that recur across forms, so
//! call sites do not repeat the same literals. Presets are plain immutable
//! records; call sites merge overrides on top, nothing is inherited.

/// Input shape a preset expects.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldKind {
    Text,
    Multiline,
    Email,
    Url,
    Number { min: f64, max: f64, step: f64 },
    Slider { min: f64, max: f64, step: f64 },
}

impl FieldKind {
    /// HTML input type for text-shaped kinds.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            _ => "text",
        }
    }

    /// (min, max, step) for slider kinds.
    pub fn slider_bounds(&self) -> Option<(f64, f64, f64)> {
        match *self {
            FieldKind::Slider { min, max, step } => Some((min, max, step)),
            _ => None,
        }
    }

    /// (min, max, step) for numeric kinds.
    pub fn number_bounds(&self) -> Option<(f64, f64, f64)> {
        match *self {
            FieldKind::Number { min, max, step } => Some((min, max, step)),
            _ => None,
        }
    }
}

/// Default configuration bundle for a recurring form field.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldPreset {
    /// Lookup key
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Validation hint shown as helper text
    pub helper: &'static str,
    pub required: bool,
}

pub const NAME_FIELD: FieldPreset = FieldPreset {
    name: "name",
    label: "Name",
    kind: FieldKind::Text,
    helper: "how this profile appears in lists",
    required: true,
};

pub const DESCRIPTION_FIELD: FieldPreset = FieldPreset {
    name: "description",
    label: "Description",
    kind: FieldKind::Multiline,
    helper: "optional notes about when to use this profile",
    required: false,
};

pub const EMAIL_FIELD: FieldPreset = FieldPreset {
    name: "email",
    label: "Contact email",
    kind: FieldKind::Email,
    helper: "who to reach when this profile misbehaves",
    required: false,
};

pub const URL_FIELD: FieldPreset = FieldPreset {
    name: "url",
    label: "Backend URL",
    kind: FieldKind::Url,
    helper: "base address of the inference server",
    required: true,
};

pub const TEMPERATURE_FIELD: FieldPreset = FieldPreset {
    name: "temperature",
    label: "Temperature",
    kind: FieldKind::Slider {
        min: 0.0,
        max: 2.0,
        step: 0.1,
    },
    helper: "higher values produce more varied output",
    required: false,
};

pub const MAX_TOKENS_FIELD: FieldPreset = FieldPreset {
    name: "max_tokens",
    label: "Max tokens",
    kind: FieldKind::Number {
        min: 1.0,
        max: 32768.0,
        step: 1.0,
    },
    helper: "upper bound on generated tokens; empty means server default",
    required: false,
};

/// Every known preset, keyed by `FieldPreset::name`.
pub const FIELD_PRESETS: &[FieldPreset] = &[
    NAME_FIELD,
    DESCRIPTION_FIELD,
    EMAIL_FIELD,
    URL_FIELD,
    TEMPERATURE_FIELD,
    MAX_TOKENS_FIELD,
];

/// Look up a preset by name.
pub fn field_preset(name: &str) -> Option<&'static FieldPreset> {
    FIELD_PRESETS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_presets_resolve() {
        for name in ["name", "description", "email", "url", "temperature", "max_tokens"] {
            assert!(field_preset(name).is_some(), "missing preset: {name}");
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(field_preset("top_p").is_none());
        assert!(field_preset("").is_none());
    }

    #[test]
    fn test_preset_names_are_unique() {
        for (i, preset) in FIELD_PRESETS.iter().enumerate() {
            assert!(
                FIELD_PRESETS[i + 1..].iter().all(|p| p.name != preset.name),
                "duplicate preset: {}",
                preset.name
            );
        }
    }

    #[test]
    fn test_temperature_is_a_slider() {
        let preset = field_preset("temperature").unwrap();
        assert_eq!(preset.kind.slider_bounds(), Some((0.0, 2.0, 0.1)));
        assert!(!preset.required);
    }

    #[test]
    fn test_max_tokens_is_numeric() {
        let preset = field_preset("max_tokens").unwrap();
        let (min, _, step) = preset.kind.number_bounds().unwrap();
        assert_eq!(min, 1.0);
        assert_eq!(step, 1.0);
        assert!(preset.kind.slider_bounds().is_none());
    }

    #[test]
    fn test_typed_kinds_map_to_input_types() {
        assert_eq!(EMAIL_FIELD.kind.input_type(), "email");
        assert_eq!(URL_FIELD.kind.input_type(), "url");
        assert_eq!(NAME_FIELD.kind.input_type(), "text");
    }
}
