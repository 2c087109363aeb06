//! Form field wrappers.
//!
//! Thin, fully controlled adapters over the input primitives: the rendered
//! value is always exactly the prop passed in, and every edit is forwarded
//! upward through a normalized change callback.

mod presets;
mod select_field;
mod slider_field;
mod switch_field;
mod text_field;

pub use presets::{
    field_preset, FieldKind, FieldPreset, DESCRIPTION_FIELD, EMAIL_FIELD, FIELD_PRESETS,
    MAX_TOKENS_FIELD, NAME_FIELD, TEMPERATURE_FIELD, URL_FIELD,
};
pub use select_field::{SelectField, SelectOption};
pub use slider_field::{SliderField, SliderMark};
pub use switch_field::SwitchField;
pub use text_field::{parse_number_input, NumberField, TextField};
