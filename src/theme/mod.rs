//! Theme for the PromptDeck workbench.
//!
//! Dark graphite by default with a light paper mode. Components read the
//! active mode from context; only the scroll area synthesizes CSS from it
//! at runtime, everything else flips through the `body` class.

mod colors;
mod styles;

pub use styles::{scrollbar_styles, GLOBAL_STYLES};

/// Active color scheme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The other mode, for toggle controls.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Class applied to `body` so CSS variables follow the mode.
    pub fn body_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_body_classes() {
        assert_eq!(ThemeMode::Dark.body_class(), "dark");
        assert_eq!(ThemeMode::Light.body_class(), "light");
    }
}
