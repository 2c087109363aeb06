//! Pages for PromptDeck.

mod workbench;

pub use workbench::Workbench;
