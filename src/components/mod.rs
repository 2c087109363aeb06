//! UI components for PromptDeck.
//!
//! Thin adapters over the Dioxus primitives: each wrapper composes existing
//! widgets, owns at most a little open/expanded/submitting state, and
//! forwards everything else to its parent through callbacks.

pub mod forms;

mod dialog;
mod error_boundary;
mod health_banner;
mod scroll_area;
mod toast;

pub use dialog::{Dialog, DialogMode, EntityDialog};
pub use error_boundary::{Boundary, BoundaryLevel, DEFAULT_RECOVERY_DELAY_MS};
pub use health_banner::{HealthBanner, HEALTH_POLL_INTERVAL};
pub use scroll_area::{ScrollArea, SCROLLBAR_STYLE_ID};
pub use toast::ToastHost;
