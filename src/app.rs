use std::sync::Arc;

use dioxus::document;
use dioxus::prelude::*;
use promptdeck_core::{ErrorReporter, HealthMonitor};

use crate::components::ToastHost;
use crate::context::{SharedMonitor, SharedReporter};
use crate::pages::Workbench;
use crate::theme::{ThemeMode, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the backend collaborators, and the theme signal.
#[component]
pub fn App() -> Element {
    use_context_provider::<SharedMonitor>(|| {
        Arc::new(HealthMonitor::new(&crate::backend_config()))
    });
    use_context_provider::<SharedReporter>(|| Arc::new(ErrorReporter::new()));

    let theme: Signal<ThemeMode> = use_signal(ThemeMode::default);
    use_context_provider(|| theme);

    // Mirror the mode onto the body class so the CSS variables flip with it
    use_effect(move || {
        let script = format!("document.body.className = \"{}\";", theme().body_class());
        let _ = document::eval(&script);
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Workbench {}
        ToastHost {}
    }
}
