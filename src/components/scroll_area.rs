//! Themed Scroll Container
//!
//! Wraps children in a scrollable region and keeps one global scrollbar
//! style block in the document head, keyed by a reserved id. On every theme
//! flip the block's content is rebuilt and overwritten in place, created
//! if absent, never duplicated.

use dioxus::document;
use dioxus::prelude::*;

use crate::context::use_theme_mode;
use crate::theme::scrollbar_styles;

/// Reserved id of the injected style element. Exactly one element with this
/// id exists in the document at any time.
pub const SCROLLBAR_STYLE_ID: &str = "promptdeck-scrollbar-style";

/// Properties for the ScrollArea component
#[derive(Clone, PartialEq, Props)]
pub struct ScrollAreaProps {
    /// CSS max-height of the region, e.g. "18rem"
    #[props(default)]
    pub max_height: Option<String>,
    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Scroll container with theme-matched scrollbars.
#[component]
pub fn ScrollArea(props: ScrollAreaProps) -> Element {
    let mode = use_theme_mode();

    // Reading the mode subscribes this effect; it re-runs on theme change
    use_effect(move || {
        let css = scrollbar_styles(mode());
        let _ = document::eval(&inject_style_script(SCROLLBAR_STYLE_ID, &css));
    });

    let class = match props.class.as_deref() {
        Some(extra) => format!("scroll-area {extra}"),
        None => "scroll-area".to_string(),
    };
    let style = props
        .max_height
        .as_deref()
        .map(|h| format!("max-height: {h};"))
        .unwrap_or_default();

    rsx! {
        div { class: "{class}", style: "{style}", {props.children} }
    }
}

/// Build the create-if-absent, overwrite-in-place injection script.
fn inject_style_script(id: &str, css: &str) -> String {
    // JSON-encode the CSS so it lands as a valid JS string literal
    let css_literal = serde_json::to_string(css).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(function() {{
  var el = document.getElementById("{id}");
  if (!el) {{
    el = document.createElement("style");
    el.id = "{id}";
    document.head.appendChild(el);
  }}
  el.textContent = {css_literal};
}})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    #[test]
    fn test_script_looks_up_by_id_and_overwrites() {
        let script = inject_style_script(SCROLLBAR_STYLE_ID, ".scroll-area {}");
        assert!(script.contains("getElementById(\"promptdeck-scrollbar-style\")"));
        assert!(script.contains("el.textContent ="));
        // Creation happens only when the element is missing
        assert!(script.contains("if (!el)"));
    }

    #[test]
    fn test_script_escapes_css_payload() {
        let script = inject_style_script("x", "a::before { content: \"hi\"; }");
        assert!(script.contains(r#"content: \"hi\";"#));
    }

    #[test]
    fn test_modes_produce_distinct_payloads() {
        let dark = inject_style_script(SCROLLBAR_STYLE_ID, &scrollbar_styles(ThemeMode::Dark));
        let light = inject_style_script(SCROLLBAR_STYLE_ID, &scrollbar_styles(ThemeMode::Light));
        assert_ne!(dark, light);
    }
}
