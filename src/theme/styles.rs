//! Global CSS for the PromptDeck workbench.
//!
//! One static stylesheet rendered by the root component, plus the
//! theme-dependent scrollbar block the scroll area injects at runtime.

use super::colors;
use super::ThemeMode;

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
body.dark {
  --bg: #111317;
  --bg-raised: #191c22;
  --border: #2a2e37;
  --accent: #e8a23d;
  --accent-glow: rgba(232, 162, 61, 0.25);
  --text-1: #e9e9e6;
  --text-2: rgba(233, 233, 230, 0.65);
  --danger: #e05260;
  --danger-soft: rgba(224, 82, 96, 0.12);
  --warning: #d9a03c;
  --warning-soft: rgba(217, 160, 60, 0.12);
  --ok: #69a46f;
}

body.light {
  --bg: #f7f6f3;
  --bg-raised: #ffffff;
  --border: #d8d4cb;
  --accent: #b57417;
  --accent-glow: rgba(181, 116, 23, 0.2);
  --text-1: #23251f;
  --text-2: rgba(35, 37, 31, 0.65);
  --danger: #b3323f;
  --danger-soft: rgba(179, 50, 63, 0.09);
  --warning: #9a6d1c;
  --warning-soft: rgba(154, 109, 28, 0.1);
  --ok: #3f7a46;
}

:root {
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --radius: 6px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-1);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

/* === Typography === */
.app-title {
  font-family: var(--font-mono);
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--accent);
  letter-spacing: 0.05em;
}

.section-header {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--text-1);
}

.hint-text {
  font-size: var(--text-sm);
  color: var(--text-2);
}

/* === Workbench Layout === */
.workbench {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.workbench-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.25rem;
  border-bottom: 1px solid var(--border);
  background: var(--bg-raised);
}

.header-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.backend-hint {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
}

.workbench-main {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 1.25rem;
  max-width: 960px;
  width: 100%;
  margin: 0 auto;
}

.workbench-section {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem 1.25rem;
}

.section-toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}

/* === Buttons === */
.btn-primary {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-1);
  background: transparent;
  border: 1px solid var(--accent);
  border-radius: var(--radius);
  padding: 0.4rem 1rem;
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 10px var(--accent-glow);
}

.btn-ghost {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-2);
  background: transparent;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.4rem 1rem;
  cursor: pointer;
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-1);
  border-color: var(--text-2);
}

.btn-compact {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.15rem 0.7rem;
  cursor: pointer;
}

.btn-compact:hover:not(:disabled) {
  color: var(--text-1);
}

.inline-link-btn {
  font-size: inherit;
  color: var(--accent);
  background: none;
  border: none;
  cursor: pointer;
  text-decoration: underline;
  padding: 0;
}

.icon-btn {
  font-size: var(--text-base);
  color: var(--text-2);
  background: none;
  border: none;
  cursor: pointer;
  padding: 0 0.25rem;
}

.icon-btn:hover {
  color: var(--text-1);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Health Banner === */
.health-banner {
  background: var(--warning-soft);
  border: 1px solid var(--warning);
  border-radius: var(--radius);
  padding: 0.6rem 1rem;
  margin: 0.75rem 1.25rem 0;
}

.health-banner-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.health-banner-icon {
  color: var(--warning);
}

.health-banner-text {
  flex: 1;
  font-size: var(--text-sm);
}

.health-banner-details {
  margin-top: 0.6rem;
  padding-top: 0.6rem;
  border-top: 1px dashed var(--border);
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.detail-row {
  display: flex;
  gap: 0.5rem;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
}

.detail-label {
  color: var(--text-2);
  min-width: 9rem;
}

.detail-value {
  color: var(--text-1);
  word-break: break-all;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-content {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  width: min(520px, calc(100vw - 2rem));
  max-height: calc(100vh - 4rem);
  display: flex;
  flex-direction: column;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.9rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.modal-close-btn {
  font-size: var(--text-lg);
  color: var(--text-2);
  background: none;
  border: none;
  cursor: pointer;
  line-height: 1;
}

.modal-close-btn:hover:not(:disabled) {
  color: var(--text-1);
}

.modal-body {
  padding: 1rem 1.25rem;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 0.9rem;
}

.modal-footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.6rem;
  padding: 0.9rem 1.25rem;
  border-top: 1px solid var(--border);
}

.busy-spinner {
  display: inline-block;
  width: 0.8em;
  height: 0.8em;
  margin-right: 0.4em;
  border: 2px solid var(--text-2);
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
}

.input-label {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
  letter-spacing: 0.04em;
}

.required-mark {
  color: var(--danger);
}

.input-field {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-1);
  background: transparent;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.45rem 0.6rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 6px var(--accent-glow);
}

.input-field::placeholder {
  color: var(--text-2);
  font-style: italic;
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-field.textarea {
  resize: vertical;
}

select.input-field {
  appearance: none;
  background: var(--bg-raised);
}

.field-error {
  font-size: var(--text-xs);
  color: var(--danger);
}

.field-helper {
  font-size: var(--text-xs);
  color: var(--text-2);
}

/* === Slider === */
.slider-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.slider-value {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--accent);
}

.slider-input {
  width: 100%;
  accent-color: var(--accent);
}

.slider-marks {
  position: relative;
  height: 1rem;
}

.slider-mark {
  position: absolute;
  transform: translateX(-50%);
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
  white-space: nowrap;
}

/* === Switch === */
.switch-field {
  flex-direction: row;
  align-items: center;
  gap: 0.6rem;
}

.switch-field input[type="checkbox"] {
  appearance: none;
  width: 2.1rem;
  height: 1.15rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--bg);
  position: relative;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.switch-field input[type="checkbox"]::after {
  content: "";
  position: absolute;
  top: 1px;
  left: 2px;
  width: 0.85rem;
  height: 0.85rem;
  border-radius: 50%;
  background: var(--text-2);
  transition: transform var(--transition-fast);
}

.switch-field input[type="checkbox"]:checked {
  background: var(--accent-glow);
  border-color: var(--accent);
}

.switch-field input[type="checkbox"]:checked::after {
  background: var(--accent);
  transform: translateX(0.9rem);
}

.switch-field input[type="checkbox"]:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Error Panels === */
.error-panel-page {
  position: fixed;
  inset: 0;
  background: var(--bg);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.9rem;
  padding: 2rem;
  text-align: center;
  z-index: 200;
}

.error-panel-title {
  font-size: var(--text-xl);
  color: var(--danger);
}

.error-panel-message {
  color: var(--text-2);
  max-width: 36rem;
}

.error-panel-actions {
  display: flex;
  gap: 0.6rem;
}

.error-details {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.75rem;
  max-width: 42rem;
  max-height: 14rem;
  overflow: auto;
  text-align: left;
  white-space: pre-wrap;
}

.error-inline {
  background: var(--danger-soft);
  border: 1px solid var(--danger);
  border-radius: var(--radius);
  padding: 0.75rem 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.error-inline-actions {
  display: flex;
  gap: 0.6rem;
}

.error-alert {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--danger-soft);
  border: 1px solid var(--danger);
  border-radius: var(--radius);
  padding: 0.35rem 0.7rem;
  font-size: var(--text-sm);
}

.error-alert-icon {
  color: var(--danger);
}

.recovering-hint {
  font-size: var(--text-xs);
  color: var(--text-2);
  font-style: italic;
}

/* === Toasts === */
.toast-host {
  position: fixed;
  bottom: 1rem;
  right: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 300;
}

.toast {
  background: var(--bg-raised);
  border: 1px solid var(--danger);
  border-left-width: 4px;
  border-radius: var(--radius);
  padding: 0.6rem 0.9rem;
  min-width: 16rem;
  max-width: 24rem;
  cursor: pointer;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.35);
}

.toast-message {
  display: block;
  font-size: var(--text-sm);
}

.toast-source {
  display: block;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
  margin-top: 0.15rem;
}

/* === Scroll Area === */
.scroll-area {
  overflow-y: auto;
}

/* === Profile List === */
.profile-list {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.profile-card {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.6rem 0.9rem;
}

.profile-card-name {
  font-family: var(--font-mono);
  color: var(--text-1);
}

.profile-card-meta {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
}

.profile-preview {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-2);
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.75rem;
  white-space: pre-wrap;
  word-break: break-all;
}

.empty-hint {
  font-size: var(--text-sm);
  color: var(--text-2);
  font-style: italic;
  padding: 0.5rem 0;
}
"#;

/// Scrollbar CSS for the active theme mode.
///
/// The scroll area injects this into a single style element keyed by id;
/// the content is rebuilt from scratch on every theme flip.
pub fn scrollbar_styles(mode: ThemeMode) -> String {
    let (track, thumb, thumb_hover) = match mode {
        ThemeMode::Dark => (
            colors::SCROLL_TRACK_DARK,
            colors::SCROLL_THUMB_DARK,
            colors::SCROLL_THUMB_HOVER_DARK,
        ),
        ThemeMode::Light => (
            colors::SCROLL_TRACK_LIGHT,
            colors::SCROLL_THUMB_LIGHT,
            colors::SCROLL_THUMB_HOVER_LIGHT,
        ),
    };

    format!(
        r#".scroll-area::-webkit-scrollbar {{
  width: 10px;
  height: 10px;
}}
.scroll-area::-webkit-scrollbar-track {{
  background: {track};
}}
.scroll-area::-webkit-scrollbar-thumb {{
  background: {thumb};
  border-radius: 5px;
}}
.scroll-area::-webkit-scrollbar-thumb:hover {{
  background: {thumb_hover};
}}
.scroll-area {{
  scrollbar-color: {thumb} {track};
  scrollbar-width: thin;
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrollbar_styles_differ_by_mode() {
        let dark = scrollbar_styles(ThemeMode::Dark);
        let light = scrollbar_styles(ThemeMode::Light);
        assert_ne!(dark, light);
    }

    #[test]
    fn test_scrollbar_styles_use_mode_colors() {
        let dark = scrollbar_styles(ThemeMode::Dark);
        assert!(dark.contains(colors::SCROLL_THUMB_DARK));
        assert!(dark.contains(colors::SCROLL_TRACK_DARK));

        let light = scrollbar_styles(ThemeMode::Light);
        assert!(light.contains(colors::SCROLL_THUMB_LIGHT));
        assert!(light.contains(colors::SCROLL_TRACK_LIGHT));
    }

    #[test]
    fn test_scrollbar_styles_cover_webkit_and_standard() {
        let css = scrollbar_styles(ThemeMode::Dark);
        assert!(css.contains("::-webkit-scrollbar-thumb"));
        assert!(css.contains("scrollbar-color"));
    }
}
