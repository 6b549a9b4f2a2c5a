//! The runtime environment the header renders into.
//!
//! The host decides this once and hands it down through Leptos context (see
//! `frontend`), so components never query globals to find out where they run.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// A regular browser tab with a DOM we may scroll directly.
    #[default]
    Browser,
    /// An app shell (webview) that owns scrolling itself.
    Native,
}

/// What the server renders with. The real environment is only known once
/// the page is mounted on the client.
pub const SERVER_ENVIRONMENT: Environment = Environment::browser();

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Environment {
    pub platform: Platform,
    /// Height of the device status bar; ignored in the browser.
    #[serde(default)]
    pub status_bar_inset: f64,
    /// Whether the device has a hovering pointer. `None` derives it from the
    /// layout regime, treating only wide viewports as pointer-capable.
    #[serde(default)]
    pub supports_hover: Option<bool>,
}

impl Environment {
    #[must_use]
    pub const fn browser() -> Self {
        Self {
            platform: Platform::Browser,
            status_bar_inset: 0.0,
            supports_hover: None,
        }
    }

    #[must_use]
    pub const fn native(status_bar_inset: f64) -> Self {
        Self {
            platform: Platform::Native,
            status_bar_inset,
            supports_hover: None,
        }
    }

    #[must_use]
    pub const fn with_hover(mut self, supports_hover: bool) -> Self {
        self.supports_hover = Some(supports_hover);
        self
    }

    #[must_use]
    pub const fn is_browser(&self) -> bool {
        matches!(self.platform, Platform::Browser)
    }

    /// Status-bar inset, always zero in the browser.
    #[must_use]
    pub fn status_bar_inset(&self) -> f64 {
        if self.is_browser() {
            0.0
        } else {
            self.status_bar_inset.max(0.0)
        }
    }

    /// Whether pointer-enter/leave handlers are attached for `mode`.
    ///
    /// Hover is only ever wired in the wide regime; the capability flag can
    /// switch it off there but never on elsewhere.
    #[must_use]
    pub fn hover_enabled(&self, mode: LayoutMode) -> bool {
        mode.is_web() && self.supports_hover.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_is_browser_without_inset() {
        let env = Environment::default();
        assert_matches!(env.platform, Platform::Browser);
        assert!(env.is_browser());
        assert_eq!(env.status_bar_inset(), 0.0);
        assert_eq!(env.supports_hover, None);
    }

    #[test]
    fn browser_ignores_stray_inset() {
        let env = Environment {
            status_bar_inset: 30.0,
            ..Environment::browser()
        };
        assert_eq!(env.status_bar_inset(), 0.0);
    }

    #[test]
    fn native_reports_inset() {
        let env = Environment::native(24.0);
        assert!(!env.is_browser());
        assert_eq!(env.status_bar_inset(), 24.0);
        assert_eq!(Environment::native(-3.0).status_bar_inset(), 0.0);
    }

    #[test]
    fn hover_follows_width_by_default() {
        let env = Environment::browser();
        assert!(env.hover_enabled(LayoutMode::Wide));
        assert!(!env.hover_enabled(LayoutMode::Standard));
        assert!(!env.hover_enabled(LayoutMode::Compact));
    }

    #[test]
    fn explicit_flag_can_disable_but_not_widen_hover() {
        let touch = Environment::browser().with_hover(false);
        assert!(!touch.hover_enabled(LayoutMode::Wide));

        let mouse = Environment::browser().with_hover(true);
        assert!(mouse.hover_enabled(LayoutMode::Wide));
        assert!(!mouse.hover_enabled(LayoutMode::Standard));
        assert!(!mouse.hover_enabled(LayoutMode::Compact));
    }

    #[test]
    fn deserializes_from_host_json() {
        let env: Environment =
            serde_json::from_str(r#"{"platform":"native","status_bar_inset":20.0}"#).unwrap();
        assert_eq!(env, Environment::native(20.0));

        let env: Environment = serde_json::from_str(r#"{"platform":"browser"}"#).unwrap();
        assert_eq!(env, Environment::browser());
    }
}
