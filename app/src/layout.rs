//! Responsive layout policy for the header.
//!
//! Everything here is a pure function of the viewport width (and, for the
//! outer container, the [`Environment`]). The header re-evaluates these on
//! every render, so nothing is cached.

use crate::environment::Environment;

/// Widths strictly below this render the compact, icon-only navigation.
pub const COMPACT_MAX_WIDTH: f64 = 360.0;
/// Widths at or above this render the larger web-style navigation.
pub const WEB_MIN_WIDTH: f64 = 768.0;

/// Right-hand gutter reserved for the browser scrollbar.
pub const BROWSER_SCROLLBAR_GUTTER: f64 = 17.0;

pub const COMPACT_ICON_SIZE: u16 = 14;
pub const DEFAULT_ICON_SIZE: u16 = 16;

/// One of the three responsive regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Standard,
    Wide,
}

impl LayoutMode {
    /// Maps a viewport width onto its regime. Non-finite widths fall through
    /// to [`LayoutMode::Standard`].
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width < COMPACT_MAX_WIDTH {
            Self::Compact
        } else if width >= WEB_MIN_WIDTH {
            Self::Wide
        } else {
            Self::Standard
        }
    }

    #[must_use]
    pub const fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }

    #[must_use]
    pub const fn is_web(self) -> bool {
        matches!(self, Self::Wide)
    }

    /// Labels are dropped in compact mode; only the icon remains.
    #[must_use]
    pub const fn shows_label(self) -> bool {
        !self.is_compact()
    }

    #[must_use]
    pub const fn icon_size(self) -> u16 {
        if self.is_compact() {
            COMPACT_ICON_SIZE
        } else {
            DEFAULT_ICON_SIZE
        }
    }

    /// Classes for a single navigation chip.
    #[must_use]
    pub fn nav_item_class(self, hovered: bool) -> String {
        let mut classes = vec![
            "flex flex-row items-center gap-1.5 p-2 rounded-lg active:opacity-70",
        ];
        if self.is_compact() {
            classes.push("min-w-9 justify-center");
        }
        if self.is_web() {
            classes.push("px-4 py-2.5 cursor-pointer transition-all duration-200 ease-in-out");
        }
        classes.push(if hovered { "bg-white/10" } else { "bg-white/5" });
        classes.join(" ")
    }

    /// Classes for a navigation label. Only meaningful when [`Self::shows_label`].
    #[must_use]
    pub const fn nav_label_class(self) -> &'static str {
        if self.is_web() {
            "text-white text-base"
        } else {
            "text-white text-xs"
        }
    }
}

/// Inline style for the fixed outer container: status-bar inset on native,
/// scrollbar gutter in the browser.
#[must_use]
pub fn container_style(environment: &Environment) -> String {
    let (top, right) = if environment.is_browser() {
        (0.0, BROWSER_SCROLLBAR_GUTTER)
    } else {
        (environment.status_bar_inset(), 0.0)
    };
    format!("padding-top: {top}px; padding-right: {right}px;")
}
