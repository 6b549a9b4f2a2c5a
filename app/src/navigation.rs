//! Navigation entries and what happens when one is hovered or activated.

use serde::{Deserialize, Serialize};

use crate::components::icons::Icon;
use crate::environment::Environment;

/// A page section the header can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Projects,
    Skills,
    Experience,
}

/// Left-to-right order of the header entries.
pub const NAV_SECTIONS: [NavSection; 3] =
    [NavSection::Projects, NavSection::Skills, NavSection::Experience];

impl NavSection {
    /// Section identifier, shared with the `id` of the page anchor.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
        }
    }

    #[must_use]
    pub const fn icon(self) -> Icon {
        match self {
            Self::Projects => Icon::Code,
            Self::Skills => Icon::Wrench,
            Self::Experience => Icon::Briefcase,
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        NAV_SECTIONS.into_iter().find(|section| section.id() == id)
    }
}

/// Which entry, if any, is under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: Option<NavSection>,
}

impl HoverTracker {
    #[must_use]
    pub const fn hovered(&self) -> Option<NavSection> {
        self.hovered
    }

    #[must_use]
    pub fn is_hovered(&self, section: NavSection) -> bool {
        self.hovered == Some(section)
    }

    /// Returns `true` if the hovered entry changed.
    pub fn enter(&mut self, section: NavSection) -> bool {
        let changed = self.hovered != Some(section);
        self.hovered = Some(section);
        changed
    }

    /// Leaving any entry clears the highlight. Returns `true` if it changed.
    pub fn leave(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    /// Pointer entered `section`. Ignored while hover is not wired.
    pub fn pointer_enter(&mut self, section: NavSection, hover_enabled: bool) -> bool {
        hover_enabled && self.enter(section)
    }

    /// Pointer left an entry. Always honoured, so a leave that happens while
    /// hover is switched off cannot leave a stale highlight behind.
    pub fn pointer_leave(&mut self) -> bool {
        self.leave()
    }

    /// Whether `section` is drawn highlighted.
    #[must_use]
    pub fn highlights(&self, section: NavSection, hover_enabled: bool) -> bool {
        hover_enabled && self.is_hovered(section)
    }
}

/// The document a browser-side activation scrolls.
#[cfg_attr(test, mockall::automock)]
pub trait SectionDocument {
    /// Smoothly scrolls the element with `id` into view, doing nothing when
    /// no such element exists.
    fn scroll_into_view(&self, id: &str);
}

/// The live `window.document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

impl SectionDocument for BrowserDocument {
    #[cfg(target_arch = "wasm32")]
    fn scroll_into_view(&self, id: &str) {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn scroll_into_view(&self, _id: &str) {}
}

/// Routes activation of `section`.
///
/// In the browser the matching element is scrolled into view, and a missing
/// element is silently ignored. Anywhere else `scroll_to_section` gets the
/// section id and the document is left alone.
pub fn activate<D, F>(environment: &Environment, section: NavSection, document: &D, scroll_to_section: F)
where
    D: SectionDocument + ?Sized,
    F: FnOnce(&str),
{
    if environment.is_browser() {
        document.scroll_into_view(section.id());
    } else {
        scroll_to_section(section.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn sections_have_fixed_order_and_ids() {
        let ids: Vec<_> = NAV_SECTIONS.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["projects", "skills", "experience"]);
        let labels: Vec<_> = NAV_SECTIONS.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Projects", "Skills", "Experience"]);
    }

    #[test]
    fn sections_map_to_icons() {
        assert_eq!(NavSection::Projects.icon(), Icon::Code);
        assert_eq!(NavSection::Skills.icon(), Icon::Wrench);
        assert_eq!(NavSection::Experience.icon(), Icon::Briefcase);
    }

    #[test]
    fn from_id_round_trips_known_ids() {
        for section in NAV_SECTIONS {
            assert_eq!(NavSection::from_id(section.id()), Some(section));
        }
        assert_eq!(NavSection::from_id("contact"), None);
        assert_eq!(NavSection::from_id("Projects"), None);
    }

    #[test]
    fn hover_is_exclusive() {
        let mut hover = HoverTracker::default();
        assert_eq!(hover.hovered(), None);

        assert!(hover.enter(NavSection::Projects));
        assert!(hover.is_hovered(NavSection::Projects));

        assert!(hover.enter(NavSection::Skills));
        assert!(hover.is_hovered(NavSection::Skills));
        assert!(!hover.is_hovered(NavSection::Projects));
        let highlighted = NAV_SECTIONS.iter().filter(|s| hover.is_hovered(**s)).count();
        assert_eq!(highlighted, 1);

        assert!(hover.leave());
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn repeated_hover_updates_are_no_ops() {
        let mut hover = HoverTracker::default();
        assert!(hover.enter(NavSection::Experience));
        assert!(!hover.enter(NavSection::Experience));
        assert!(hover.leave());
        assert!(!hover.leave());
    }

    #[test]
    fn browser_activation_scrolls_once() {
        let mut document = MockSectionDocument::new();
        document
            .expect_scroll_into_view()
            .with(eq("skills"))
            .times(1)
            .return_const(());

        let mut calls = 0;
        activate(&Environment::browser(), NavSection::Skills, &document, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn browser_activation_without_element_is_silent() {
        let mut document = MockSectionDocument::new();
        document
            .expect_scroll_into_view()
            .with(eq("experience"))
            .times(1)
            .return_const(());

        let mut calls = 0;
        activate(&Environment::browser(), NavSection::Experience, &document, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn native_activation_uses_callback_only() {
        let mut document = MockSectionDocument::new();
        document.expect_scroll_into_view().never();

        let mut received = Vec::new();
        activate(&Environment::native(24.0), NavSection::Projects, &document, |id| {
            received.push(id.to_owned());
        });
        assert_eq!(received, ["projects"]);
    }

    #[test]
    fn browser_document_off_wasm_is_a_no_op() {
        BrowserDocument.scroll_into_view("projects");
    }

    #[test]
    fn leave_while_hover_disabled_clears_highlight() {
        let mut hover = HoverTracker::default();

        // Wide: pointer enters Projects.
        assert!(hover.pointer_enter(NavSection::Projects, true));
        assert!(hover.highlights(NavSection::Projects, true));

        // Narrowed: highlight hidden, pointer leaves.
        assert!(!hover.highlights(NavSection::Projects, false));
        assert!(hover.pointer_leave());

        // Wide again: nothing under the pointer, nothing highlighted.
        assert!(NAV_SECTIONS.iter().all(|s| !hover.highlights(*s, true)));
    }

    #[test]
    fn enter_is_ignored_while_hover_disabled() {
        let mut hover = HoverTracker::default();
        assert!(!hover.pointer_enter(NavSection::Skills, false));
        assert_eq!(hover.hovered(), None);
    }
}
