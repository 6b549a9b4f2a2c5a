//! The page body: one anchored `<section>` per navigation entry.
//!
//! Each section's `id` is the [`NavSection::id`] the header scrolls to.

use leptos::{
    html::{h2, li, p, section, span, ul},
    prelude::*,
};

use crate::navigation::{NAV_SECTIONS, NavSection};

/// A single line in a section: a title and a short note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub title: &'static str,
    pub detail: &'static str,
}

const PROJECTS: &[Entry] = &[
    Entry { title: "Portfolio", detail: "This site, server-rendered with Leptos and hydrated in WASM." },
    Entry { title: "Log shipper", detail: "Tails service logs and batches them to object storage." },
    Entry { title: "Budget CLI", detail: "Imports bank exports and tags spending by category." },
];

const SKILLS: &[Entry] = &[
    Entry { title: "Rust", detail: "Async services, WASM frontends, command-line tools." },
    Entry { title: "TypeScript", detail: "React and React Native applications." },
    Entry { title: "Infrastructure", detail: "Containers, CI pipelines, observability." },
];

const EXPERIENCE: &[Entry] = &[
    Entry { title: "Software Engineer", detail: "Backend and platform work on customer-facing APIs." },
    Entry { title: "Mobile Developer", detail: "Shipped cross-platform apps to both stores." },
];

#[must_use]
pub const fn entries(nav: NavSection) -> &'static [Entry] {
    match nav {
        NavSection::Projects => PROJECTS,
        NavSection::Skills => SKILLS,
        NavSection::Experience => EXPERIENCE,
    }
}

pub fn component() -> impl IntoView {
    NAV_SECTIONS.into_iter().map(section_view).collect_view()
}

fn section_view(nav: NavSection) -> impl IntoView {
    section()
        .id(nav.id())
        .class("flex flex-col gap-4 scroll-mt-[80px]")
        .child((
            h2().class("text-2xl font-bold text-white").child(nav.label()),
            ul().class("flex flex-col gap-3").child(
                entries(nav)
                    .iter()
                    .map(|entry| {
                        li().class("flex flex-col gap-1 p-3 rounded-lg bg-white/5").child((
                            span().class("text-base font-semibold").child(entry.title),
                            p().class("text-sm text-gray-400").child(entry.detail),
                        ))
                    })
                    .collect_view(),
            ),
        ))
}
