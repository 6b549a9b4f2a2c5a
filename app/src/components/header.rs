//! The fixed top bar: the "VT" mark on the left, one chip per page section on
//! the right.
//!
//! Layout follows [`LayoutMode`], re-derived from the viewport width on every
//! change. Activating a chip scrolls the matching section into view in the
//! browser, or hands the section id to `scroll_to_section` inside a native
//! shell.

use leptos::{
    ev,
    html::{button, span},
    prelude::*,
};

use crate::{
    components::icons,
    environment::{Environment, SERVER_ENVIRONMENT},
    layout::{self, LayoutMode},
    navigation::{self, BrowserDocument, HoverTracker, NAV_SECTIONS, NavSection},
};

const ICON_COLOR: &str = "#ffffff";

pub fn component(
    scroll_to_section: Callback<String>,
    environment: Environment,
    viewport_width: Signal<f64>,
) -> impl IntoView {
    let hover = RwSignal::new(HoverTracker::default());
    let mode = Memo::new(move |_| LayoutMode::from_width(viewport_width.get()));

    let nav_items = NAV_SECTIONS
        .into_iter()
        .map(|section| nav_item(section, environment, mode, hover, scroll_to_section))
        .collect_view();

    // Hydration keeps server-rendered attribute values, so the padding for
    // the real environment is applied once mounted.
    let (container_style, set_container_style) =
        signal(layout::container_style(&SERVER_ENVIRONMENT));
    Effect::new(move |_| set_container_style.set(layout::container_style(&environment)));

    view! {
        <div
            class="fixed top-0 right-0 left-0 w-full bg-transparent z-[1000]"
            style=move || container_style.get()
        >
            <header class="flex flex-row justify-between items-center px-4 w-full h-[70px] bg-[rgb(26,26,26)] shadow-[0_2px_3.84px_rgba(0,0,0,0.25)]">
                <span class="text-2xl font-bold text-white">"VT"</span>
                <nav class="flex flex-row flex-wrap gap-2">{nav_items}</nav>
            </header>
        </div>
    }
}

fn nav_item(
    section: NavSection,
    environment: Environment,
    mode: Memo<LayoutMode>,
    hover: RwSignal<HoverTracker>,
    scroll_to_section: Callback<String>,
) -> impl IntoView {
    let hover_enabled = move || environment.hover_enabled(mode.get());
    let highlighted = move || hover.get().highlights(section, hover_enabled());

    button()
        .attr("type", "button")
        .attr("aria-label", section.label())
        .attr("data-section", section.id())
        .class(move || mode.get().nav_item_class(highlighted()))
        .on(ev::click, move |_| {
            navigation::activate(&environment, section, &BrowserDocument, |id| {
                scroll_to_section.run(id.to_owned());
            });
        })
        .on(ev::mouseenter, move |_| {
            hover.maybe_update(|tracker| tracker.pointer_enter(section, hover_enabled()));
        })
        .on(ev::mouseleave, move |_| {
            hover.maybe_update(HoverTracker::pointer_leave);
        })
        .child((
            move || icons::component(section.icon(), mode.get().icon_size(), ICON_COLOR),
            move || {
                let mode = mode.get();
                mode.shows_label()
                    .then(|| span().class(mode.nav_label_class()).child(section.label()))
            },
        ))
}
