// Core application modules and components
use crate::components::{error_template, header, sections};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, div, footer, head, html, meta, p},
    logging,
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod environment;
pub mod layout;
pub mod navigation;
pub mod viewport;

use environment::Environment;

const TITLE: &str = "VT \u{2013} Portfolio";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portfolio.css")
                    .build(),
            ),
            Title(TitleProps::builder().text(TITLE).build()),
        )),
        body().class("bg-[#121212]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

/// Router root. Reads the [`Environment`] from context, defaulting to a
/// plain browser when the host provided none.
#[must_use]
pub fn component() -> impl IntoView {
    let environment = use_context::<Environment>().unwrap_or_default();

    view! {
        <Router>
            <div class="overflow-auto text-white font-poppins">
                {page_header(environment)}
                <main class="container flex flex-col gap-12 px-4 pt-10 pb-14 mx-auto mt-[70px] max-w-4xl md:px-0">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                        error_template::component(outside_errors)
                    }>
                        <Route path=StaticSegment("") view=sections::component/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

/// Header wired to the live viewport and to a callback that sets the location
/// fragment, which is how a native shell is told to scroll.
fn page_header(environment: Environment) -> impl IntoView {
    let scroll_to_section = Callback::new(|section_id: String| {
        if let Err(err) = window().location().set_hash(&section_id) {
            logging::warn!("Failed to move to section {section_id}: {err:?}");
        }
    });

    header::component(scroll_to_section, environment, viewport::use_viewport_width())
}

fn footer_component() -> impl IntoView {
    footer()
        .class("fixed right-0 bottom-0 left-0 z-10 py-2 text-center md:py-4 bg-[#1a1a1a]/80 backdrop-blur-md")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child(
                p().class("text-gray-400").child(format!("VT \u{a9} {}", Utc::now().year())),
            ),
        )
}
