//! Error page rendered by the router fallback.
//!
//! On the server it also sets the response status from the first [`AppError`].

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Pulls the [`AppError`]s out of a Leptos error set, in insertion order.
#[must_use]
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders every [`AppError`] in `errors` with a link back to the page top.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center px-4 h-full antialiased text-white").child((
        h1().class("mb-6 text-center text-2xl font-bold")
            .child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                p().class("text-xl tracking-widest text-center text-gray-400 uppercase")
                    .child(format!("{} | {error}", error.status_code().as_u16()))
            })
            .collect_view(),
        a().href("/")
            .class("mt-6 text-center duration-200 hover:text-white/70")
            .child("Back to the portfolio"),
    ))
}
