//! WebAssembly entry points for the portfolio frontend.
//!
//! Both entry points hydrate the server-rendered page. They differ only in the
//! [`Environment`] handed to the app: a browser tab scrolls the DOM itself,
//! while a native shell receives section ids through the location fragment
//! and reserves room for its status bar.

use app::environment::Environment;
use leptos::prelude::provide_context;

fn init_logging() {
    // Initialize console logging for client-side debugging.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}

fn hydrate_with(environment: Environment) {
    log::debug!("Hydrating with {environment:?}");
    leptos::mount::hydrate_body(move || {
        provide_context(environment);
        app::component()
    });
}

/// Hydrates the app in a regular browser tab.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_logging();
    hydrate_with(Environment::browser());
}

/// Hydrates the app inside a native webview shell whose status bar is
/// `status_bar_inset` pixels tall.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate_native(status_bar_inset: f64) {
    init_logging();
    hydrate_with(Environment::native(status_bar_inset));
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_entry_point_signatures() {
        let _: fn() = super::hydrate;
        let _: fn(f64) = super::hydrate_native;
    }
}
