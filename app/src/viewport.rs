//! Reactive viewport width.

use leptos::{ev, prelude::*};

/// Width assumed while rendering on the server, before the browser reports
/// its real size. Renders the wide layout.
pub const SERVER_VIEWPORT_WIDTH: f64 = 1024.0;

/// Tracks `window.innerWidth`, updating on every `resize`.
///
/// The listener is attached from an effect, so nothing touches `window`
/// during server rendering; it is removed when the owner is cleaned up.
pub fn use_viewport_width() -> Signal<f64> {
    let (width, set_width) = signal(SERVER_VIEWPORT_WIDTH);

    Effect::new(move |_| {
        set_width.set(current_width());
        let handle = window_event_listener(ev::resize, move |_| set_width.set(current_width()));
        on_cleanup(move || handle.remove());
    });

    width.into()
}

fn current_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(SERVER_VIEWPORT_WIDTH)
}
