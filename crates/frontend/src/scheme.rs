use listenmap_shared::models::ColorScheme;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

pub fn from_dark(matches: bool) -> ColorScheme {
    if matches {
        ColorScheme::Dark
    } else {
        ColorScheme::Light
    }
}

/// The host's current light/dark preference.
pub fn current() -> ColorScheme {
    from_dark(dark_query().is_some_and(|q| q.matches()))
}

/// Invoke `callback` whenever the preference changes, for the life of the page.
pub fn on_change(mut callback: impl FnMut(ColorScheme) + 'static) {
    let Some(query) = dark_query() else {
        return;
    };
    let watched = query.clone();
    let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
        callback(from_dark(watched.matches()));
    }) as Box<dyn FnMut(web_sys::Event)>);
    query
        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
        .ok();
    listener.forget();
}
