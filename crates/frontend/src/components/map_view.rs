use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use listenmap_shared::config::MapConfig;
use listenmap_shared::models::Point;
use listenmap_shared::regions::RegionIndex;
use listenmap_shared::{MapError, MapSession, Result};

use crate::assets;
use crate::scheme;
use crate::surface::{DomSurface, MAP_CONTAINER_ID, MAP_STAGE_ID, TOOLTIP_ID};

/// How many times to look for the attached SVG before giving up.
const ATTACH_ATTEMPTS: u32 = 40;
const ATTACH_POLL_MS: u32 = 25;

type SessionSignal = Signal<Option<MapSession<DomSurface>>>;

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Run `f` against the live session, if one is attached and not already borrowed.
fn with_session(mut session: SessionSignal, f: impl FnOnce(&mut MapSession<DomSurface>)) {
    if let Ok(mut guard) = session.try_write() {
        if let Some(s) = guard.as_mut() {
            f(s);
        }
    }
}

/// Wait for the inlined SVG to appear, then build the session over it.
async fn attach_session(config: MapConfig) -> Result<MapSession<DomSurface>> {
    let index = RegionIndex::new(assets::region_table()?)?;
    for _ in 0..ATTACH_ATTEMPTS {
        if let Some(surface) = DomSurface::attach() {
            return Ok(MapSession::new(surface, index, config, scheme::current()));
        }
        TimeoutFuture::new(ATTACH_POLL_MS).await;
    }
    Err(MapError::NotAttached {
        attempts: ATTACH_ATTEMPTS,
    })
}

#[component]
pub fn MapView(config: MapConfig, caption: Signal<Option<String>>) -> Element {
    let mut caption = caption;
    let svg = use_resource(|| assets::fetch_map_svg());
    // Never read during render, so event writes do not rerun the component
    let mut session: SessionSignal = use_signal(|| None);
    let mut setup_error = use_signal(|| None::<String>);

    use_effect(move || {
        if !matches!(&*svg.read(), Some(Ok(_))) {
            return;
        }
        if session.peek().is_some() {
            return;
        }
        let config = config.clone();
        spawn(async move {
            match attach_session(config).await {
                Ok(s) => {
                    session.set(Some(s));
                    scheme::on_change(move |scheme| {
                        with_session(session, |s| s.set_color_scheme(scheme));
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "map interaction setup failed");
                    setup_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let (status, markup) = match &*svg.read() {
        None => (Some(("map-status", "Loading map…".to_string())), String::new()),
        Some(Err(e)) => (Some(("map-status error", e.to_string())), String::new()),
        Some(Ok(body)) => (
            setup_error.read().clone().map(|e| ("map-status error", e)),
            body.clone(),
        ),
    };

    rsx! {
        if let Some((class, message)) = status {
            div { class: "{class}", "{message}" }
        }

        div {
            id: MAP_CONTAINER_ID,
            class: "map-container",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                let delta = wheel_delta_y(evt.data().delta());
                with_session(session, |s| s.on_wheel(delta));
            },

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                with_session(session, |s| s.on_pointer_down(Point::new(client.x, client.y)));
            },

            onmousemove: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                with_session(session, |s| s.on_pointer_move(Point::new(client.x, client.y)));
            },

            onmouseup: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                let mut clicked = None;
                with_session(session, |s| {
                    clicked = s.on_pointer_up(Point::new(client.x, client.y));
                });
                if let Some(text) = clicked {
                    caption.set(Some(text));
                }
            },

            onmouseleave: move |_| {
                with_session(session, |s| s.on_pointer_leave());
            },

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                with_session(session, |s| s.on_double_click());
            },

            // The transform applies to this wrapper; the SVG itself is left untouched
            div {
                id: MAP_STAGE_ID,
                class: "map-stage",
                dangerous_inner_html: "{markup}",
            }
        }

        div { id: TOOLTIP_ID }
    }
}
