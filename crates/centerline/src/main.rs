use centerline_io::{Toasts, Toolbar, Workspace, notify};
use centerline_layout::{
    Controls, DragSession, LayoutConfig, PlacementStore, Role, Toast, ToastQueue,
};
use dioxus::html::FileData;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdLayers};
use tracing::{Level, warn};

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the placement store, drag session, and notification queue as
/// Dioxus signals and wires them into the toolbar and workspace. Every
/// store mutation goes through a [`PlacementStore`] method.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let config = use_signal(LayoutConfig::default);
    let mut store = use_signal(PlacementStore::new);
    let drag = use_signal(DragSession::new);
    let toasts = use_signal(ToastQueue::new);
    let mut show_guides = use_signal(|| true);

    let controls = Controls::from_store(&store.read());
    let toast_ms = config.read().toast_duration_ms;

    // --- Upload handlers ---
    let on_reference = move |files: Vec<FileData>| {
        // The picker is disabled once a reference exists; a stale event
        // would only be refused by the store anyway.
        if store.peek().has_reference() {
            return;
        }
        centerline_io::spawn_batch(files, Role::Reference, store, toasts, &config.peek());
    };

    let on_elements = move |files: Vec<FileData>| {
        centerline_io::spawn_batch(files, Role::Regular, store, toasts, &config.peek());
    };

    // --- Align handler ---
    let on_align = move |()| {
        let result = store.write().align_to_reference();
        match result {
            Ok(_) => notify(toasts, Toast::aligned(), toast_ms),
            Err(e) => {
                warn!("align refused: {e}");
                notify(toasts, Toast::align_failed(), toast_ms);
            }
        }
    };

    // --- Export handler ---
    // Spawned so the click handler returns before decoding and encoding
    // block the thread.
    let on_export = move |()| {
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            let filename = config.peek().export_filename.clone();
            let outcome = centerline_io::export_workspace(&store.peek(), &filename);
            match outcome {
                Ok(summary) => {
                    if summary.failed > 0 {
                        warn!(skipped = summary.failed, "export skipped undecodable elements");
                    }
                    notify(toasts, Toast::exported(), toast_ms);
                }
                Err(e) => {
                    warn!("export failed: {e}");
                    notify(toasts, Toast::export_failed(&e), toast_ms);
                }
            }
        });
    };

    // --- Clear handler ---
    let on_clear = move |()| {
        store.write().clear();
        notify(toasts, Toast::cleared(), toast_ms);
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "app",
            header { class: "header",
                h1 {
                    Icon { width: 36, height: 36, icon: LdLayers }
                    "Element Aligner"
                }
                p { "Upload elements and align them to a reference" }
            }

            Toolbar {
                controls: controls,
                on_reference: on_reference,
                on_elements: on_elements,
                on_align: on_align,
                on_export: on_export,
                on_clear: on_clear,
            }

            div { class: "board",
                div { class: "board-header",
                    span { "Workspace" }
                    button {
                        class: "btn btn-ghost",
                        aria_pressed: "{show_guides()}",
                        onclick: move |_| show_guides.toggle(),
                        if show_guides() {
                            Icon { width: 18, height: 18, icon: LdEye }
                        } else {
                            Icon { width: 18, height: 18, icon: LdEyeOff }
                        }
                        span { "Guides" }
                    }
                }
                div { class: "board-frame",
                    Workspace {
                        store: store,
                        drag: drag,
                        show_guides: show_guides(),
                        height: config.read().workspace_height,
                    }
                }
            }

            Toasts { queue: toasts }
        }
    }
}
