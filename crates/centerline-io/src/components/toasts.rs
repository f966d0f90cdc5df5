//! Transient notification stack.

use centerline_layout::{Toast, ToastQueue, ToastVariant};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Show `toast` and dismiss it after `duration_ms`.
pub fn notify(mut queue: Signal<ToastQueue>, toast: Toast, duration_ms: u32) {
    let id = queue.write().push(toast);
    spawn(async move {
        TimeoutFuture::new(duration_ms).await;
        queue.write().dismiss(id);
    });
}

/// Props for the [`Toasts`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToastsProps {
    /// Notifications currently on screen.
    queue: Signal<ToastQueue>,
}

/// Bottom-right stack of notifications, oldest on top. Clicking a toast
/// dismisses it early.
#[component]
pub fn Toasts(props: ToastsProps) -> Element {
    let mut queue = props.queue;
    let toasts = queue.read().toasts().to_vec();

    rsx! {
        div { class: "toast-stack", role: "status", aria_live: "polite",
            for (id, toast) in toasts {
                div {
                    key: "{id}",
                    class: if toast.variant == ToastVariant::Destructive { "toast toast-destructive" } else { "toast" },
                    onclick: move |_| {
                        queue.write().dismiss(id);
                    },
                    p { class: "toast-title", "{toast.title}" }
                    p { class: "toast-description", "{toast.description}" }
                }
            }
        }
    }
}
