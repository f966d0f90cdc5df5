//! The interactive workspace surface.
//!
//! Elements are absolutely positioned at their stored coordinates. HTML5
//! drag-and-drop moves them: drag start records the element, the surface
//! accepts drag-over, and the drop centers the element under the pointer.

use centerline_layout::{DragSession, PlacedElement, PlacementStore, Point};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMousePointerClick, LdStar};
use tracing::warn;

use crate::surface::{self, WORKSPACE_ID};

/// Props for the [`Workspace`] component.
#[derive(Props, Clone, PartialEq)]
pub struct WorkspaceProps {
    /// The placed elements.
    store: Signal<PlacementStore>,
    /// The in-flight drag.
    drag: Signal<DragSession>,
    /// Draw the crosshair through the reference center.
    show_guides: bool,
    /// CSS height of the surface in pixels.
    height: u32,
}

/// Bounded surface holding every placed element.
#[component]
pub fn Workspace(props: WorkspaceProps) -> Element {
    let mut store = props.store;
    let mut drag = props.drag;

    let elements = store.read().elements().to_vec();
    let guide = if props.show_guides {
        store.read().reference_center()
    } else {
        None
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        let client = evt.client_coordinates();
        // Measured now, not cached: the page may have scrolled since the
        // drag started.
        let workspace = match surface::measure_workspace() {
            Ok(rect) => Some(rect),
            Err(e) => {
                warn!("drop without a workspace: {e}");
                None
            }
        };
        drag.write()
            .drop_at(Point::new(client.x, client.y), workspace, &mut store.write());
    };

    rsx! {
        div {
            id: WORKSPACE_ID,
            class: "workspace",
            style: "height: {props.height}px;",
            ondragover: move |evt| evt.prevent_default(),
            ondrop: handle_drop,

            if elements.is_empty() {
                div { class: "workspace-empty",
                    Icon { width: 48, height: 48, icon: LdMousePointerClick }
                    p { "Upload images to get started" }
                }
            }

            if let Some(center) = guide {
                div {
                    class: "guide guide-vertical",
                    style: "left: {center.x}px;",
                }
                div {
                    class: "guide guide-horizontal",
                    style: "top: {center.y}px;",
                }
            }

            for el in elements {
                ElementView { key: "{el.id()}", element: el.clone(), drag }
            }
        }
    }
}

/// Props for the [`ElementView`] component.
#[derive(Props, Clone, PartialEq)]
struct ElementViewProps {
    element: PlacedElement,
    drag: Signal<DragSession>,
}

/// One draggable element.
#[component]
fn ElementView(props: ElementViewProps) -> Element {
    let mut drag = props.drag;
    let el = &props.element;
    let id = el.id();
    let Point { x, y } = el.position();
    let size = el.size();
    let (w, h) = (size.width, size.height);
    let src = el.payload().data_url();
    let class = if el.is_reference() {
        "element element-reference"
    } else {
        "element"
    };

    rsx! {
        div {
            class: "{class}",
            draggable: "true",
            style: "left: {x}px; top: {y}px; width: {w}px; height: {h}px;",
            ondragstart: move |_| drag.write().begin(id),
            ondragend: move |_| drag.write().cancel(),

            img {
                src: "{src}",
                alt: "Element",
                draggable: "false",
            }

            if el.is_reference() {
                div { class: "reference-badge",
                    Icon { width: 12, height: 12, icon: LdStar }
                    "Reference"
                }
            }
        }
    }
}
