//! Action cards: reference upload, element upload, align, export/clear.

use centerline_layout::Controls;
use dioxus::html::FileData;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdMove, LdPlus, LdTrash2, LdUpload};

use super::upload::FileUpload;

/// Props for the [`Toolbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToolbarProps {
    /// Which actions are currently available.
    controls: Controls,
    /// Files picked for the reference slot.
    on_reference: EventHandler<Vec<FileData>>,
    /// Files picked as regular elements.
    on_elements: EventHandler<Vec<FileData>>,
    /// "Align all" was clicked.
    on_align: EventHandler<()>,
    /// "Save" was clicked.
    on_export: EventHandler<()>,
    /// "Clear" was clicked.
    on_clear: EventHandler<()>,
}

/// Four cards across the top of the page, one per action group.
///
/// Buttons are disabled according to [`Controls`]; a disabled button never
/// fires its handler.
#[component]
pub fn Toolbar(props: ToolbarProps) -> Element {
    let controls = props.controls;
    let on_align = props.on_align;
    let on_export = props.on_export;
    let on_clear = props.on_clear;
    let reference_label = if controls.upload_reference {
        "Upload reference"
    } else {
        "Loaded"
    };

    rsx! {
        div { class: "toolbar",
            div { class: "card",
                h3 { class: "card-title", "Reference element" }
                FileUpload {
                    disabled: !controls.upload_reference,
                    on_files: props.on_reference,
                    Icon { width: 18, height: 18, icon: LdUpload }
                    span { "{reference_label}" }
                }
            }

            div { class: "card",
                h3 { class: "card-title", "Elements" }
                FileUpload {
                    multiple: true,
                    disabled: !controls.upload_elements,
                    on_files: props.on_elements,
                    Icon { width: 18, height: 18, icon: LdPlus }
                    span { "Add elements" }
                }
            }

            div { class: "card",
                h3 { class: "card-title", "Alignment" }
                button {
                    class: if controls.align { "btn btn-block btn-primary" } else { "btn btn-block btn-disabled" },
                    disabled: !controls.align,
                    onclick: move |_| on_align.call(()),
                    Icon { width: 18, height: 18, icon: LdMove }
                    span { "Align all" }
                }
            }

            div { class: "card",
                h3 { class: "card-title", "Export" }
                div { class: "button-row",
                    button {
                        class: if controls.export { "btn btn-outline" } else { "btn btn-disabled" },
                        disabled: !controls.export,
                        onclick: move |_| on_export.call(()),
                        Icon { width: 18, height: 18, icon: LdDownload }
                        span { "Save" }
                    }
                    button {
                        class: if controls.clear { "btn btn-destructive" } else { "btn btn-disabled" },
                        disabled: !controls.clear,
                        onclick: move |_| on_clear.call(()),
                        Icon { width: 18, height: 18, icon: LdTrash2 }
                        span { "Clear" }
                    }
                }
            }
        }
    }
}
