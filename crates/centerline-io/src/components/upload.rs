//! File picker button for image uploads.

use centerline_layout::accept_attribute;
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Allow selecting more than one file.
    #[props(default)]
    multiple: bool,
    /// Grey out the picker and ignore clicks.
    #[props(default)]
    disabled: bool,
    /// Called with every selected file. Never called with an empty list.
    on_files: EventHandler<Vec<FileData>>,
    /// Button content (icon and label).
    children: Element,
}

/// A button-styled `<label>` wrapping a hidden `<input type="file">`.
///
/// The picker offers only the extensions the decoder is built with; the
/// files themselves are not validated here.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let on_files = props.on_files;
    let handle_change = move |evt: FormEvent| {
        let files = evt.files();
        if !files.is_empty() {
            on_files.call(files);
        }
    };

    let accept = accept_attribute();
    let class = if props.disabled {
        "btn btn-block btn-disabled"
    } else {
        "btn btn-block btn-primary"
    };

    rsx! {
        label { class: "{class}", aria_disabled: "{props.disabled}",
            input {
                r#type: "file",
                accept: "{accept}",
                class: "hidden",
                multiple: props.multiple,
                disabled: props.disabled,
                onchange: handle_change,
            }
            {props.children}
        }
    }
}
