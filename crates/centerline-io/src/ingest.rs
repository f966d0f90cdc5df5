//! Upload batches: read every selected file and place it in the store.
//!
//! Each file is read and decoded in its own task, so completion order is
//! whatever order the browser finishes reading in. A shared
//! [`CompletionJoin`] notices when the last file of a batch has reported
//! and surfaces any files that could not be decoded or were refused.

use std::cell::RefCell;
use std::rc::Rc;

use centerline_layout::{
    Completion, CompletionJoin, LayoutConfig, PlacementStore, Role, Toast, ToastQueue,
    place_upload,
};
use dioxus::html::FileData;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::components::notify;

/// Start ingesting `files` as `role` elements.
///
/// Shows one notification for the batch right away (counting files
/// submitted), then, after the last file finishes, one for files that
/// failed to decode and one for files the store refused.
pub fn spawn_batch(
    files: Vec<FileData>,
    role: Role,
    store: Signal<PlacementStore>,
    toasts: Signal<ToastQueue>,
    config: &LayoutConfig,
) {
    let submitted = files.len();
    if submitted == 0 {
        return;
    }
    debug!(submitted, ?role, "upload batch started");
    notify(toasts, Toast::ingested(role, submitted), config.toast_duration_ms);

    let join = Rc::new(RefCell::new(CompletionJoin::new(submitted)));
    for file in files {
        let join = Rc::clone(&join);
        let config = config.clone();
        let mut store = store;
        spawn(async move {
            let name = file.name();
            let completion = match file.read_bytes().await {
                Ok(bytes) => match place_upload(
                    &mut store.write(),
                    bytes.to_vec(),
                    role,
                    &config,
                    &mut rand::thread_rng(),
                ) {
                    Ok(id) => {
                        debug!(%id, file = %name, "upload placed");
                        Completion::Succeeded
                    }
                    Err(e) => {
                        warn!(file = %name, "upload dropped: {e}");
                        Completion::from(&e)
                    }
                },
                Err(e) => {
                    warn!(file = %name, "failed to read file: {e}");
                    Completion::Failed
                }
            };

            let Some(summary) = join.borrow_mut().report(completion) else {
                return;
            };
            let toasts_due = Toast::decode_failures(summary)
                .into_iter()
                .chain(Toast::rejections(summary));
            for toast in toasts_due {
                notify(toasts, toast, config.toast_duration_ms);
            }
        });
    }
}
