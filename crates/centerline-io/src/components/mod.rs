//! Dioxus UI components for centerline.
//!
//! Provides the upload pickers, the action toolbar, the interactive
//! workspace, and the notification stack.

mod toasts;
mod toolbar;
mod upload;
mod workspace;

pub use toasts::{Toasts, notify};
pub use toolbar::Toolbar;
pub use upload::FileUpload;
pub use workspace::Workspace;
