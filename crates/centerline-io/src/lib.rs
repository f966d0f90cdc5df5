//! centerline-io: Browser I/O and Dioxus component library.
//!
//! Handles file reading for uploads, workspace measurement, Blob
//! downloads, and provides the UI components for the centerline web
//! application.

pub mod components;
pub mod download;
pub mod export;
pub mod ingest;
pub mod surface;

pub use components::{FileUpload, Toasts, Toolbar, Workspace, notify};
pub use export::{ExportError, export_workspace};
pub use ingest::spawn_batch;
