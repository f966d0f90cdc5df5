//! centerline-export: Workspace compositor (sans-IO)
//!
//! Flattens the placed elements into a single PNG, the same way they are
//! laid out on the workspace.

pub mod compositor;

pub use compositor::{Composite, CompositeError, PNG_MIME, composite};
