//! User-facing notifications.
//!
//! Every notification is a short title plus a description. The queue
//! hands out an id per toast so the UI can dismiss it after a timeout.

use crate::join::JoinSummary;
use crate::types::Role;

/// Visual treatment of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    /// Neutral confirmation.
    #[default]
    Default,
    /// Error or failed action.
    Destructive,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Bold first line.
    pub title: String,
    /// Detail under the title.
    pub description: String,
    /// Visual treatment.
    pub variant: ToastVariant,
}

impl Toast {
    /// A neutral toast.
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// An error toast.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    /// An upload batch was submitted. `submitted` is the number of files
    /// selected, not the number that decoded.
    #[must_use]
    pub fn ingested(role: Role, submitted: usize) -> Self {
        let title = match role {
            Role::Reference => "Reference loaded",
            Role::Regular => "Elements loaded",
        };
        Self::info(title, format!("Files: {submitted}"))
    }

    /// Some files in a batch could not be decoded. `None` when the whole
    /// batch decoded.
    #[must_use]
    pub fn decode_failures(summary: JoinSummary) -> Option<Self> {
        (summary.failed > 0).then(|| {
            Self::destructive(
                "Some files were skipped",
                format!(
                    "{} of {} files could not be read as images",
                    summary.failed, summary.total
                ),
            )
        })
    }

    /// Some files in a batch were decoded but refused by the store
    /// because a reference is already placed.
    #[must_use]
    pub fn rejections(summary: JoinSummary) -> Option<Self> {
        (summary.rejected > 0).then(|| {
            Self::destructive(
                "Reference already loaded",
                "Clear the workspace to use a different reference",
            )
        })
    }

    /// Every element was centered on the reference.
    #[must_use]
    pub fn aligned() -> Self {
        Self::info(
            "Alignment complete",
            "All elements are centered on the reference",
        )
    }

    /// Alignment was requested without a reference.
    #[must_use]
    pub fn align_failed() -> Self {
        Self::destructive("Error", "Upload a reference element first")
    }

    /// The PNG download started.
    #[must_use]
    pub fn exported() -> Self {
        Self::info("Export complete", "Image saved")
    }

    /// Export failed for `reason`.
    #[must_use]
    pub fn export_failed(reason: impl std::fmt::Display) -> Self {
        Self::destructive("Export failed", reason.to_string())
    }

    /// Every element was removed.
    #[must_use]
    pub fn cleared() -> Self {
        Self::info("Workspace cleared", "All elements removed")
    }
}

/// Identity of a queued toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<(ToastId, Toast)>,
    next_id: u64,
}

impl ToastQueue {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push((id, toast));
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|(t, _)| *t != id);
        self.toasts.len() != before
    }

    /// Toasts on screen, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[(ToastId, Toast)] {
        &self.toasts
    }

    /// Number of toasts on screen.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.toasts.len()
    }
}
