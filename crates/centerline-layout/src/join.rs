//! Counting join over a fixed number of independent completions.
//!
//! Used wherever work fans out per file or per element and something has
//! to happen once everything has reported back. A join over zero
//! completions is resolved from the start.

use tracing::warn;

/// How one unit of work finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The work produced its result.
    Succeeded,
    /// The work failed; its result is dropped.
    Failed,
    /// The work produced a result that was refused downstream.
    Rejected,
}

impl<T, E> From<&Result<T, E>> for Completion {
    fn from(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

/// Final tally once every expected completion has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinSummary {
    /// Number of completions the join was waiting for.
    pub total: usize,
    /// How many succeeded.
    pub succeeded: usize,
    /// How many failed.
    pub failed: usize,
    /// How many were refused.
    pub rejected: usize,
}

/// Tracks `total` expected completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionJoin {
    total: usize,
    succeeded: usize,
    failed: usize,
    rejected: usize,
}

impl CompletionJoin {
    /// Wait for `total` completions.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            total,
            succeeded: 0,
            failed: 0,
            rejected: 0,
        }
    }

    /// Number of completions reported so far.
    #[must_use]
    pub const fn reported(&self) -> usize {
        self.succeeded + self.failed + self.rejected
    }

    /// Returns `true` once every expected completion has been reported.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.reported() >= self.total
    }

    /// The tally, if the join is resolved.
    #[must_use]
    pub const fn summary(&self) -> Option<JoinSummary> {
        if self.is_resolved() {
            Some(JoinSummary {
                total: self.total,
                succeeded: self.succeeded,
                failed: self.failed,
                rejected: self.rejected,
            })
        } else {
            None
        }
    }

    /// Record one completion.
    ///
    /// Returns the summary exactly once: on the report that resolves the
    /// join. Reports arriving after resolution are ignored.
    pub fn report(&mut self, completion: Completion) -> Option<JoinSummary> {
        if self.is_resolved() {
            warn!(total = self.total, "completion reported to a resolved join");
            return None;
        }
        match completion {
            Completion::Succeeded => self.succeeded += 1,
            Completion::Failed => self.failed += 1,
            Completion::Rejected => self.rejected += 1,
        }
        self.summary()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_resolves_immediately() {
        let join = CompletionJoin::new(0);
        assert!(join.is_resolved());
        assert_eq!(join.summary(), Some(JoinSummary::default()));
    }

    #[test]
    fn resolves_on_last_report_only() {
        let mut join = CompletionJoin::new(3);
        assert_eq!(join.report(Completion::Succeeded), None);
        assert_eq!(join.report(Completion::Failed), None);
        assert!(!join.is_resolved());

        let summary = join.report(Completion::Succeeded);
        assert_eq!(
            summary,
            Some(JoinSummary {
                total: 3,
                succeeded: 2,
                failed: 1,
                rejected: 0,
            })
        );
    }

    #[test]
    fn rejections_are_tallied_apart_from_failures() {
        let mut join = CompletionJoin::new(2);
        join.report(Completion::Rejected);
        let summary = join.report(Completion::Succeeded).unwrap();
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.failed, 0);
    }

    #[test]
    fn reports_after_resolution_are_ignored() {
        let mut join = CompletionJoin::new(1);
        assert!(join.report(Completion::Failed).is_some());
        assert_eq!(join.report(Completion::Succeeded), None);
        assert_eq!(join.reported(), 1);
    }

    #[test]
    fn completion_from_result() {
        let ok: Result<u8, ()> = Ok(1);
        let err: Result<u8, ()> = Err(());
        assert_eq!(Completion::from(&ok), Completion::Succeeded);
        assert_eq!(Completion::from(&err), Completion::Failed);
    }
}
