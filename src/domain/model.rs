use std::path::PathBuf;

use super::AppError;

/// What happened to a single URL
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Saved { filename: String, path: PathBuf },
    SkippedNotImage,
    SkippedTooLarge,
    SkippedDuplicate { filename: String },
    NetworkError(AppError),
    OtherError(AppError),
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            FetchOutcome::SkippedNotImage
                | FetchOutcome::SkippedTooLarge
                | FetchOutcome::SkippedDuplicate { .. }
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            FetchOutcome::NetworkError(_) | FetchOutcome::OtherError(_)
        )
    }
}

/// Tally of outcomes over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        if outcome.is_saved() {
            self.saved += 1;
        } else if outcome.is_skipped() {
            self.skipped += 1;
        } else if outcome.is_failure() {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.saved + self.skipped + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_each_category() {
        let outcomes = [
            FetchOutcome::Saved {
                filename: "cat.png".to_string(),
                path: PathBuf::from("Fetched_Images/cat.png"),
            },
            FetchOutcome::SkippedNotImage,
            FetchOutcome::SkippedDuplicate {
                filename: "cat.png".to_string(),
            },
            FetchOutcome::NetworkError(AppError::Network("timed out".to_string())),
        ];

        let mut summary = RunSummary::default();
        for outcome in &outcomes {
            summary.record(outcome);
        }

        assert_eq!(
            summary,
            RunSummary {
                saved: 1,
                skipped: 2,
                failed: 1
            }
        );
        assert_eq!(summary.total(), 4);
        assert!(outcomes[3].is_failure());
    }
}
