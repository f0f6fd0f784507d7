use super::Status;
use std::sync::Arc;

const LOG_TARGET: &str = "    status";

/// A single status folded into an aggregate, along with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub source: Arc<str>,
    pub status: Status,
}

/// Folds any number of statuses into one overall verdict using worst-status-wins.
#[derive(Debug, Clone, Default)]
pub struct StatusAggregator {
    overall: Status,
    contributions: Vec<Contribution>,
}

impl StatusAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a status into the aggregate and return the new overall status.
    pub fn add(&mut self, source: impl Into<Arc<str>>, status: Status) -> Status {
        let source = source.into();
        let merged = self.overall.merge(status);

        if merged != self.overall {
            log::debug!(target: LOG_TARGET, "'{source}' raised the overall status from {} to {merged}", self.overall);
        }

        self.overall = merged;
        self.contributions.push(Contribution { source, status });
        merged
    }

    #[must_use]
    pub const fn overall(&self) -> Status {
        self.overall
    }

    /// Every contribution in the order it was added.
    #[must_use]
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Sources whose status determined the overall verdict. Empty when everything is OK.
    pub fn responsible(&self) -> impl Iterator<Item = &str> {
        self.contributions
            .iter()
            .filter(|c| !self.overall.is_ok() && c.status == self.overall)
            .map(|c| c.source.as_ref())
    }
}
