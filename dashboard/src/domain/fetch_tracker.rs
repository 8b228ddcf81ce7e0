//! Request bookkeeping shared by the availability and appointment sources.
//!
//! Every fetch is tagged with a monotonically increasing [`RequestToken`].
//! Fetches are never cancelled, so several may be in flight at once; the
//! [`FetchOrdering`] policy decides which responses are allowed to land.

use serde::{Deserialize, Serialize};

/// Identifies one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Which response wins when fetches of the same kind overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOrdering {
    /// Only the response to the most recently issued request is applied
    #[default]
    LatestIssued,
    /// Every response is applied as it resolves; the last one to resolve wins
    LastResolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Fetching,
    Populated,
    /// Last applicable fetch failed; previous data (if any) is kept
    Failed,
}

/// What to do with a settled response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Apply,
    Discard,
}

#[derive(Debug, Clone)]
pub struct FetchTracker {
    ordering: FetchOrdering,
    last_issued: u64,
    in_flight: usize,
    status: FetchStatus,
}

impl FetchTracker {
    pub fn new(ordering: FetchOrdering) -> Self {
        Self {
            ordering,
            last_issued: 0,
            in_flight: 0,
            status: FetchStatus::Idle,
        }
    }

    pub fn ordering(&self) -> FetchOrdering {
        self.ordering
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Register a new fetch and return its token
    pub fn issue(&mut self) -> RequestToken {
        self.last_issued += 1;
        self.in_flight += 1;
        self.status = FetchStatus::Fetching;
        RequestToken(self.last_issued)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.last_issued
    }

    /// Record that the fetch behind `token` resolved, successfully or not
    pub fn settle(&mut self, token: RequestToken, succeeded: bool) -> Settlement {
        self.in_flight = self.in_flight.saturating_sub(1);

        match self.ordering {
            FetchOrdering::LatestIssued => {
                if !self.is_latest(token) {
                    return Settlement::Discard;
                }
                self.status = if succeeded { FetchStatus::Populated } else { FetchStatus::Failed };
            }
            FetchOrdering::LastResolved => {
                self.status = if self.in_flight > 0 {
                    FetchStatus::Fetching
                } else if succeeded {
                    FetchStatus::Populated
                } else {
                    FetchStatus::Failed
                };
            }
        }

        Settlement::Apply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase_monotonically() {
        let mut tracker = FetchTracker::new(FetchOrdering::LatestIssued);
        let first = tracker.issue();
        let second = tracker.issue();

        assert!(second > first);
        assert!(tracker.is_latest(second));
        assert!(!tracker.is_latest(first));
        assert_eq!(tracker.in_flight(), 2);
    }

    #[test]
    fn test_latest_issued_discards_stale_response() {
        let mut tracker = FetchTracker::new(FetchOrdering::LatestIssued);
        let first = tracker.issue();
        let second = tracker.issue();

        // Latest resolves first, stale one arrives afterwards
        assert_eq!(tracker.settle(second, true), Settlement::Apply);
        assert_eq!(tracker.status(), FetchStatus::Populated);
        assert_eq!(tracker.settle(first, true), Settlement::Discard);
        assert_eq!(tracker.status(), FetchStatus::Populated);
        assert_eq!(tracker.in_flight(), 0);
    }

    #[test]
    fn test_latest_issued_stale_failure_does_not_mark_failed() {
        let mut tracker = FetchTracker::new(FetchOrdering::LatestIssued);
        let first = tracker.issue();
        let second = tracker.issue();

        assert_eq!(tracker.settle(first, false), Settlement::Discard);
        assert_eq!(tracker.status(), FetchStatus::Fetching);
        assert_eq!(tracker.settle(second, true), Settlement::Apply);
        assert_eq!(tracker.status(), FetchStatus::Populated);
    }

    #[test]
    fn test_last_resolved_applies_everything() {
        let mut tracker = FetchTracker::new(FetchOrdering::LastResolved);
        let first = tracker.issue();
        let second = tracker.issue();

        assert_eq!(tracker.settle(second, true), Settlement::Apply);
        assert_eq!(tracker.status(), FetchStatus::Fetching);
        assert_eq!(tracker.settle(first, true), Settlement::Apply);
        assert_eq!(tracker.status(), FetchStatus::Populated);
    }

    #[test]
    fn test_failure_status() {
        let mut tracker = FetchTracker::new(FetchOrdering::default());
        assert_eq!(tracker.status(), FetchStatus::Idle);

        let token = tracker.issue();
        assert_eq!(tracker.status(), FetchStatus::Fetching);
        assert_eq!(tracker.settle(token, false), Settlement::Apply);
        assert_eq!(tracker.status(), FetchStatus::Failed);
    }

    #[test]
    fn test_ordering_config_names() {
        let ordering: FetchOrdering = serde_json::from_str("\"last_resolved\"").unwrap();
        assert_eq!(ordering, FetchOrdering::LastResolved);
        assert_eq!(FetchOrdering::default(), FetchOrdering::LatestIssued);
    }
}
