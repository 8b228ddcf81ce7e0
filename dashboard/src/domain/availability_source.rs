use shared::{MonthAvailabilityItem, MonthAvailabilityQuery};

use super::fetch_tracker::{FetchOrdering, FetchStatus, FetchTracker, RequestToken, Settlement};
use super::models::{CurrentMonth, MonthAvailability, MonthAvailabilityEntry};
use crate::error::{DashboardError, Result};

/// A month availability fetch that has been issued but not yet settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub token: RequestToken,
    pub month: CurrentMonth,
}

impl AvailabilityRequest {
    /// Wire query; converts the 0-indexed month to the API's 1-indexed one
    pub fn query(&self) -> MonthAvailabilityQuery {
        MonthAvailabilityQuery {
            year: self.month.year(),
            month: self.month.wire_month(),
        }
    }
}

/// Owns the availability set for the visible month
#[derive(Debug, Clone)]
pub struct AvailabilitySource {
    tracker: FetchTracker,
    data: Option<MonthAvailability>,
    revision: u64,
}

impl AvailabilitySource {
    pub fn new(ordering: FetchOrdering) -> Self {
        Self {
            tracker: FetchTracker::new(ordering),
            data: None,
            revision: 0,
        }
    }

    /// Start a fetch for `month`
    pub fn begin(&mut self, month: CurrentMonth) -> AvailabilityRequest {
        let token = self.tracker.issue();
        log::info!(
            "🗓️ AVAILABILITY: Requesting {} (request #{}, {} in flight, {:?})",
            month,
            token.value(),
            self.tracker.in_flight(),
            self.tracker.ordering()
        );
        AvailabilityRequest { token, month }
    }

    /// Settle a fetch.
    ///
    /// On success the whole set is replaced. A failure that is still
    /// applicable leaves the set untouched and is returned so the caller can
    /// report it; superseded responses (success or failure) are discarded.
    pub fn complete(
        &mut self,
        request: &AvailabilityRequest,
        result: Result<Vec<MonthAvailabilityItem>>,
    ) -> Result<Settlement> {
        match result {
            Ok(items) => {
                let settlement = self.tracker.settle(request.token, true);
                if settlement == Settlement::Discard {
                    log::debug!(
                        "🗓️ AVAILABILITY: Discarding stale response for {} (request #{})",
                        request.month,
                        request.token.value()
                    );
                    return Ok(settlement);
                }

                let entries = items.into_iter().map(MonthAvailabilityEntry::from).collect();
                self.data = Some(MonthAvailability::new(request.month, entries));
                self.revision += 1;
                log::info!(
                    "🗓️ AVAILABILITY: Loaded {} days for {}",
                    self.data.as_ref().map(|d| d.entries().len()).unwrap_or(0),
                    request.month
                );
                Ok(settlement)
            }
            Err(error) => self.fail(request, error),
        }
    }

    fn fail(&mut self, request: &AvailabilityRequest, error: DashboardError) -> Result<Settlement> {
        match self.tracker.settle(request.token, false) {
            Settlement::Discard => {
                log::debug!(
                    "🗓️ AVAILABILITY: Ignoring failure of superseded request #{}: {}",
                    request.token.value(),
                    error
                );
                Ok(Settlement::Discard)
            }
            Settlement::Apply => {
                log::error!("❌ AVAILABILITY: Failed to load {}: {}", request.month, error);
                Err(error)
            }
        }
    }

    pub fn current(&self) -> Option<&MonthAvailability> {
        self.data.as_ref()
    }

    pub fn status(&self) -> FetchStatus {
        self.tracker.status()
    }

    /// Bumped every time the set is replaced
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(day: u32, available: bool) -> MonthAvailabilityItem {
        MonthAvailabilityItem { day, available }
    }

    #[test]
    fn test_query_uses_one_indexed_month() {
        let mut source = AvailabilitySource::new(FetchOrdering::LatestIssued);
        let request = source.begin(CurrentMonth::new(2024, 0).unwrap());

        assert_eq!(request.query(), MonthAvailabilityQuery { year: 2024, month: 1 });
    }

    #[test]
    fn test_successful_fetch_replaces_set() {
        let mut source = AvailabilitySource::new(FetchOrdering::LatestIssued);
        let january = CurrentMonth::new(2024, 0).unwrap();
        let february = january.next();

        let request = source.begin(january);
        source.complete(&request, Ok(vec![item(1, false), item(2, true)])).unwrap();
        assert_eq!(source.current().unwrap().entries().len(), 2);

        let request = source.begin(february);
        source.complete(&request, Ok(vec![item(5, false)])).unwrap();

        let current = source.current().unwrap();
        assert_eq!(current.month(), february);
        assert_eq!(current.entries(), &[MonthAvailabilityEntry { day: 5, available: false }]);
        assert_eq!(source.revision(), 2);
    }

    #[test]
    fn test_empty_response_is_valid() {
        let mut source = AvailabilitySource::new(FetchOrdering::LatestIssued);
        let request = source.begin(CurrentMonth::new(2024, 0).unwrap());

        assert_eq!(source.complete(&request, Ok(vec![])), Ok(Settlement::Apply));
        assert!(source.current().unwrap().entries().is_empty());
        assert_eq!(source.status(), FetchStatus::Populated);
    }

    #[test]
    fn test_failure_keeps_previous_set() {
        let mut source = AvailabilitySource::new(FetchOrdering::LatestIssued);
        let january = CurrentMonth::new(2024, 0).unwrap();

        let request = source.begin(january);
        source.complete(&request, Ok(vec![item(1, false)])).unwrap();

        let request = source.begin(january.next());
        let error = DashboardError::Network("offline".to_string());
        assert_eq!(source.complete(&request, Err(error.clone())), Err(error));

        assert_eq!(source.current().unwrap().month(), january);
        assert_eq!(source.status(), FetchStatus::Failed);
        assert_eq!(source.revision(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut source = AvailabilitySource::new(FetchOrdering::LatestIssued);
        let january = CurrentMonth::new(2024, 0).unwrap();
        let february = january.next();

        let stale = source.begin(january);
        let latest = source.begin(february);

        source.complete(&latest, Ok(vec![item(3, false)])).unwrap();
        assert_eq!(source.complete(&stale, Ok(vec![item(1, false)])), Ok(Settlement::Discard));

        assert_eq!(source.current().unwrap().month(), february);
    }
}
