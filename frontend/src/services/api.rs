use async_trait::async_trait;
use dashboard::{DashboardConfig, DashboardError, SchedulingApi};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{
    AppointmentResponse, DayAppointmentsQuery, MonthAvailabilityItem, MonthAvailabilityQuery,
};

/// API client for the booking backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the configured base URL, authenticated with `token` when present
    pub fn new(config: &DashboardConfig, token: Option<String>) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = self.url(path);
        log::debug!("🌐 API: GET {}", url);

        let mut request = Request::get(&url);
        if let Some(authorization) = self.authorization() {
            request = request.header("Authorization", &authorization);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(DashboardError::Status {
                status: response.status(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::Decode(format!("{}: {}", url, e)))
    }
}

#[async_trait(?Send)]
impl SchedulingApi for ApiClient {
    async fn month_availability(
        &self,
        provider_id: &str,
        query: MonthAvailabilityQuery,
    ) -> Result<Vec<MonthAvailabilityItem>, DashboardError> {
        self.get_json(&query.path(provider_id)).await
    }

    async fn day_appointments(
        &self,
        query: DayAppointmentsQuery,
    ) -> Result<Vec<AppointmentResponse>, DashboardError> {
        self.get_json(&query.path()).await
    }
}
