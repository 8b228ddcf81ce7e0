use thiserror::Error;

/// Errors produced by the dashboard core and its API seam
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid month index {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Invalid date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DashboardError {
    /// Transport and payload failures leave the previous data in place and are
    /// reported to the shell instead of being propagated.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DashboardError::Network(_) | DashboardError::Status { .. } | DashboardError::Decode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
