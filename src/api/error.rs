// Errors raised while talking to the classification service

use thiserror::Error;

/// Message shown to the user for every failed analysis, whatever the cause.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze news. Please try again.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Connection refused, DNS failure, timeout or a malformed request.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status outside the 2xx range.
    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response whose body is not `{"is_authentic": <bool>}`.
    #[error("Could not decode prediction: {0}")]
    Decode(String),

    /// The request task ended without reporting a result.
    #[error("Analysis task ended before producing a result")]
    Aborted,
}

impl AnalysisError {
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        Self::Status { status, body }
    }
}
