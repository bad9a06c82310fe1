// Classification service client

mod error;

pub use error::{AnalysisError, ANALYSIS_FAILED_MESSAGE};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub is_authentic: bool,
}

/// Anything that can turn article text into an authenticity verdict.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<bool, AnalysisError>;
}

#[derive(Debug, Clone)]
pub struct PredictClient {
    base_url: String,
    client: Client,
}

impl PredictClient {
    pub fn new(base_url: String, request_timeout: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }

    pub async fn predict(&self, text: &str) -> Result<bool, AnalysisError> {
        let url = self.predict_url();
        debug!("POST {url} ({} chars)", text.chars().count());

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { text })
            .send()
            .await?;

        if !response.status().is_success() {
            let error = AnalysisError::from_response(response).await;
            warn!("Prediction rejected: {error}");
            return Err(error);
        }

        let body = response.text().await?;
        let prediction: PredictResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Undecodable prediction body: {body}");
            AnalysisError::Decode(e.to_string())
        })?;

        Ok(prediction.is_authentic)
    }
}

#[async_trait]
impl Classifier for PredictClient {
    async fn classify(&self, text: &str) -> Result<bool, AnalysisError> {
        self.predict(text).await
    }
}
