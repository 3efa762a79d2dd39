//! HTTP client for the booking REST contract.
//!
//! One thin reqwest wrapper implementing both service traits. Non-2xx
//! responses are treated uniformly as failures: the body's `message` field
//! is carried through verbatim when present.

use async_trait::async_trait;
use tracing::debug;

use crate::booking::model::{BookingDraft, BookingRecord};
use crate::booking::workflow::BookingService;
use crate::error::SubmissionError;
use crate::profile::editor::ConsultantService;
use crate::profile::model::ConsultantProfile;

/// Client for `/api/bookings` and `/api/consultant`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against `base_url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-2xx response into a [`SubmissionError`], extracting the
    /// body's `message` field if there is one.
    async fn failure(response: reqwest::Response) -> SubmissionError {
        let status = response.status().as_u16();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("message")?.as_str().map(str::to_string));
        SubmissionError::Http { status, message }
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SubmissionError> {
        if !response.status().is_success() {
            return Err(Self::failure(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))
    }
}

#[async_trait]
impl BookingService for ApiClient {
    async fn create_booking(
        &self,
        draft: &BookingDraft,
    ) -> Result<BookingRecord, SubmissionError> {
        debug!(date = %draft.date, time = %draft.time, "POST /api/bookings");
        let response = self
            .http
            .post(self.url("/api/bookings"))
            .json(draft)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>, SubmissionError> {
        let response = self
            .http
            .get(self.url("/api/bookings"))
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ConsultantService for ApiClient {
    async fn get_consultant(&self) -> Result<ConsultantProfile, SubmissionError> {
        let response = self
            .http
            .get(self.url("/api/consultant"))
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn update_consultant(
        &self,
        profile: &ConsultantProfile,
    ) -> Result<ConsultantProfile, SubmissionError> {
        debug!(email = %profile.email, "PUT /api/consultant");
        let response = self
            .http
            .put(self.url("/api/consultant"))
            .json(profile)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/api/bookings"), "http://localhost:8080/api/bookings");
    }
}
