use std::time::Duration;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use crate::api::{endpoints, ApiError, ReservationApi};
use crate::config::Config;
use crate::models::reservation::{ReservationRequest, ReservationResponse, ServerMessage};

/// Talks to the reservation backend over HTTP. Cookies the backend sets are
/// kept and sent back on later calls.
#[derive(Clone, Debug)]
pub struct HttpReservationClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpReservationClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
            timeout: config.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ReservationApi for HttpReservationClient {
    async fn send_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, ApiError> {
        let url = endpoints::url(&self.base_url, endpoints::RESERVATION_SEND);
        debug!("Sending reservation to {}", url);

        let response = self.client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            // Backends that answer with an empty or non-JSON body still succeeded.
            Ok(serde_json::from_slice(&body).unwrap_or_default())
        } else {
            let message = serde_json::from_slice::<ServerMessage>(&body)
                .ok()
                .and_then(|m| m.message);
            Err(ApiError::Server { status, message })
        }
    }
}
