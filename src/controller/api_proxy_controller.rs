use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use axum::body::Bytes;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Extension, Router};
use reqwest::header::{
    CONNECTION, CONTENT_LENGTH, HOST, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, TE, TRAILER,
    TRANSFER_ENCODING, UPGRADE,
};
use reqwest::StatusCode;
use tracing::{debug, warn};
use crate::api::endpoints;
use crate::config::Config;

pub fn router() -> Router {
    Router::new().route(&format!("{}/*path", endpoints::API_PREFIX), any(forward_api_request))
}

/// Forwards `/api/*` from the dev server to the reservation backend.
pub struct ApiProxy {
    client: reqwest::Client,
    backend_url: String,
    timeout: Duration,
}

impl ApiProxy {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // Dev backends often run on self-signed certificates.
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .context("Error building the proxy http client")?;

        Ok(Self {
            client,
            backend_url: config.backend_url.clone(),
            timeout: config.request_timeout(),
        })
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        mut headers: HeaderMap,
        body: Bytes,
    ) -> anyhow::Result<Response> {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        let url = endpoints::url(&self.backend_url, path_and_query);
        debug!("Forwarding {} {} to {}", method, path_and_query, url);

        // The backend sees its own host, not the dev server's.
        headers.remove(HOST);
        headers.remove(CONTENT_LENGTH);
        strip_hop_by_hop(&mut headers);

        let upstream = self.client
            .request(method, &url)
            .headers(headers)
            .body(body)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("Error forwarding request to {}", url))?;

        let status = upstream.status();
        let mut response_headers = upstream.headers().clone();
        response_headers.remove(CONTENT_LENGTH);
        strip_hop_by_hop(&mut response_headers);

        let body = upstream
            .bytes()
            .await
            .with_context(|| format!("Error reading response from {}", url))?;

        Ok((status, response_headers, body).into_response())
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in [
        CONNECTION,
        PROXY_AUTHENTICATE,
        PROXY_AUTHORIZATION,
        TE,
        TRAILER,
        TRANSFER_ENCODING,
        UPGRADE,
    ] {
        headers.remove(name);
    }
    headers.remove("keep-alive");
}

pub async fn forward_api_request(
    Extension(proxy): Extension<Arc<ApiProxy>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    return match proxy.forward(method, &uri, headers, body).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Something went wrong forwarding {} due to: {:#}", uri, e);
            (
                StatusCode::BAD_GATEWAY,
                "Backend unavailable, please try again.",
            ).into_response()
        }
    };
}
