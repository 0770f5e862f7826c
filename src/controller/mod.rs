use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::{Extension, Router};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::api::HttpReservationClient;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;

pub mod api_proxy_controller;
pub mod health_check;
pub mod pages_controller;

use api_proxy_controller::ApiProxy;

pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let application = application(config)?;

    let addr = config.dev_server_addr();
    info!("Dev server listening on: {}", addr);
    info!("Forwarding /api/* to backend: {}", config.backend_url);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the dev server")
}

/// Routes plus the CORS, compression and 404 layers the dev server runs with.
pub fn application(config: &Config) -> anyhow::Result<Router> {
    let origin: HeaderValue = config
        .dev_server_origin()
        .parse()
        .context("Dev server origin is not a valid header value")?;

    let application = router_endpoints(config)?
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS
                        ])
                        .allow_origin(vec![origin])
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                        .allow_credentials(true)
                )
        )
        .fallback(page_not_found_handler);

    Ok(application)
}

pub fn router_endpoints(config: &Config) -> anyhow::Result<Router> {
    let proxy = Arc::new(ApiProxy::new(config)?);
    let reservation_client = Arc::new(
        HttpReservationClient::new(config).context("Error building the reservation client")?
    );

    Ok(Router::new()
        .merge(pages_controller::router())
        .merge(health_check::router())
        .merge(api_proxy_controller::router())
        .layer(Extension(proxy))
        .layer(Extension(reservation_client)))
}
