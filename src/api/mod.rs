use std::future::Future;
use crate::models::reservation::{ReservationRequest, ReservationResponse};

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::HttpReservationClient;
pub use error::ApiError;

/// The one call the reservation form makes against the backend.
pub trait ReservationApi {
    fn send_reservation(
        &self,
        request: &ReservationRequest,
    ) -> impl Future<Output = Result<ReservationResponse, ApiError>> + Send;
}
