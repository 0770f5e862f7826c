use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Extension, Form, Router};
use tracing::warn;
use crate::api::HttpReservationClient;
use crate::form::controller::SUCCESS_PATH;
use crate::form::{
    FieldError, ReservationFields, ReservationForm, SubmitOutcome, Toast, ToastLog,
    TracingNavigator,
};
use crate::site::pages::{render_landing, render_landing_with, render_success, RESERVATION_FORM_PATH};

pub fn router() -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route(RESERVATION_FORM_PATH, get(landing_page).post(submit_reservation))
        .route(SUCCESS_PATH, get(success_page))
}

pub async fn landing_page() -> impl IntoResponse {
    Html(render_landing(&ReservationForm::new()))
}

pub async fn success_page() -> impl IntoResponse {
    Html(render_success())
}

fn fill_form(form: &mut ReservationForm, fields: &ReservationFields) -> Result<(), FieldError> {
    form.set_first_name(&fields.first_name);
    form.set_last_name(&fields.last_name);
    form.set_email(&fields.email);
    form.set_phone(&fields.phone);
    form.set_date(&fields.date)?;
    form.set_time(&fields.time)?;
    Ok(())
}

/// Runs a posted form through validation and the backend call, then renders
/// the form again with the outcome.
pub async fn submit_reservation(
    Extension(client): Extension<Arc<HttpReservationClient>>,
    Form(fields): Form<ReservationFields>,
) -> impl IntoResponse {
    let mut form = ReservationForm::new();

    if let Err(e) = fill_form(&mut form, &fields) {
        warn!("Rejected reservation input: {}", e);
        let toast = Toast::Error(e.to_string());
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_landing_with(&form, Some(&toast), false)),
        ).into_response();
    }

    let toasts = ToastLog::default();
    let outcome = form
        .submit(client.as_ref(), &toasts, Arc::new(TracingNavigator))
        .await;
    let toast = toasts.last();

    return match outcome {
        SubmitOutcome::Sent { .. } => {
            // The page itself moves on to the success view.
            (
                StatusCode::OK,
                Html(render_landing_with(&form, toast.as_ref(), true)),
            ).into_response()
        }
        SubmitOutcome::Invalid(_) => {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render_landing_with(&form, toast.as_ref(), false)),
            ).into_response()
        }
        SubmitOutcome::Failed { .. } | SubmitOutcome::Busy => {
            (
                StatusCode::BAD_GATEWAY,
                Html(render_landing_with(&form, toast.as_ref(), false)),
            ).into_response()
        }
    };
}
