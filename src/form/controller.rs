use std::sync::Arc;
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio::task::JoinHandle;
use tracing::{debug, error};
use crate::api::{ApiError, ReservationApi};
use crate::form::notify::{Navigator, Notifier};
use crate::form::validation::{self, FieldError, ReservationFields, ValidationError};

pub const SUCCESS_PATH: &str = "/success";
pub const NAVIGATION_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Reservation successful!";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send reservation. Try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A request from this form is still in flight.
    Busy,
    Invalid(ValidationError),
    Sent {
        message: String,
        navigation: JoinHandle<()>,
    },
    Failed {
        message: String,
        error: ApiError,
    },
}

/// Holds `Submitting` for the duration of a request and always leaves it,
/// even if the submitting future is dropped mid-flight.
struct SubmittingGuard<'a> {
    state: &'a mut SubmissionState,
}

impl<'a> SubmittingGuard<'a> {
    fn begin(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Submitting;
        Self { state }
    }

    fn finish(self, outcome: SubmissionState) {
        *self.state = outcome;
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if *self.state == SubmissionState::Submitting {
            *self.state = SubmissionState::Failed;
        }
    }
}

/// State behind the "MAKE A RESERVATION" form.
#[derive(Debug, Clone)]
pub struct ReservationForm {
    fields: ReservationFields,
    state: SubmissionState,
    today: Date,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::with_today(OffsetDateTime::now_utc().date())
    }

    /// A form whose date picker treats `today` as the earliest bookable day.
    pub fn with_today(today: Date) -> Self {
        Self {
            fields: ReservationFields::default(),
            state: SubmissionState::Idle,
            today,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(mut self, state: SubmissionState) -> Self {
        self.state = state;
        self
    }

    pub fn fields(&self) -> &ReservationFields {
        &self.fields
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Inputs and the submit button are disabled while a request is in flight.
    pub fn inputs_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn min_date(&self) -> String {
        validation::format_date(self.today)
    }

    pub fn set_first_name(&mut self, value: &str) {
        if !self.inputs_disabled() {
            self.fields.first_name = value.to_string();
        }
    }

    pub fn set_last_name(&mut self, value: &str) {
        if !self.inputs_disabled() {
            self.fields.last_name = value.to_string();
        }
    }

    pub fn set_email(&mut self, value: &str) {
        if !self.inputs_disabled() {
            self.fields.email = value.to_string();
        }
    }

    pub fn set_phone(&mut self, value: &str) {
        if !self.inputs_disabled() {
            self.fields.phone = validation::mask_phone_input(value);
        }
    }

    /// Dates before today never make it into the field.
    pub fn set_date(&mut self, value: &str) -> Result<(), FieldError> {
        if self.inputs_disabled() {
            return Ok(());
        }
        if !value.is_empty() {
            validation::check_selectable_date(value, self.today)?;
        }
        self.fields.date = value.to_string();
        Ok(())
    }

    pub fn set_time(&mut self, value: &str) -> Result<(), FieldError> {
        if self.inputs_disabled() {
            return Ok(());
        }
        if !value.is_empty() {
            validation::parse_time(value)?;
        }
        self.fields.time = value.to_string();
        Ok(())
    }

    /// Validates the form and, when it passes, sends the reservation once.
    ///
    /// On success the fields are cleared and `navigator` is sent to
    /// [`SUCCESS_PATH`] after [`NAVIGATION_DELAY`]. On failure the fields
    /// keep their values so the same reservation can be submitted again.
    /// Either way the form is editable again when this returns.
    pub async fn submit<A: ReservationApi + Sync>(
        &mut self,
        api: &A,
        notifier: &dyn Notifier,
        navigator: Arc<dyn Navigator>,
    ) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }

        let request = match validation::validate(&self.fields) {
            Ok(request) => request,
            Err(e) => {
                debug!("Reservation blocked before sending: {}", e);
                notifier.error(e.user_message());
                return SubmitOutcome::Invalid(e);
            }
        };

        let guard = SubmittingGuard::begin(&mut self.state);
        let result = api.send_reservation(&request).await;

        match result {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                notifier.success(&message);
                self.fields.clear();
                guard.finish(SubmissionState::Succeeded);

                SubmitOutcome::Sent {
                    message,
                    navigation: schedule_navigation(navigator),
                }
            }
            Err(e) => {
                error!("Reservation Error: {:?}", e);
                let message = e
                    .server_message()
                    .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                    .to_string();
                notifier.error(&message);
                guard.finish(SubmissionState::Failed);

                SubmitOutcome::Failed { message, error: e }
            }
        }
    }
}

fn schedule_navigation(navigator: Arc<dyn Navigator>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(NAVIGATION_DELAY).await;
        navigator.navigate(SUCCESS_PATH);
    })
}
