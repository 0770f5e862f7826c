pub mod controller;
pub mod notify;
pub mod validation;

pub use controller::{ReservationForm, SubmissionState, SubmitOutcome};
pub use notify::{Navigator, Notifier, Toast, ToastLog, TracingNavigator, TracingNotifier};
pub use validation::{FieldError, ReservationFields, ValidationError};
