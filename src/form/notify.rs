use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    Success(String),
    Error(String),
}

/// Shows transient, non-blocking messages to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);

    fn success(&self, message: &str) {
        self.notify(Toast::Success(message.to_string()))
    }

    fn error(&self, message: &str) {
        self.notify(Toast::Error(message.to_string()))
    }
}

/// Client-side navigation to another view of the site.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Toasts for a terminal: written to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast {
            Toast::Success(message) => info!("{}", message),
            Toast::Error(message) => warn!("{}", message),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        info!("Navigating to {}", path);
    }
}

/// Keeps toasts so a rendered page can show them.
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn last(&self) -> Option<Toast> {
        self.toasts
            .lock()
            .ok()
            .and_then(|toasts| toasts.last().cloned())
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}
