//! Toast shorthand used by every panel.

use shared_types::ApiError;
use shared_ui::{ToastOptions, Toasts};

pub fn success(toast: Toasts, message: impl Into<String>) {
    toast.success(message.into(), ToastOptions::new());
}

pub fn error(toast: Toasts, message: impl Into<String>) {
    toast.error(message.into(), ToastOptions::new());
}

/// Show an API failure with its user-facing wording.
pub fn failure(toast: Toasts, err: &ApiError) {
    toast.error(err.friendly_message(), ToastOptions::new());
}
