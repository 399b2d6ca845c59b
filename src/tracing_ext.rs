//! Tracing integration for error-trail.
//!
//! Emits a diagnostic's full chain rendering through the `tracing` ecosystem,
//! and the user-presentable part of a [`UserFacingError`] separately from its
//! diagnostic detail.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::traits::Diagnostic;
use crate::types::{format_error, UserFacingError};

/// Logs `error` and its whole cause chain as one `ERROR` event.
///
/// The event carries the outermost error's type and message as fields, and
/// the chain rendering as its message.
///
/// # Example
///
/// ```rust,ignore
/// use error_trail::tracing_ext::log_diagnostic;
///
/// if let Err(err) = load_settings() {
///     log_diagnostic(&err);
/// }
/// ```
pub fn log_diagnostic(error: &dyn Diagnostic) {
    tracing::error!(
        error.type = error.type_name(),
        error.message = %error.message(),
        "{}",
        format_error(error)
    );
}

/// Logs what the user will see at `WARN`, and the full chain at `DEBUG`.
pub fn log_user_facing(error: &UserFacingError) {
    let shown = error.user_facing_messages().join(": ");
    tracing::warn!(error.type = error.type_name(), "user-facing error: {}", shown);
    tracing::debug!("{}", format_error(error));
}
