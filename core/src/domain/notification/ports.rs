use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, notification::entities::EmailMessage};

/// Outbound email port. Implementations return the relay's failure message
/// verbatim; nothing retries.
#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync {
    fn send(&self, message: EmailMessage) -> impl Future<Output = Result<(), CoreError>> + Send;
}
