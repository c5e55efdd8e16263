use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, feedback::entities::Feedback};

/// Repository trait for feedback entries
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackRepository: Send + Sync {
    fn insert(&self, feedback: Feedback)
    -> impl Future<Output = Result<Feedback, CoreError>> + Send;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Feedback>, CoreError>> + Send;
}
