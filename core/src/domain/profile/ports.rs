use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, profile::entities::Profile};

/// Repository trait for sign-up profiles
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, profile: Profile) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;
}
