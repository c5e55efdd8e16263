use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;

#[derive(Clone, Debug)]
pub struct TablematesConfig {
    pub database: DatabaseConfig,
    pub signup: SignupConfig,
    pub relay: RelayConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct SignupConfig {
    /// Institutional email suffix required at submission time, e.g. "@brandeis.edu".
    pub email_domain: String,
}

#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub base_url: String,
}

/// Admin dashboard credential, resolved once at startup.
///
/// `Disabled` means no password was configured; the dashboard stays locked
/// instead of falling back to prompting for one.
#[derive(Clone, Debug)]
pub enum AdminAccess {
    Enabled { password: String },
    Disabled,
}

impl AdminAccess {
    pub fn from_configured(password: Option<String>) -> Self {
        match password {
            Some(password) if !password.trim().is_empty() => AdminAccess::Enabled { password },
            _ => AdminAccess::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, AdminAccess::Enabled { .. })
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_access_requires_non_empty_password() {
        assert!(AdminAccess::from_configured(Some("hunter2".to_string())).is_enabled());
        assert!(!AdminAccess::from_configured(Some("   ".to_string())).is_enabled());
        assert!(!AdminAccess::from_configured(None).is_enabled());
    }
}
