use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One outbound transactional email. Fire and forget: no idempotency key,
/// so a duplicate send produces a duplicate email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}
