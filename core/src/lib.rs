//! Core business logic library for Tablemates.
//!
//! The domain layer holds the sign-up data model and the admin dashboard
//! view logic; the infrastructure layer holds the Postgres repositories and
//! the notification-relay client.

pub mod domain;
pub mod entity;
pub mod infrastructure;
