pub mod common;
pub mod dashboard;
pub mod export;
pub mod feedback;
pub mod health;
pub mod notification;
pub mod profile;
