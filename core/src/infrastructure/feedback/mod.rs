pub mod mappers;
pub mod repositories;

pub use repositories::feedback_repository::PostgresFeedbackRepository;
