pub mod entities;
pub mod ports;

pub use entities::EmailMessage;
pub use ports::Mailer;
