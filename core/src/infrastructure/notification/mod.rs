pub mod relay_mailer;

pub use relay_mailer::RelayMailer;
