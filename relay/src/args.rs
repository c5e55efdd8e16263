use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "tablemates-relay", about = "Forwards transactional email to the delivery provider")]
pub struct Args {
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "RELAY_PORT", default_value_t = 3001)]
    pub port: u16,

    /// Delivery provider API base URL
    #[arg(
        long,
        env = "EMAIL_PROVIDER_URL",
        default_value = "https://api.resend.com"
    )]
    pub provider_url: String,

    #[arg(long, env = "EMAIL_PROVIDER_API_KEY")]
    pub provider_api_key: String,

    /// Sender address stamped on every outbound email
    #[arg(
        long,
        env = "EMAIL_SENDER",
        default_value = "Tablemates <no-reply@tablemates.app>"
    )]
    pub sender: String,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}
