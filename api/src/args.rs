use clap::Parser;
use tablemates_core::domain::common::{
    DatabaseConfig, RelayConfig, SignupConfig, TablematesConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "tablemates-api", about = "Tablemates sign-up and admin API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub admin: AdminArgs,

    #[command(flatten)]
    pub signup: SignupArgs,

    #[command(flatten)]
    pub relay: RelayArgs,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api"
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(
        long = "database-user",
        env = "DATABASE_USER",
        default_value = "tablemates"
    )]
    pub username: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "")]
    pub password: String,

    #[arg(
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "tablemates"
    )]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AdminArgs {
    /// Shared dashboard password. Absent means the admin routes stay
    /// disabled.
    #[arg(long = "admin-password", env = "ADMIN_DASHBOARD_PASSWORD")]
    pub dashboard_password: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SignupArgs {
    /// Institutional email suffix required on sign-up
    #[arg(
        long = "signup-email-domain",
        env = "SIGNUP_EMAIL_DOMAIN",
        default_value = "@brandeis.edu"
    )]
    pub email_domain: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RelayArgs {
    /// Base URL of the notification relay process
    #[arg(long = "relay-url", env = "RELAY_URL", default_value = "http://localhost:3001")]
    pub url: String,
}

impl From<Args> for TablematesConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.username,
                password: args.db.password,
                name: args.db.name,
            },
            signup: SignupConfig {
                email_domain: args.signup.email_domain,
            },
            relay: RelayConfig {
                base_url: args.relay.url,
            },
        }
    }
}
