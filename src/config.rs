use std::env;
use thiserror::Error;

/// Environment variables that must be set for the service to start.
const REQUIRED_VARS: [&str; 4] = [
    "GROQ_API_KEY",
    "MAIL_SERVER",
    "MAIL_USERNAME",
    "MAIL_PASSWORD",
];

const DEFAULT_MAIL_PORT: u16 = 587;
const DEFAULT_HTTP_PORT: u16 = 5000;

/// Fallback secret key for local development. Deployments should set SECRET_KEY.
pub const DEV_SECRET_KEY: &str = "dev-secret-key";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required variables are unset; lists every missing name.
    #[error("Missing environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Process-wide configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key used for summarization calls
    pub groq_api_key: String,

    /// SMTP server hostname
    pub mail_server: String,

    /// SMTP port (default: 587)
    pub mail_port: u16,

    /// Whether to upgrade the SMTP connection with STARTTLS (default: true)
    pub mail_use_tls: bool,

    /// SMTP username; also the sender address for outgoing mail
    pub mail_username: String,

    /// SMTP password
    pub mail_password: String,

    /// Application secret key (falls back to a development-only default)
    pub secret_key: String,

    /// Port the HTTP server binds to (default: 5000)
    pub http_port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Every required name is checked before returning, so a single failure
    /// reports all missing variables at once rather than just the first.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // Set-but-empty counts as missing, same as unset.
        let required = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let groq_api_key = required("GROQ_API_KEY");
        let mail_server = required("MAIL_SERVER");
        let mail_username = required("MAIL_USERNAME");
        let mail_password = required("MAIL_PASSWORD");

        let present = [
            &groq_api_key,
            &mail_server,
            &mail_username,
            &mail_password,
        ];
        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .zip(present)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        let (Some(groq_api_key), Some(mail_server), Some(mail_username), Some(mail_password)) =
            (groq_api_key, mail_server, mail_username, mail_password)
        else {
            return Err(ConfigError::MissingVars(missing));
        };

        Ok(Self {
            groq_api_key,
            mail_server,
            mail_port: parse_port(&lookup, "MAIL_PORT", DEFAULT_MAIL_PORT)?,
            mail_use_tls: parse_tls_flag(lookup("MAIL_USE_TLS")),
            mail_username,
            mail_password,
            secret_key: lookup("SECRET_KEY").unwrap_or_else(|| DEV_SECRET_KEY.to_string()),
            http_port: parse_port(&lookup, "PORT", DEFAULT_HTTP_PORT)?,
        })
    }

    /// Whether the secret key is the development fallback rather than an
    /// explicitly configured value.
    pub fn uses_dev_secret_key(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

fn parse_port(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u16,
) -> Result<u16, ConfigError> {
    match lookup(name) {
        Some(value) if !value.is_empty() => {
            value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}

/// Accepted truthy forms: "true", "1", "t" (any case). Unset defaults to true.
fn parse_tls_flag(value: Option<String>) -> bool {
    match value {
        Some(value) => matches!(value.to_lowercase().as_str(), "true" | "1" | "t"),
        None => true,
    }
}
