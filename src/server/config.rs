use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAIL_FROM: &str = "no-reply@hoterra.app";

/// Credentials for the admin account created at startup when none exists.
pub struct DefaultAdminConfig {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    /// Base URL of the frontend, used for invitation links and CORS.
    pub app_url: String,
    pub bind_address: String,

    /// Brevo API key; emails are only logged when absent.
    pub brevo_api_key: Option<String>,
    pub mail_from: String,

    pub default_admin: Option<DefaultAdminConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let default_admin = match (
            optional("DEFAULT_ADMIN_EMAIL"),
            optional("DEFAULT_ADMIN_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(DefaultAdminConfig {
                name: optional("DEFAULT_ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        let bind_address =
            optional("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        if bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address,
            }
            .into());
        }

        let app_url = required("APP_URL")?;
        if url::Url::parse(&app_url).is_err() {
            return Err(ConfigError::InvalidEnvVar {
                name: "APP_URL".to_string(),
                value: app_url,
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url,
            bind_address,
            brevo_api_key: optional("BREVO_API_KEY"),
            mail_from: optional("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
            default_admin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
