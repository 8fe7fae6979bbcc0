use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use staffly_core::AppError;
use staffly_domain::RoleValue;

#[derive(Debug, Clone)]
pub struct SmtpRuntimeConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

#[derive(Debug, Clone)]
pub enum EmailProviderConfig {
    Console,
    Smtp(SmtpRuntimeConfig),
}

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub data_dir: PathBuf,
    pub login_surface: String,
    pub signin_role: RoleValue,
    pub email_provider: EmailProviderConfig,
}

impl PortalConfig {
    pub fn load() -> Result<Self, AppError> {
        let data_dir = env::var("PORTAL_DATA_DIR")
            .unwrap_or_else(|_| ".staffly".to_owned())
            .into();

        let login_surface =
            env::var("PORTAL_LOGIN_SURFACE").unwrap_or_else(|_| "/login".to_owned());

        let signin_role = RoleValue::from_str(
            env::var("PORTAL_SIGNIN_ROLE")
                .unwrap_or_else(|_| "admin".to_owned())
                .as_str(),
        )?;

        let email_provider = match env::var("EMAIL_PROVIDER")
            .unwrap_or_else(|_| "console".to_owned())
            .as_str()
        {
            "console" => EmailProviderConfig::Console,
            "smtp" => {
                let port = required_non_empty_env("SMTP_PORT")?
                    .parse::<u16>()
                    .map_err(|error| AppError::Validation(format!("invalid SMTP_PORT: {error}")))?;
                EmailProviderConfig::Smtp(SmtpRuntimeConfig {
                    host: required_non_empty_env("SMTP_HOST")?,
                    port,
                    username: required_non_empty_env("SMTP_USERNAME")?,
                    password: required_non_empty_env("SMTP_PASSWORD")?,
                    from_address: required_non_empty_env("SMTP_FROM_ADDRESS")?,
                })
            }
            other => {
                return Err(AppError::Validation(format!(
                    "unknown EMAIL_PROVIDER '{other}'"
                )));
            }
        };

        Ok(Self {
            data_dir,
            login_surface,
            signin_role,
            email_provider,
        })
    }
}

fn required_non_empty_env(name: &str) -> Result<String, AppError> {
    let value = env::var(name)
        .map_err(|_| AppError::Validation(format!("{name} must be set")))?;

    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}
