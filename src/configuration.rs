use actix_web::http::Uri;

use std::path::Path;

use crate::telemetry::LoggerFormat;

/// Entry of `application.allowed_origins` that opens CORS to every origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: AppSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct AppSettings {
    pub port: u16,
    pub host: String,
    pub logger_format: LoggerFormat,
    /// Reported by `/` and `/health`.
    pub version: String,
    /// Origins allowed by CORS, none by default.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Max accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl AppSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `"*"` allows any origin; everything else must be `scheme://host[:port]`.
    pub fn check_allowed_origins(&self) -> Result<(), config::ConfigError> {
        for origin in self.allowed_origins.iter().filter(|o| o.as_str() != ANY_ORIGIN) {
            let is_origin = origin
                .parse::<Uri>()
                .map(|uri| {
                    uri.scheme().is_some()
                        && uri.authority().is_some()
                        && matches!(uri.path(), "" | "/")
                        && uri.query().is_none()
                })
                .unwrap_or(false);

            if !is_origin {
                return Err(config::ConfigError::Message(format!(
                    "`{origin}` in application.allowed_origins is not a valid origin"
                )));
            }
        }
        Ok(())
    }
}

pub fn get_configurations() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configurations");

    let environment: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    load_settings(
        &configuration_directory,
        environment,
        std::env::var("PORT").ok(),
    )
}

/// Layer defaults, `base.yaml`, `<environment>.yaml`, `APP_*` variables and
/// finally the `port` override, later sources winning.
pub fn load_settings(
    configuration_directory: &Path,
    environment: Environment,
    port: Option<String>,
) -> Result<Settings, config::ConfigError> {
    let builder = config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 5000_i64)?
        .set_default("application.logger_format", "compact")?
        .set_default("application.version", "1.0")?
        .set_default("application.allowed_origins", Vec::<String>::new())?
        .set_default("application.json_limit", 4096_i64)?;

    let builder = builder
        .add_source(config::File::from(configuration_directory.join("base")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment.as_str()))
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );

    // Container platforms hand out the port through `PORT`
    let builder = builder.set_override_option("application.port", port)?;

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.application.check_allowed_origins()?;

    Ok(settings)
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
