use serde::Deserialize;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub exposition: ExpositionSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9100
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpositionSettings {
    /// Route the exposition body is served on. Every HTTP method is accepted.
    #[serde(default = "default_exposition_path")]
    pub path: String,
}

fn default_exposition_path() -> String {
    "/metrics".to_string()
}

impl Default for ExpositionSettings {
    fn default() -> Self {
        Self {
            path: default_exposition_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP gRPC collector (e.g. http://tempo:4317). Span export is off when unset.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_service_name() -> String {
    "exposition-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

impl Settings {
    /// Deserialize and validate settings from an already built source stack.
    pub fn from_config(config: config::Config) -> Result<Self, AppError> {
        let settings = config.try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> Result<(), AppError> {
        let path = &self.exposition.path;
        if !path.starts_with('/') {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "exposition.path must start with '/', got {:?}",
                path
            )));
        }
        if path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
            || path.contains(['{', '}'])
        {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "exposition.path must be a literal route without captures or wildcards, got {:?}",
                path
            )));
        }
        if path == crate::startup::HEALTH_PATH {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "exposition.path collides with the health route {}",
                crate::startup::HEALTH_PATH
            )));
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let base_path = std::env::current_dir()?;

    // Check if we're already in exposition-service directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("exposition-service") {
        base_path.join("config")
    } else {
        base_path.join("exposition-service").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Settings::from_config(settings)
}
