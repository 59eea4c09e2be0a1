use thiserror::Error;

/// Failures that can stop a service from starting or serving.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Telemetry error: {0}")]
    TelemetryError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<opentelemetry::trace::TraceError> for AppError {
    fn from(err: opentelemetry::trace::TraceError) -> Self {
        AppError::TelemetryError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: AppError = config::ConfigError::NotFound("server.port".to_string()).into();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let err: AppError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use").into();
        assert!(matches!(err, AppError::IoError(_)));
        assert_eq!(err.to_string(), "I/O error: address in use");
    }
}
