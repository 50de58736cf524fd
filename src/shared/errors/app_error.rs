use thiserror::Error;

/// Every failure the crate reports; providers absorb most of them
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Mapping error: {0}")]
    MappingError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Feed error: {0}")]
    FeedError(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                404 => AppError::NotFound("External resource not found".to_string()),
                401 | 403 => {
                    AppError::Unauthorized("Not authorized to access external service".to_string())
                }
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound(err.to_string()),
            _ => AppError::IoError(err.to_string()),
        }
    }
}

impl From<feed_rs::parser::ParseFeedError> for AppError {
    fn from(err: feed_rs::parser::ParseFeedError) -> Self {
        AppError::FeedError(err.to_string())
    }
}

impl From<genpdf::error::Error> for AppError {
    fn from(err: genpdf::error::Error) -> Self {
        AppError::RenderError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Turns a failed fetch into an empty value at a provider boundary.
///
/// Providers return typed errors internally; callers of the capability
/// traits only ever see empty or absent results.
pub trait ResultExt<T> {
    fn or_degrade(self, context: &str) -> T
    where
        T: Default;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn or_degrade(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                crate::shared::utils::logger::LogContext::degraded(context, &err);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_degrade_passes_values_through() {
        let ok: AppResult<Vec<u32>> = Ok(vec![1, 2]);
        assert_eq!(ok.or_degrade("test"), vec![1, 2]);
    }

    #[test]
    fn test_or_degrade_returns_default_on_error() {
        let failed: AppResult<Vec<u32>> = Err(AppError::ApiError("boom".to_string()));
        assert!(failed.or_degrade("test").is_empty());

        let absent: AppResult<Option<String>> = Err(AppError::NotFound("gone".to_string()));
        assert_eq!(absent.or_degrade("test"), None);
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
