use thiserror::Error;

/// Returned when a region code is not one of the supported regions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid region")]
pub struct InvalidRegionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidRegion(#[from] InvalidRegionError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_region_message_is_bare() {
        assert_eq!(InvalidRegionError.to_string(), "Invalid region");
    }

    #[test]
    fn invalid_region_converts_transparently() {
        let err: AppError = InvalidRegionError.into();
        assert!(matches!(err, AppError::InvalidRegion(InvalidRegionError)));
        assert_eq!(err.to_string(), "Invalid region");
    }

    #[test]
    fn config_error_is_prefixed() {
        let err = AppError::ConfigError("RIOT_API_KEY missing".to_string());
        assert_eq!(err.to_string(), "Configuration error: RIOT_API_KEY missing");
    }
}
