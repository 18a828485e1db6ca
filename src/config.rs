use crate::error::AppError;
use crate::region::DEFAULT_REGION;
use std::env;

pub const API_KEY_VAR: &str = "RIOT_API_KEY";
pub const REGION_VAR: &str = "RIOT_REGION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub region: String,
}

impl Config {
    /// Reads the process environment after loading `.env`. A key passed on
    /// the command line takes the place of `RIOT_API_KEY`.
    pub fn from_env(api_key: Option<String>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| match name {
            API_KEY_VAR if api_key.is_some() => api_key.clone(),
            _ => env::var(name).ok(),
        })
    }

    /// Builds the config from any variable source. The region is not checked
    /// here; [`crate::ApiEndpointBuilder::new`] rejects unknown codes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or_else(|| {
            AppError::ConfigError(format!(
                "{} not found in environment or .env file",
                API_KEY_VAR
            ))
        })?;

        let region = lookup(REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Config { api_key, region })
    }
}
