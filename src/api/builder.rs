use crate::error::InvalidRegionError;
use crate::region::{RegionRegistry, DEFAULT_REGION};
use serde::Serialize;

use super::endpoints::{bind_region, V1_1_URL_TEMPLATE, V2_1_URL_TEMPLATE};

/// Base URLs for one API key and region.
///
/// A builder can only be obtained through a validated region, so its region
/// is always one of the supported codes. It has no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiEndpointBuilder {
    #[serde(skip)]
    api_key: String,
    region: String,
    url_v1: String,
    url_v2: String,
}

impl ApiEndpointBuilder {
    /// Validates `region` and derives both base URLs from it.
    ///
    /// The API key is stored as given. The region is kept in its original
    /// case and lowercased only inside the URLs.
    pub fn new(
        api_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, InvalidRegionError> {
        let region = region.into();
        if !RegionRegistry::is_valid_region(&region) {
            return Err(InvalidRegionError);
        }

        Ok(Self::derive(api_key.into(), region))
    }

    /// Same as `new(api_key, "NA")`.
    pub fn with_default_region(api_key: impl Into<String>) -> Self {
        Self::derive(api_key.into(), DEFAULT_REGION.to_string())
    }

    /// Returns a builder for the same key in another region.
    pub fn for_region(&self, region: impl Into<String>) -> Result<Self, InvalidRegionError> {
        Self::new(self.api_key.clone(), region)
    }

    fn derive(api_key: String, region: String) -> Self {
        let url_v1 = bind_region(V1_1_URL_TEMPLATE, &region);
        let url_v2 = bind_region(V2_1_URL_TEMPLATE, &region);

        ApiEndpointBuilder {
            api_key,
            region,
            url_v1,
            url_v2,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn url_v1(&self) -> &str {
        &self.url_v1
    }

    pub fn url_v2(&self) -> &str {
        &self.url_v2
    }
}
