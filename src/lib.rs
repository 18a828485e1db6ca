//! Base URL construction for the League of Legends statistics API.
//!
//! ```
//! use league_endpoints::ApiEndpointBuilder;
//!
//! let api = ApiEndpointBuilder::new("KEY123", "EUW").unwrap();
//! assert_eq!(api.url_v1(), "http://prod.api.pvp.net/api/lol/euw/v1.1");
//! assert_eq!(api.url_v2(), "http://prod.api.pvp.net/api/euw/v2.1");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod region;

pub use api::builder::ApiEndpointBuilder;
pub use error::{AppError, InvalidRegionError};
pub use region::RegionRegistry;
