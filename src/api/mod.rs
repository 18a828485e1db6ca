pub mod builder;
pub mod endpoints;
