//! Client configuration: TOML file plus environment overrides.

mod loader;
mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use types::{ApiConfig, Config, PaginationConfig, StorageConfig};
