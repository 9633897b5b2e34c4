//! Application configuration.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup and immutable afterwards.
//!
//! - [`cors`]: allowed origins for cross-origin requests
//! - [`provider`]: identity provider base URL and API keys
//! - [`rate_limit`]: per-client request budget

pub mod cors;
pub mod provider;
pub mod rate_limit;
