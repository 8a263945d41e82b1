pub mod api_observability;
pub mod app_config;
pub mod cluster;

// Re-export main types for easier imports
pub use api_observability::{ApiConfig, LogFormat, ObservabilityConfig};
pub use app_config::AppConfig;
pub use cluster::{KeySpaceConfig, NodeConfig};
