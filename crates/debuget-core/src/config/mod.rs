//! Configuration system for debuget.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod debuget_config;
pub mod defaults;
pub mod observability_config;
pub mod theme_config;

pub use debuget_config::DebugetConfig;
pub use observability_config::ObservabilityConfig;
pub use theme_config::ThemeConfig;
