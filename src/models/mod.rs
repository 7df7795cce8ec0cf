pub mod config;
pub mod recent;
pub mod scheme;

pub use config::{AppConfig, CONFIG_ENV_VAR};
pub use recent::{RecentColours, RECENT_CAPACITY, RECENT_COLOURS_KEY};
pub use scheme::ColourScheme;
