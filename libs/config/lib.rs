pub mod config;
pub mod load_config;

pub use config::{Config, ServerConfig, StorageConfig};
pub use load_config::{load, save};
