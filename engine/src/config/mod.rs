mod config_content_provider;
mod config_manager;
mod config_serializer;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("Failed to read config file {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[display("Failed to write config file {path}: {source}")]
    Write { path: String, source: std::io::Error },
    #[display("Failed to parse config: {_0}")]
    Parse(serde_yaml_ng::Error),
    #[display("Failed to serialize config: {_0}")]
    Serialize(serde_yaml_ng::Error),
    #[display("Config validation error: {_0}")]
    Invalid(#[error(not(source))] String),
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
