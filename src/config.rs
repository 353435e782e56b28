use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_FRONTEND_DIST: &str = "workspace/frontend/dist";

/// Server settings after every source has been applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub bind_address: String,
    pub frontend_dist: PathBuf,
}

/// Values given on the command line; they win over files and environment.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub frontend_dist: Option<String>,
}

impl AppConfig {
    /// Layers defaults, the optional `<config_path>.toml`, `CRMPRO_*` variables and overrides.
    pub fn load(config_path: &str, overrides: ConfigOverrides) -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("frontend_dist", DEFAULT_FRONTEND_DIST)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("CRMPRO"))
            .set_override_option("bind_address", overrides.bind_address)?
            .set_override_option("frontend_dist", overrides.frontend_dist)?
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    pub fn index_html(&self) -> PathBuf {
        self.frontend_dist.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            bind_address: Some("127.0.0.1:9999".to_string()),
            frontend_dist: Some("/srv/crmpro".to_string()),
        };
        let config = AppConfig::load("no-such-config-file", overrides).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9999");
        assert_eq!(config.frontend_dist, PathBuf::from("/srv/crmpro"));
        assert_eq!(config.index_html(), PathBuf::from("/srv/crmpro/index.html"));
    }

    #[test]
    fn test_file_values_are_read() {
        let dir = std::env::temp_dir().join(format!("crmpro-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("crmpro.toml"), "bind_address = \"127.0.0.1:4000\"\n").unwrap();

        let path = dir.join("crmpro");
        let overrides = ConfigOverrides {
            frontend_dist: Some("dist".to_string()),
            ..Default::default()
        };
        let config = AppConfig::load(path.to_str().unwrap(), overrides).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:4000");
        assert_eq!(config.frontend_dist, PathBuf::from("dist"));

        fs::remove_dir_all(&dir).ok();
    }
}
