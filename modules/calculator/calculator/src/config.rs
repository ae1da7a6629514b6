//! Server configuration.

use std::path::Path;

use calc_bootstrap::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `CALCULATOR__LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host:port` to listen on. Port `0` picks an ephemeral port.
    pub listen_addr: String,
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8081".to_owned(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults, then the YAML file at `path` (if any), then `CALCULATOR__*`.
    ///
    /// # Errors
    /// Returns an error if the file is missing or a layer is malformed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        calc_bootstrap::load_layered(&Self::default(), path, ENV_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_bootstrap::LogFormat;

    #[test]
    fn defaults_listen_on_8081() {
        temp_env::with_vars_unset(["CALCULATOR__LISTEN_ADDR", "CALCULATOR__LOGGING__LEVEL"], || {
            let cfg = ServerConfig::load(None).unwrap();
            assert_eq!(cfg.listen_addr, "0.0.0.0:8081");
            assert_eq!(cfg.logging.level, "info");
        });
    }

    #[test]
    fn yaml_and_env_layers_apply() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.yaml");
        std::fs::write(
            &path,
            "listen_addr: \"127.0.0.1:9000\"\nlogging:\n  level: debug\n  format: json\n",
        )
        .unwrap();

        temp_env::with_var("CALCULATOR__LISTEN_ADDR", Some("127.0.0.1:9100"), || {
            let cfg = ServerConfig::load(Some(&path)).unwrap();
            assert_eq!(cfg.listen_addr, "127.0.0.1:9100");
            assert_eq!(cfg.logging.level, "debug");
            assert_eq!(cfg.logging.format, LogFormat::Json);
        });
    }
}
