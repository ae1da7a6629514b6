//! Client configuration.

use std::path::Path;
use std::time::Duration;

use calc_bootstrap::config::duration_str;
use calc_bootstrap::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `CALCULATOR_CLI__ADDR`.
pub const ENV_PREFIX: &str = "CALCULATOR_CLI__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server address. A bare `host:port` is treated as plaintext `http://`.
    pub addr: String,

    /// Budget for the whole interactive session.
    #[serde(with = "duration_str")]
    pub session_timeout: Duration,

    #[serde(with = "duration_str")]
    pub connect_timeout: Duration,

    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            addr: "http://localhost:8081".to_owned(),
            session_timeout: Duration::from_secs(60 * 60),
            connect_timeout: Duration::from_secs(10),
            logging: LoggingConfig::with_level("warn"),
        }
    }
}

impl ClientConfig {
    /// Defaults, then the YAML file at `path` (if any), then `CALCULATOR_CLI__*`.
    ///
    /// # Errors
    /// Returns an error if the file is missing or a layer is malformed.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        calc_bootstrap::load_layered(&Self::default(), path, ENV_PREFIX)
    }

    /// `addr` with a scheme.
    pub fn endpoint_uri(&self) -> String {
        let addr = self.addr.trim();
        if addr.contains("://") {
            addr.to_owned()
        } else {
            format!("http://{addr}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        temp_env::with_vars_unset(
            ["CALCULATOR_CLI__ADDR", "CALCULATOR_CLI__SESSION_TIMEOUT"],
            || {
                let cfg = ClientConfig::load(None).unwrap();
                assert_eq!(cfg.endpoint_uri(), "http://localhost:8081");
                assert_eq!(cfg.session_timeout, Duration::from_secs(3600));
                assert_eq!(cfg.connect_timeout, Duration::from_secs(10));
                assert_eq!(cfg.logging.level, "warn");
            },
        );
    }

    #[test]
    fn bare_host_port_gets_http_scheme() {
        let cfg = ClientConfig {
            addr: "calc.internal:9000".to_owned(),
            ..ClientConfig::default()
        };
        assert_eq!(cfg.endpoint_uri(), "http://calc.internal:9000");
    }

    #[test]
    fn yaml_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cli.yaml");
        std::fs::write(&path, "addr: \"127.0.0.1:7000\"\nsession_timeout: 5m\n").unwrap();

        temp_env::with_var("CALCULATOR_CLI__SESSION_TIMEOUT", Some("90s"), || {
            let cfg = ClientConfig::load(Some(&path)).unwrap();
            assert_eq!(cfg.endpoint_uri(), "http://127.0.0.1:7000");
            assert_eq!(cfg.session_timeout, Duration::from_secs(90));
        });
    }
}
