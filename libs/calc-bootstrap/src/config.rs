//! Layered configuration loading.
//!
//! Layers, lowest priority first:
//! 1) compiled-in defaults -> 2) YAML file (if provided) -> 3) environment
//!    variables with a binary-specific prefix, `__` separating nested keys.
//!
//! CLI overrides are applied by each binary on the returned value.

use std::path::Path;

use anyhow::{bail, Context};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};

/// Load `T` from defaults, an optional YAML file and prefixed env vars.
///
/// # Errors
/// Returns an error if `path` is given but is not a file, or if the merged
/// layers cannot be deserialized into `T`.
pub fn load_layered<T>(defaults: &T, path: Option<&Path>, env_prefix: &str) -> anyhow::Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut figment = Figment::new().merge(Serialized::defaults(defaults));

    if let Some(path) = path {
        if !path.is_file() {
            bail!("config file does not exist: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(env_prefix).split("__"))
        .extract()
        .with_context(|| match path {
            Some(p) => format!("invalid configuration (file: {})", p.display()),
            None => "invalid configuration".to_owned(),
        })
}

/// Serde adapter for `Duration` fields written as humantime strings
/// (`"10s"`, `"60m"`, `"1h 30m"`).
pub mod duration_str {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*value).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
    }
}
