mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`), then applies
/// environment overrides and validates the result.
///
/// A missing `config.yaml` is fine when `CONFIG_PATH` is unset; the gateway
/// can be configured from the environment alone.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();

    let mut config = match explicit_path {
        Some(path) => load_from_path(&path).await?,
        None => match load_from_path(DEFAULT_CONFIG_PATH).await {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                Config::default()
            }
            Err(e) => return Err(e),
        },
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

/// Reads and parses a YAML config file without validating it.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies `GENERATE_ENDPOINT`, `GENERATE_ENDPOINT_CHAT`, `GENERATE_TIMEOUT_SECS`,
/// `HOST` and `PORT` on top of the file configuration.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("GENERATE_ENDPOINT") {
        config.backends.generate_endpoint = Some(url);
    }
    if let Some(url) = lookup("GENERATE_ENDPOINT_CHAT") {
        config.backends.generate_endpoint_chat = Some(url);
    }
    if let Some(raw) = lookup("GENERATE_TIMEOUT_SECS") {
        config.backends.timeout_secs = raw.trim().parse().map_err(|_| {
            Error::config(format!("GENERATE_TIMEOUT_SECS must be an integer, got '{}'", raw))
        })?;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(raw) = lookup("PORT") {
        config.server.port = raw
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("PORT must be a valid port number, got '{}'", raw)))?;
    }
    Ok(())
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.backends.validate()
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<()> {
        validate_endpoint("GENERATE_ENDPOINT", self.generate_endpoint.as_deref())?;
        validate_endpoint("GENERATE_ENDPOINT_CHAT", self.generate_endpoint_chat.as_deref())?;
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

fn validate_endpoint(name: &str, value: Option<&str>) -> Result<()> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::config(format!("{} is not configured", name)))?;

    let url = reqwest::Url::parse(raw)
        .map_err(|e| Error::config(format!("{} is not a valid URL '{}': {}", name, raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::config(format!(
            "{} must use http or https, got '{}'",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn configured() -> Config {
        let mut config = Config::default();
        config.backends.generate_endpoint = Some("http://localhost:9000/generate".to_string());
        config.backends.generate_endpoint_chat = Some("http://localhost:9000/chat".to_string());
        config
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.backends.timeout_secs, 30);
        assert!(config.backends.generate_endpoint.is_none());
        assert!(config.backends.max_seq_len.is_none());
    }

    #[test]
    fn test_env_overrides_endpoints() {
        let mut config = Config::default();
        let env = env_of(&[
            ("GENERATE_ENDPOINT", "http://gen.internal/generate"),
            ("GENERATE_ENDPOINT_CHAT", "http://chat.internal/chat"),
            ("GENERATE_TIMEOUT_SECS", "12"),
            ("PORT", "9090"),
        ]);

        apply_env_overrides(&mut config, |key| env.get(key).cloned()).unwrap();

        assert_eq!(
            config.backends.generate_endpoint.as_deref(),
            Some("http://gen.internal/generate")
        );
        assert_eq!(
            config.backends.generate_endpoint_chat.as_deref(),
            Some("http://chat.internal/chat")
        );
        assert_eq!(config.backends.timeout_secs, 12);
        assert_eq!(config.server.port, 9090);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_override_rejects_bad_port() {
        let mut config = Config::default();
        let env = env_of(&[("PORT", "eighty")]);
        let result = apply_env_overrides(&mut config, |key| env.get(key).cloned());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_requires_both_endpoints() {
        let mut config = configured();
        config.backends.generate_endpoint_chat = None;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GENERATE_ENDPOINT_CHAT"));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut config = configured();
        config.backends.generate_endpoint = Some("ftp://localhost/generate".to_string());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = configured();
        config.backends.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_load_from_path_with_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        tokio::fs::write(
            &path,
            r#"
backends:
  generate_endpoint: "http://localhost:9000/generate"
  generate_endpoint_chat: "http://localhost:9000/chat"
  max_seq_len: 512
"#,
        )
        .await
        .unwrap();

        let config = load_from_path(&path).await.unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backends.max_seq_len, Some(512));
        assert_eq!(config.backends.timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_path(dir.path().join("absent.yaml")).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
