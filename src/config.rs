use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::clients::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";
pub const DEFAULT_LOG_LEVEL: &str = "brainstorm_studio=info,tower_http=info";

/// Main configuration structure loaded from brainstorm.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Listener and asset settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

/// Remote generation service settings. The credential only ever comes from
/// the environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub model: String,
    pub api_base: String,
    #[serde(skip)]
    pub api_key: Option<String>,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub secret_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
        }
    }
}

/// Empty, templated, or sample values count as "not set".
pub(crate) fn is_placeholder(value: &str) -> bool {
    let t = value.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

/// Subscriber filter directives from `RUST_LOG`. Read on its own so the
/// subscriber can be installed before the rest of the config loads.
pub fn log_filter<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("RUST_LOG")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses BRAINSTORM_CONFIG environment variable or defaults to "brainstorm.toml"
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Same as [`Config::load`] with an explicit TOML path taking precedence.
    pub fn load_from(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        Self::load_env_file();

        let config_path = config_path.unwrap_or_else(|| {
            std::env::var("BRAINSTORM_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("brainstorm.toml"))
        });

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            Self::from_toml(&content)?
        } else {
            tracing::warn!(
                "Config file {} not found, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load BRAINSTORM_ENV_FILE if set, otherwise ./.env. Variables already in
    /// the process environment win, so calling this twice is harmless.
    pub fn load_env_file() {
        if let Ok(env_path) = std::env::var("BRAINSTORM_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::dotenv();
        }
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides (env-first). `lookup` is injectable so the
    /// precedence rules can be tested without touching the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.gemini.api_key = lookup("GEMINI_API_KEY").filter(|k| !is_placeholder(k));
        if let Some(model) = lookup("GEMINI_MODEL").filter(|m| !m.trim().is_empty()) {
            self.gemini.model = model;
        }
        if let Some(base) = lookup("GEMINI_API_BASE").filter(|b| !b.trim().is_empty()) {
            self.gemini.api_base = base;
        }

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(raw) = lookup("PORT") {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value '{}'", raw),
            }
        }
        if let Some(dir) = lookup("BRAINSTORM_STATIC_DIR").filter(|d| !d.trim().is_empty()) {
            self.server.static_dir = PathBuf::from(dir);
        }

        self.runtime.secret_key =
            lookup("FLASK_SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string());
    }

    /// Resolve `host:port` to the address to bind. Host names go through the
    /// system resolver; a host that does not resolve is an error.
    pub async fn resolve_bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let host = self.server.host.trim();
        let mut addrs = tokio::net::lookup_host((host, self.server.port))
            .await
            .map_err(|e| anyhow::anyhow!("Cannot resolve HOST '{}': {}", host, e))?;
        addrs
            .next()
            .ok_or_else(|| anyhow::anyhow!("HOST '{}' resolved to no addresses", host))
    }

    pub fn uses_default_secret(&self) -> bool {
        self.runtime.secret_key == DEFAULT_SECRET_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_documented_values() {
        let mut config = Config::default();
        config.apply_env(env(&[]));
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert!(config.gemini.api_key.is_none());
        assert!(config.uses_default_secret());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_warnings(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn log_filter_defaults_when_rust_log_unset_or_blank() {
        assert_eq!(log_filter(env(&[])), DEFAULT_LOG_LEVEL);
        assert_eq!(log_filter(env(&[("RUST_LOG", "  ")])), DEFAULT_LOG_LEVEL);
        assert_eq!(log_filter(env(&[("RUST_LOG", "debug")])), "debug");
    }

    #[test]
    fn missing_config_file_is_logged() {
        let logs = captured_warnings(|| {
            let config = Config::load_from(Some(PathBuf::from("/nonexistent/brainstorm.toml")));
            assert!(config.is_ok());
        });
        assert!(
            logs.contains("Config file /nonexistent/brainstorm.toml not found"),
            "{}",
            logs
        );
    }

    #[test]
    fn invalid_port_is_logged() {
        let logs = captured_warnings(|| {
            let mut config = Config::default();
            config.apply_env(env(&[("PORT", "notaport")]));
        });
        assert!(logs.contains("Ignoring invalid PORT value 'notaport'"), "{}", logs);
    }

    #[tokio::test]
    async fn default_host_binds_all_interfaces() {
        let config = Config::default();
        let addr = config.resolve_bind_addr().await.unwrap();
        assert_eq!(addr, "0.0.0.0:5000".parse().unwrap());
    }

    #[tokio::test]
    async fn host_names_resolve_instead_of_widening_the_bind() {
        let mut config = Config::default();
        config.apply_env(env(&[("HOST", "localhost"), ("PORT", "8081")]));
        let addr = config.resolve_bind_addr().await.unwrap();
        assert!(addr.ip().is_loopback(), "localhost bound to {}", addr);
        assert_eq!(addr.port(), 8081);
    }

    #[test]
    fn environment_overrides_toml() {
        let mut config = Config::from_toml(
            r#"
            [server]
            port = 8080

            [gemini]
            model = "gemini-2.0-flash"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");

        config.apply_env(env(&[
            ("PORT", "9000"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_API_KEY", "abc123"),
            ("FLASK_SECRET_KEY", "s3cret"),
        ]));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.api_key.as_deref(), Some("abc123"));
        assert!(!config.uses_default_secret());
    }

    #[test]
    fn placeholder_api_keys_leave_gemini_unconfigured() {
        for key in ["", "   ", "your-api-key-here", "${GEMINI_API_KEY}"] {
            let mut config = Config::default();
            config.apply_env(env(&[("GEMINI_API_KEY", key)]));
            assert!(config.gemini.api_key.is_none(), "key {:?} accepted", key);
        }
    }

    #[test]
    fn invalid_port_is_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[("PORT", "not-a-port")]));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn api_key_is_never_read_from_toml() {
        let config = Config::from_toml("[gemini]\napi_key = \"from-file\"\n").unwrap();
        assert!(config.gemini.api_key.is_none());
    }
}
