use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Built-in fallback session secret. Fine for local development,
/// insecure anywhere else; the server warns loudly when it is in use.
pub const DEFAULT_SECRET_KEY: &str = "devkey-jan-membership";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Secret used to sign session cookies
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
}

fn default_port() -> u16 {
    5000
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            secret_key: default_secret_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// SQLite database file
    #[serde(default = "default_database")]
    pub database: String,
    /// Directory for stored uploads
    #[serde(default = "default_uploads")]
    pub uploads: String,
    /// Directory for log files (when file logging is enabled)
    #[serde(default = "default_logs")]
    pub logs: String,
}

fn default_database() -> String {
    "jan_members.db".to_string()
}

fn default_uploads() -> String {
    "uploads".to_string()
}

fn default_logs() -> String {
    "logs".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            uploads: default_uploads(),
            logs: default_logs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file instead of stderr
    #[serde(default)]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: false,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so the portal runs without any
        // config file
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // membership.toml in the working directory (optional)
        let local_config = PathBuf::from("membership.toml");
        if local_config.exists() {
            builder = builder.add_source(config::File::from(local_config));
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables with MEMBERSHIP_ prefix, e.g.
        // MEMBERSHIP__SERVER__SECRET_KEY, MEMBERSHIP__SERVER__PORT
        builder = builder.add_source(
            config::Environment::with_prefix("MEMBERSHIP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Whether the insecure built-in secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.server.secret_key == DEFAULT_SECRET_KEY
    }

    /// Get absolute path to the database file
    pub fn database_path(&self) -> PathBuf {
        absolutize(&self.paths.database)
    }

    /// Get absolute path to the uploads directory
    pub fn uploads_path(&self) -> PathBuf {
        absolutize(&self.paths.uploads)
    }

    /// Get absolute path to the logs directory
    pub fn logs_path(&self) -> PathBuf {
        absolutize(&self.paths.logs)
    }
}

fn absolutize(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}
