// Configuration module
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of HTTP worker threads (0 = one per CPU core)
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file. Parent directories are created on startup.
    #[serde(default = "default_database_path")]
    pub path: String,
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// How long a login session stays valid (default: 24 hours)
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,

    /// How often expired sessions are swept from memory (default: 600s = 10 minutes)
    #[serde(default = "default_purge_interval")]
    pub purge_interval_seconds: u64,

    /// Mark the session cookie Secure. Set true when serving over HTTPS.
    #[serde(default)]
    pub cookie_secure: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file_path")]
    pub file_path: String,
    #[serde(default = "default_true")]
    pub log_to_console: bool,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
            purge_interval_seconds: default_purge_interval(),
            cookie_secure: false,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: default_log_file_path(),
            log_to_console: default_true(),
            format: default_log_format(),
        }
    }
}

impl SessionSettings {
    /// Session lifetime as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_hours * 3600)
    }

    /// Sweep interval as a `Duration`.
    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_seconds)
    }
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    0
}

fn default_database_path() -> String {
    "data/lineup.db".to_string()
}

fn default_ttl_hours() -> u64 {
    24
}

fn default_purge_interval() -> u64 {
    600 // 10 minutes
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_path() -> String {
    "data/logs/lineup.log".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        let mut config: ServerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))?;

        // Override with environment variables if present
        config.apply_env_overrides()?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to built-in defaults
    /// when the file does not exist. Environment overrides apply either way.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            return Self::from_file(path);
        }

        let mut config = ServerConfig::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - LINEUP_HOST: Override server.host
    /// - LINEUP_PORT: Override server.port
    /// - LINEUP_DATABASE_PATH: Override database.path
    /// - LINEUP_LOG_LEVEL: Override logging.level
    /// - LINEUP_LOG_FILE_PATH: Override logging.file_path
    /// - LINEUP_LOG_TO_CONSOLE: Override logging.log_to_console
    ///
    /// Environment variables take precedence over config.toml values
    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        use std::env;

        if let Ok(host) = env::var("LINEUP_HOST") {
            self.server.host = host;
        }

        if let Ok(port_str) = env::var("LINEUP_PORT") {
            self.server.port = port_str
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid LINEUP_PORT value: {}", port_str))?;
        }

        if let Ok(path) = env::var("LINEUP_DATABASE_PATH") {
            self.database.path = path;
        }

        if let Ok(level) = env::var("LINEUP_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(path) = env::var("LINEUP_LOG_FILE_PATH") {
            self.logging.file_path = path;
        }

        if let Ok(val) = env::var("LINEUP_LOG_TO_CONSOLE") {
            self.logging.log_to_console =
                val.to_lowercase() == "true" || val == "1" || val.to_lowercase() == "yes";
        }

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.host.is_empty() {
            return Err(anyhow::anyhow!("Server host cannot be empty"));
        }

        // Validate port range
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.database.path.is_empty() {
            return Err(anyhow::anyhow!("Database path cannot be empty"));
        }

        if self.session.ttl_hours == 0 {
            return Err(anyhow::anyhow!("Session ttl_hours cannot be 0"));
        }

        if self.session.purge_interval_seconds == 0 {
            return Err(anyhow::anyhow!("Session purge_interval_seconds cannot be 0"));
        }

        // Validate log level
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ));
        }

        // Validate log format
        let valid_formats = ["compact", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_formats.join(", ")
            ));
        }

        Ok(())
    }

    /// Get default configuration (useful for testing)
    pub fn default() -> Self {
        ServerConfig {
            server: ServerSettings::default(),
            database: DatabaseSettings::default(),
            session: SessionSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
