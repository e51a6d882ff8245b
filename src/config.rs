//! Configuration for the blog server and snapshot builder.
//!
//! Settings come from an optional `retroblog.toml` in the working directory,
//! with environment variables taking precedence over the file. Every value
//! has a default so the binary runs with no configuration at all. Admin
//! credentials are injected here rather than compiled in.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "retroblog.toml";

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Listening port. Overridden by the `PORT` environment variable.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the SQLite database file.
    #[serde(default = "default_database")]
    pub database: PathBuf,
    /// Admin panel credentials.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Asset trees copied verbatim into the snapshot output.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Destination directory for the static snapshot.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

/// Credentials for the admin panel login.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_port() -> u16 {
    5000
}

fn default_database() -> PathBuf {
    PathBuf::from("blog.db")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "changeme".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            database: default_database(),
            admin: AdminConfig::default(),
            static_dir: default_static_dir(),
            assets_dir: default_assets_dir(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl Config {
    /// Load configuration: `retroblog.toml` if present, then environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if an environment override has an invalid value (e.g. a non-numeric
    /// `PORT`).
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::load_from(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from the specified TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply environment variable overrides on top of the loaded values.
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(port) = env::var("PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {port}"))?;
        }
        if let Ok(db) = env::var("RETROBLOG_DB") {
            self.database = PathBuf::from(db);
        }
        if let Ok(username) = env::var("RETROBLOG_ADMIN_USER") {
            self.admin.username = username;
        }
        if let Ok(password) = env::var("RETROBLOG_ADMIN_PASSWORD") {
            self.admin.password = password;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_apply_without_config_file() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.database, PathBuf::from("blog.db"));
        assert_eq!(config.admin.username, "admin");
    }

    #[test]
    #[serial]
    fn env_overrides_port_and_credentials() {
        env::set_var("PORT", "8080");
        env::set_var("RETROBLOG_ADMIN_PASSWORD", "hunter2");

        let mut config = Config::default();
        config.apply_env().unwrap();

        env::remove_var("PORT");
        env::remove_var("RETROBLOG_ADMIN_PASSWORD");

        assert_eq!(config.port, 8080);
        assert_eq!(config.admin.password, "hunter2");
    }

    #[test]
    #[serial]
    fn invalid_port_is_rejected() {
        env::set_var("PORT", "not-a-port");
        let result = Config::default().apply_env();
        env::remove_var("PORT");
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn toml_file_overrides_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("retroblog.toml");
        fs::write(&path, "port = 9000\n\n[admin]\nusername = \"editor\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.admin.username, "editor");
        // Unset values keep their defaults.
        assert_eq!(config.admin.password, "changeme");
        assert_eq!(config.database, PathBuf::from("blog.db"));
    }
}
