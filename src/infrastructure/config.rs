use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_api_prefix() -> String {
  String::new()
}

fn default_db_min_connections() -> u32 {
  0
}

fn default_db_connect_timeout() -> u64 {
  5
}

fn default_db_acquire_timeout() -> u64 {
  3
}

fn default_db_max_lifetime() -> u64 {
  90
}

fn default_token_ttl() -> u32 {
  300
}

fn default_log_level() -> String {
  "info".to_string()
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  pub security: SecurityConfig,
  #[serde(default)]
  pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Path every API route is mounted under, e.g. `/v1`; empty mounts at the root
  #[serde(default = "default_api_prefix")]
  pub api_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  pub url: String,
  pub max_connections: u32,
  #[serde(default = "default_db_min_connections")]
  pub min_connections: u32,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
  /// Connections older than this are closed and replaced
  #[serde(default = "default_db_max_lifetime")]
  pub max_lifetime_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
  /// HMAC secret for signing bearer tokens
  pub jwt_secret: String,
  #[serde(default = "default_token_ttl")]
  pub token_ttl_seconds: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
  /// EnvFilter directive used when `RUST_LOG` is unset
  #[serde(default = "default_log_level")]
  pub level: String,
  /// Emit JSON lines instead of human readable output
  #[serde(default)]
  pub json: bool,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
      json: false,
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Later sources override earlier ones:
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with the TEMPO_ prefix, double underscore
  ///    separated: `TEMPO_DATABASE__URL`, `TEMPO_SECURITY__JWT_SECRET`,
  ///    `TEMPO_SERVER__PORT=8080`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("TEMPO")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    let mut config: Config = config.try_deserialize()?;
    config.server.api_prefix = normalize_api_prefix(&config.server.api_prefix);
    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    if self.security.jwt_secret.trim().is_empty() {
      return Err(ConfigError::Message(
        "security.jwt_secret must not be empty".to_string(),
      ));
    }

    let prefix = &self.server.api_prefix;
    if !prefix.is_empty() && !prefix.starts_with('/') {
      return Err(ConfigError::Message(format!(
        "server.api_prefix must be empty or start with '/', got {:?}",
        prefix
      )));
    }

    Ok(())
  }
}

/// Strips whitespace and trailing slashes: `/` mounts at the root and
/// `/v1/` becomes `/v1`
pub fn normalize_api_prefix(prefix: &str) -> String {
  prefix.trim().trim_end_matches('/').to_string()
}
