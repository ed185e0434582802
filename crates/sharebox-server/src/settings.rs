//! Runtime server configuration.
//!
//! Layered from an optional TOML file and `SHAREBOX_*` environment variables
//! (e.g. `SHAREBOX_PORT=8080`). Every field has a default, so the server runs
//! with no configuration at all.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::Context as _;
use chrono::TimeDelta;
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use sharebox_retention::{DEFAULT_MAX_AGE_DAYS, RetentionPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  /// Shares older than this are removed by the retention sweeper.
  pub retention_days:       u32,
  pub sweep_interval_hours: u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "0.0.0.0".to_string(),
      port:                 21108,
      store_path:           PathBuf::from("shares.db"),
      retention_days:       DEFAULT_MAX_AGE_DAYS as u32,
      sweep_interval_hours: 24,
    }
  }
}

impl ServerConfig {
  /// Load from `path` (if it exists) overlaid with `SHAREBOX_*` variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix("SHAREBOX")),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
    let cfg: ServerConfig = builder
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;

    if cfg.sweep_interval_hours == 0 {
      anyhow::bail!("sweep_interval_hours must be at least 1");
    }
    if cfg.sweep_interval_secs().is_none() {
      anyhow::bail!(
        "sweep_interval_hours is too large: {}",
        cfg.sweep_interval_hours
      );
    }
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The store path with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }

  fn sweep_interval_secs(&self) -> Option<u64> {
    self.sweep_interval_hours.checked_mul(60 * 60)
  }

  pub fn retention_policy(&self) -> RetentionPolicy {
    RetentionPolicy {
      max_age:  TimeDelta::days(i64::from(self.retention_days)),
      interval: Duration::from_secs(self.sweep_interval_secs().unwrap_or(u64::MAX)),
    }
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use config::FileFormat;

  use super::*;

  fn from_toml(toml: &str) -> anyhow::Result<ServerConfig> {
    ServerConfig::from_builder(
      Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
    )
  }

  #[test]
  fn empty_config_uses_defaults() {
    let cfg = from_toml("").unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.address(), "0.0.0.0:21108");
    assert_eq!(cfg.store_path, PathBuf::from("shares.db"));
  }

  #[test]
  fn default_retention_is_180_days_swept_daily() {
    let policy = ServerConfig::default().retention_policy();
    assert_eq!(policy, RetentionPolicy::default());
    assert_eq!(policy.max_age, TimeDelta::days(180));
  }

  #[test]
  fn file_values_override_defaults() {
    let cfg = from_toml(
      r#"
        port = 8080
        store_path = "/var/lib/sharebox/shares.db"
        retention_days = 30
        sweep_interval_hours = 6
      "#,
    )
    .unwrap();

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/sharebox/shares.db"));

    let policy = cfg.retention_policy();
    assert_eq!(policy.max_age, TimeDelta::days(30));
    assert_eq!(policy.interval, Duration::from_secs(6 * 3600));
  }

  #[test]
  fn zero_sweep_interval_is_rejected() {
    assert!(from_toml("sweep_interval_hours = 0").is_err());
  }

  #[test]
  fn overflowing_sweep_interval_is_rejected() {
    let toml = format!("sweep_interval_hours = {}", u64::MAX / 2);
    let err = from_toml(&toml).unwrap_err();
    assert!(err.to_string().contains("too large"), "{err}");
  }

  #[test]
  fn relative_store_path_is_left_alone() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.resolved_store_path(), PathBuf::from("shares.db"));
  }
}
