//! Environment settings used to locate the default config file.
//!
//! The store never reads process environment itself. Callers build a
//! [`ConfigEnv`] (usually via [`ConfigEnv::from_env`]) and hand it to the
//! store at construction.

use std::path::PathBuf;

use crate::consts::{
  CONFIG_FILE_EXTENSION, DEFAULT_CONFIG_DIR_NAME, DEFAULT_ENVIRONMENT, ENV_VAR_CONFIG_DIR, ENV_VAR_ENVIRONMENT,
  ENV_VAR_INSTANCE, LEGACY_ENV_VAR_CONFIG_DIR, LEGACY_ENV_VAR_ENVIRONMENT, LEGACY_ENV_VAR_INSTANCE, NO_INSTANCE,
};

/// Settings that determine where the default config file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEnv {
  /// Active environment name, e.g. `production`.
  pub environment: String,
  /// Directory holding the per-environment config files.
  pub config_dir: PathBuf,
  /// Instance identifier for multi-instance deployments.
  pub instance: Option<String>,
}

impl Default for ConfigEnv {
  /// `default` environment, `{cwd}/config`, no instance.
  fn default() -> Self {
    let cwd = std::env::current_dir().unwrap_or_default();
    Self {
      environment: DEFAULT_ENVIRONMENT.to_string(),
      config_dir: cwd.join(DEFAULT_CONFIG_DIR_NAME),
      instance: None,
    }
  }
}

impl ConfigEnv {
  /// Reads the settings from process environment variables.
  ///
  /// Each `CONFSTORE_*` variable falls back to its node-config name, then to
  /// the default. Empty and whitespace-only values count as unset.
  pub fn from_env() -> Self {
    let mut env = Self::default();
    if let Some(environment) = first_env_var(ENV_VAR_ENVIRONMENT, LEGACY_ENV_VAR_ENVIRONMENT) {
      env.environment = environment;
    }
    if let Some(dir) = first_env_var(ENV_VAR_CONFIG_DIR, LEGACY_ENV_VAR_CONFIG_DIR) {
      env.config_dir = PathBuf::from(dir);
    }
    env.instance = normalize_instance(first_env_var(ENV_VAR_INSTANCE, LEGACY_ENV_VAR_INSTANCE));
    env
  }

  pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
    self.environment = environment.into();
    self
  }

  pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
    self.config_dir = config_dir.into();
    self
  }

  /// Sets the instance. An instance of `"0"` counts as no instance.
  pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
    self.instance = normalize_instance(Some(instance.into()));
    self
  }

  /// `-{instance}` when an instance is set, else empty.
  pub fn instance_suffix(&self) -> String {
    match &self.instance {
      Some(instance) => format!("-{instance}"),
      None => String::new(),
    }
  }

  /// Path of the config file loaded when no source is given:
  /// `{config_dir}/{environment}{instance_suffix}.json`.
  pub fn default_path(&self) -> PathBuf {
    self.config_dir.join(format!(
      "{}{}.{}",
      self.environment,
      self.instance_suffix(),
      CONFIG_FILE_EXTENSION
    ))
  }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
fn env_var_or_none(key: &str) -> Option<String> {
  std::env::var(key).ok().and_then(|value| {
    let trimmed = value.trim();
    if trimmed.is_empty() {
      None
    } else {
      Some(trimmed.to_string())
    }
  })
}

fn first_env_var(key: &str, fallback: &str) -> Option<String> {
  env_var_or_none(key).or_else(|| env_var_or_none(fallback))
}

fn normalize_instance(instance: Option<String>) -> Option<String> {
  instance.filter(|value| !value.is_empty() && value != NO_INSTANCE)
}
