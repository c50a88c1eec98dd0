//! Constants shared across the crate.
//!
//! The `CONFSTORE_*` variables take precedence. The node-config names
//! (`NODE_CONFIG_ENV`, `NODE_CONFIG_DIR`, `NODE_APP_INSTANCE`) are read as
//! fallbacks so existing deployments keep working.

/// Selects the active environment name.
pub const ENV_VAR_ENVIRONMENT: &str = "CONFSTORE_ENV";

/// Selects the base configuration directory.
pub const ENV_VAR_CONFIG_DIR: &str = "CONFSTORE_CONFIG_DIR";

/// Selects the instance suffix for multi-instance deployments.
pub const ENV_VAR_INSTANCE: &str = "CONFSTORE_INSTANCE";

/// Fallback for [`ENV_VAR_ENVIRONMENT`].
pub const LEGACY_ENV_VAR_ENVIRONMENT: &str = "NODE_CONFIG_ENV";

/// Fallback for [`ENV_VAR_CONFIG_DIR`].
pub const LEGACY_ENV_VAR_CONFIG_DIR: &str = "NODE_CONFIG_DIR";

/// Fallback for [`ENV_VAR_INSTANCE`].
pub const LEGACY_ENV_VAR_INSTANCE: &str = "NODE_APP_INSTANCE";

/// Environment name used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// Name of the config directory under the working directory.
pub const DEFAULT_CONFIG_DIR_NAME: &str = "config";

/// Instance value that means "no instance".
pub const NO_INSTANCE: &str = "0";

/// Extension of config files.
pub const CONFIG_FILE_EXTENSION: &str = "json";
