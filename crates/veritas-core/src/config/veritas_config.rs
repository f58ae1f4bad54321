//! Top-level Veritas configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;
use super::policy::{PolicyRule, VerificationPolicy, ViolationAction};
use super::registry_config::RegistryConfig;
use crate::errors::ConfigError;

/// Top-level configuration: runtime settings plus the enforcement policy.
///
/// The same shape parses from the JSON policy file and from `veritas.toml`;
/// keys a file does not set keep their lower-layer values.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Explicit `--config` file
/// 3. Environment variables (`VERITAS_*`)
/// 4. Project files (`veritas.toml`, then `.veritas/config/verification.json`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VeritasConfig {
    /// Audit log directory; relative paths resolve against the project root.
    pub log_dir: Option<PathBuf>,
    /// Days of audit files kept by `prune`. Default: 5.
    pub retention_days: Option<u32>,
    pub registry: RegistryConfig,
    #[serde(flatten)]
    pub policy: VerificationPolicy,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub on_violation: Option<ViolationAction>,
    pub log_dir: Option<PathBuf>,
}

impl VeritasConfig {
    /// Load configuration with layered resolution rooted at `root`.
    ///
    /// Missing project files are not an error: the embedded default policy
    /// applies. A file that exists but does not parse is.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_env(root, cli_overrides, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with environment variables read through `env`.
    pub fn load_with_env(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut found_any = false;

        // Layer 4: project files, JSON policy first so TOML can override it.
        let policy_path = root.join(defaults::DEFAULT_POLICY_JSON_PATH);
        if policy_path.exists() {
            Self::merge_file(&mut config, &policy_path)?;
            found_any = true;
        }
        let toml_path = root.join(defaults::DEFAULT_PROJECT_TOML);
        if toml_path.exists() {
            Self::merge_file(&mut config, &toml_path)?;
            found_any = true;
        }

        // Layer 3: environment variables
        config.apply_env_overrides_from(env);

        // Layer 2: explicit config file. Must exist.
        if let Some(path) = cli_overrides.and_then(|c| c.config_path.as_ref()) {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            Self::merge_file(&mut config, path)?;
            found_any = true;
        }

        if !found_any {
            tracing::debug!(
                event = "policy_fallback",
                root = %root.display(),
                "no policy file found, using default policy"
            );
        }

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.registry.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "registry.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref url) = self.registry.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationFailed {
                    field: "registry.base_url".to_string(),
                    message: format!("must be an http(s) URL, got '{url}'"),
                });
            }
        }
        if self.retention_days == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "retention_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a file by extension (`.toml` or JSON) and merge it in.
    fn merge_file(config: &mut VeritasConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let is_toml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        let file_config: VeritasConfig = if is_toml {
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        };

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut VeritasConfig, other: &VeritasConfig) {
        if other.log_dir.is_some() {
            base.log_dir = other.log_dir.clone();
        }
        if other.retention_days.is_some() {
            base.retention_days = other.retention_days;
        }

        // Registry
        if other.registry.base_url.is_some() {
            base.registry.base_url = other.registry.base_url.clone();
        }
        if other.registry.database.is_some() {
            base.registry.database = other.registry.database.clone();
        }
        if other.registry.timeout_secs.is_some() {
            base.registry.timeout_secs = other.registry.timeout_secs;
        }
        if other.registry.cache_capacity.is_some() {
            base.registry.cache_capacity = other.registry.cache_capacity;
        }

        base.policy.merge(&other.policy);
    }

    /// Apply environment variable overrides read through `lookup`.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(defaults::ENV_ON_VIOLATION) {
            if let Some(action) = ViolationAction::parse_str(&val) {
                self.policy.set_action(PolicyRule::PmidCitations, action);
            }
        }
        if let Some(val) = lookup(defaults::ENV_LOG_DIR) {
            if !val.is_empty() {
                self.log_dir = Some(PathBuf::from(val));
            }
        }
        if let Some(val) = lookup(defaults::ENV_REGISTRY_URL) {
            if !val.is_empty() {
                self.registry.base_url = Some(val);
            }
        }
        if let Some(val) = lookup(defaults::ENV_REGISTRY_TIMEOUT_SECS) {
            if let Ok(v) = val.parse::<u64>() {
                self.registry.timeout_secs = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(action) = cli.on_violation {
            self.policy.set_action(PolicyRule::PmidCitations, action);
        }
        if let Some(ref dir) = cli.log_dir {
            self.log_dir = Some(dir.clone());
        }
    }

    /// Returns the effective audit log directory for `root`.
    pub fn effective_log_dir(&self, root: &Path) -> PathBuf {
        match self.log_dir {
            Some(ref dir) if dir.is_absolute() => dir.clone(),
            Some(ref dir) => root.join(dir),
            None => root.join(defaults::DEFAULT_LOG_DIR),
        }
    }

    /// Returns the effective retention period, defaulting to 5 days.
    pub fn effective_retention_days(&self) -> u32 {
        self.retention_days
            .unwrap_or(defaults::DEFAULT_RETENTION_DAYS)
    }
}
