//! Configuration system for Veritas.
//! JSON or TOML, layered resolution: CLI > env > project files > defaults.

pub mod defaults;
pub mod policy;
pub mod registry_config;
pub mod veritas_config;

pub use policy::{PolicyRule, RuleEnforcement, RulePolicy, VerificationPolicy, ViolationAction};
pub use registry_config::RegistryConfig;
pub use veritas_config::{CliOverrides, VeritasConfig};
