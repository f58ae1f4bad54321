//! Tests for policy and config resolution.

use std::fs;
use std::time::Duration;

use veritas_core::config::{
    CliOverrides, PolicyRule, VeritasConfig, VerificationPolicy, ViolationAction,
};
use veritas_core::errors::ConfigError;

#[test]
fn default_policy_enables_everything_and_only_warns() {
    let policy = VerificationPolicy::default();
    for rule in PolicyRule::ALL {
        assert!(policy.is_enabled(rule), "{} should be enabled", rule.as_str());
        assert_eq!(policy.action(rule), ViolationAction::Warn);
    }
}

#[test]
fn parses_original_json_layout() {
    let json = r#"{
        "verification_rules": {
            "pmid_citations": {
                "enabled": true,
                "enforcement": { "action_on_violation": "block" }
            },
            "obsidian_formatting": { "enabled": false },
            "unsupported_claims": { "enabled": true }
        }
    }"#;
    let policy = VerificationPolicy::from_json(json).unwrap();
    assert_eq!(policy.action(PolicyRule::PmidCitations), ViolationAction::Block);
    assert!(!policy.is_enabled(PolicyRule::ObsidianFormatting));
    assert!(policy.is_enabled(PolicyRule::UnsupportedClaims));
    // Unlisted rules fall back to the default.
    assert!(policy.is_enabled(PolicyRule::WritingStyle));
    assert_eq!(policy.action(PolicyRule::WritingStyle), ViolationAction::Warn);
}

#[test]
fn malformed_project_policy_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".veritas/config")).unwrap();
    fs::write(dir.path().join(".veritas/config/verification.json"), "{ not json").unwrap();
    let err = VeritasConfig::load_with_env(dir.path(), None, |_| None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn load_without_files_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = VeritasConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.policy.action(PolicyRule::PmidCitations), ViolationAction::Warn);
    assert_eq!(config.registry.effective_timeout(), Duration::from_secs(10));
    assert_eq!(config.effective_retention_days(), 5);
    assert_eq!(
        config.effective_log_dir(dir.path()),
        dir.path().join(".veritas/logs")
    );
}

#[test]
fn toml_overrides_json_policy() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".veritas/config")).unwrap();
    fs::write(
        dir.path().join(".veritas/config/verification.json"),
        r#"{"verification_rules": {"pmid_citations": {"enforcement": {"action_on_violation": "block"}}}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("veritas.toml"),
        r#"
retention_days = 9

[registry]
timeout_secs = 3

[verification_rules.writing_style]
enabled = false
"#,
    )
    .unwrap();

    let config = VeritasConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.policy.action(PolicyRule::PmidCitations), ViolationAction::Block);
    assert!(!config.policy.is_enabled(PolicyRule::WritingStyle));
    assert_eq!(config.effective_retention_days(), 9);
    assert_eq!(config.registry.effective_timeout(), Duration::from_secs(3));
}

#[test]
fn explicit_config_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let cli = CliOverrides {
        config_path: Some(dir.path().join("missing.toml")),
        ..Default::default()
    };
    let err = VeritasConfig::load(dir.path(), Some(&cli)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn cli_block_beats_file_warn() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("veritas.toml"),
        "[verification_rules.pmid_citations.enforcement]\naction_on_violation = \"warn\"\n",
    )
    .unwrap();
    let cli = CliOverrides {
        on_violation: Some(ViolationAction::Block),
        ..Default::default()
    };
    let config = VeritasConfig::load(dir.path(), Some(&cli)).unwrap();
    assert_eq!(config.policy.action(PolicyRule::PmidCitations), ViolationAction::Block);
}

#[test]
fn explicit_config_beats_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("explicit.json");
    fs::write(
        &path,
        r#"{"verification_rules": {"pmid_citations": {"enforcement": {"action_on_violation": "block"}}}}"#,
    )
    .unwrap();
    let cli = CliOverrides {
        config_path: Some(path),
        ..Default::default()
    };
    let config = VeritasConfig::load_with_env(dir.path(), Some(&cli), |key| match key {
        "VERITAS_ON_VIOLATION" => Some("warn".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.policy.action(PolicyRule::PmidCitations), ViolationAction::Block);
}

#[test]
fn environment_beats_project_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("veritas.toml"),
        "[verification_rules.pmid_citations.enforcement]\naction_on_violation = \"block\"\n",
    )
    .unwrap();
    let config = VeritasConfig::load_with_env(dir.path(), None, |key| match key {
        "VERITAS_ON_VIOLATION" => Some("warn".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.policy.action(PolicyRule::PmidCitations), ViolationAction::Warn);
}

#[test]
fn env_overrides_apply_and_ignore_garbage() {
    let mut config = VeritasConfig::default();
    config.apply_env_overrides_from(|key| match key {
        "VERITAS_ON_VIOLATION" => Some("BLOCK".to_string()),
        "VERITAS_REGISTRY_TIMEOUT_SECS" => Some("not-a-number".to_string()),
        "VERITAS_REGISTRY_URL" => Some("http://localhost:9000".to_string()),
        _ => None,
    });
    assert_eq!(config.policy.action(PolicyRule::PmidCitations), ViolationAction::Block);
    assert_eq!(config.registry.timeout_secs, None);
    assert_eq!(config.registry.effective_base_url(), "http://localhost:9000");
}

#[test]
fn rejects_zero_timeout_and_non_http_url() {
    let config = VeritasConfig::from_toml("[registry]\ntimeout_secs = 0\n").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let config = VeritasConfig::from_toml("[registry]\nbase_url = \"ftp://x\"\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn absolute_log_dir_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let config = VeritasConfig {
        log_dir: Some(dir.path().join("audit")),
        ..Default::default()
    };
    assert_eq!(
        config.effective_log_dir(std::path::Path::new("/elsewhere")),
        dir.path().join("audit")
    );
}
