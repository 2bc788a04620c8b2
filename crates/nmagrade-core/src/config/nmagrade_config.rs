//! Top-level nmagrade configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{GradeConfig, LoggingConfig, PipelineConfig, RecommendationConfig, ValidationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`NMAGRADE_*`)
/// 3. Project config (`nmagrade.toml` in project root)
/// 4. User config (`~/.nmagrade/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NmaConfig {
    pub validation: ValidationConfig,
    pub recommendation: RecommendationConfig,
    pub grade: GradeConfig,
    pub pipeline: PipelineConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub block_on_invalid: Option<bool>,
    pub bridge_count: Option<usize>,
    pub default_certainty_level: Option<u8>,
}

impl NmaConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("nmagrade.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: NmaConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &NmaConfig) -> Result<(), ConfigError> {
        let rec = &config.recommendation;

        for (field, value) in [
            ("recommendation.event_rate_lower", rec.event_rate_lower),
            ("recommendation.event_rate_upper", rec.event_rate_upper),
            ("recommendation.zero_event_threshold", rec.zero_event_threshold),
            ("recommendation.sparse_density_threshold", rec.sparse_density_threshold),
            ("recommendation.disconnected_penalty", rec.disconnected_penalty),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }

        let (lower, upper) = rec.effective_event_rate_band();
        if lower > upper {
            return Err(ConfigError::ValidationFailed {
                field: "recommendation.event_rate_lower".to_string(),
                message: "must not exceed recommendation.event_rate_upper".to_string(),
            });
        }

        if rec.effective_few_studies_threshold() > rec.effective_many_studies_threshold() {
            return Err(ConfigError::ValidationFailed {
                field: "recommendation.few_studies_threshold".to_string(),
                message: "must not exceed recommendation.many_studies_threshold".to_string(),
            });
        }

        let simple = rec.effective_simple_complexity();
        let complex = rec.effective_complex_complexity();
        if !(0.0..=100.0).contains(&simple) || !(0.0..=100.0).contains(&complex) || simple > complex {
            return Err(ConfigError::ValidationFailed {
                field: "recommendation.simple_complexity".to_string(),
                message: "complexity cut-offs must lie in 0..=100 with simple <= complex".to_string(),
            });
        }

        if let Some(value) = rec.continuity_correction_value {
            if value <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "recommendation.continuity_correction_value".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        if config.grade.bridge_count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "grade.bridge_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if let Some(level) = config.grade.default_certainty_level {
            if !(1..=4).contains(&level) {
                return Err(ConfigError::ValidationFailed {
                    field: "grade.default_certainty_level".to_string(),
                    message: "must be between 1 (Very low) and 4 (High)".to_string(),
                });
            }
        }

        if let Some(filter) = &config.logging.filter {
            if let Err(e) = EnvFilter::try_new(filter) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.filter".to_string(),
                    message: e.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the user config path: `~/.nmagrade/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".nmagrade").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut NmaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: NmaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut NmaConfig, other: &NmaConfig) {
        base.validation.merge(&other.validation);
        base.recommendation.merge(&other.recommendation);
        base.grade.merge(&other.grade);
        base.pipeline.merge(&other.pipeline);
        base.logging.merge(&other.logging);
    }

    /// Apply environment variable overrides.
    /// Pattern: `NMAGRADE_GRADE_BRIDGE_COUNT`, `NMAGRADE_PIPELINE_BLOCK_ON_INVALID`, etc.
    fn apply_env_overrides(config: &mut NmaConfig) {
        if let Ok(val) = std::env::var("NMAGRADE_VALIDATION_WARN_SINGLE_ARM") {
            if let Ok(v) = val.parse::<bool>() {
                config.validation.warn_single_arm_studies = Some(v);
            }
        }
        if let Ok(val) = std::env::var("NMAGRADE_RECOMMENDATION_FEW_STUDIES_THRESHOLD") {
            if let Ok(v) = val.parse::<u32>() {
                config.recommendation.few_studies_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("NMAGRADE_RECOMMENDATION_DISCONNECTED_PENALTY") {
            if let Ok(v) = val.parse::<f64>() {
                config.recommendation.disconnected_penalty = Some(v);
            }
        }
        if let Ok(val) = std::env::var("NMAGRADE_GRADE_BRIDGE_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.grade.bridge_count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("NMAGRADE_GRADE_DEFAULT_CERTAINTY_LEVEL") {
            if let Ok(v) = val.parse::<u8>() {
                config.grade.default_certainty_level = Some(v);
            }
        }
        if let Ok(val) = std::env::var("NMAGRADE_PIPELINE_BLOCK_ON_INVALID") {
            if let Ok(v) = val.parse::<bool>() {
                config.pipeline.block_on_invalid = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut NmaConfig, cli: &CliOverrides) {
        if let Some(v) = cli.block_on_invalid {
            config.pipeline.block_on_invalid = Some(v);
        }
        if let Some(v) = cli.bridge_count {
            config.grade.bridge_count = Some(v);
        }
        if let Some(v) = cli.default_certainty_level {
            config.grade.default_certainty_level = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
