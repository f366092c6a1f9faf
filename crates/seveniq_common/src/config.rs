//! Solver configuration.
//!
//! Config file: ~/.config/seveniq/config.toml or /etc/seveniq/config.toml
//!
//! ```toml
//! [detection]
//! policy = "strict"
//!
//! [confidence]
//! math_eval = 0.9
//! code_bug = 0.8
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::category::DetectionPolicy;
use crate::confidence::ConfidenceTable;
use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SEVENIQ_CONFIG";

/// Category detection settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    #[serde(default)]
    pub policy: DetectionPolicy,
}

/// Main solver configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub detection: DetectionConfig,

    #[serde(default)]
    pub confidence: ConfidenceTable,
}

impl SolverConfig {
    /// Get default user config path: ~/.config/seveniq/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("seveniq").join("config.toml"))
    }

    /// Get system config path: /etc/seveniq/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/seveniq/config.toml")
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.confidence.validate()
    }

    /// Load configuration from one file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded solver config from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Resolve which config file applies, if any.
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. $SEVENIQ_CONFIG (must exist)
    /// 3. User config (~/.config/seveniq/config.toml)
    /// 4. System config (/etc/seveniq/config.toml)
    pub fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = explicit {
            return required(path.to_path_buf()).map(Some);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            if !env_path.is_empty() {
                return required(PathBuf::from(env_path)).map(Some);
            }
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Ok(Some(user_path));
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Ok(Some(system_path));
        }

        Ok(None)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::locate(explicit)? {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

fn required(path: PathBuf) -> Result<PathBuf, ConfigError> {
    if path.exists() {
        Ok(path)
    } else {
        Err(ConfigError::NotFound(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::Branch;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.detection.policy, DetectionPolicy::Permissive);
        assert_eq!(config.confidence, ConfidenceTable::default());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = SolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_parse_sections() {
        let config = SolverConfig::from_toml_str(
            r#"
            [detection]
            policy = "strict"

            [confidence]
            math_eval = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.detection.policy, DetectionPolicy::Strict);
        assert_eq!(config.confidence.get(Branch::MathEval), 0.9);
        assert_eq!(config.confidence.get(Branch::CodeBug), 0.8);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SolverConfig::from_toml_str("[detection]\npolicy = \"sloppy\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SolverConfig::from_toml_str("[confidence]\ncode_bug = -0.1"),
            Err(ConfigError::ConfidenceOutOfRange {
                branch: Branch::CodeBug,
                ..
            })
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = SolverConfig::default();
        config.detection.policy = DetectionPolicy::Strict;
        config.confidence.general_generic = 0.5;
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("policy = \"strict\""));
        assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[confidence]\nlogic_generic = 0.6").unwrap();

        let config = SolverConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.confidence.logic_generic, 0.6);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            SolverConfig::load(Some(&missing)),
            Err(ConfigError::NotFound(_))
        ));
    }
}
