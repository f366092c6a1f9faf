//! Confidence lookup table.
//!
//! Every solver branch reports a fixed confidence. These are placeholder
//! heuristics rather than calibrated probabilities; they live here so they
//! can be tuned from config without touching solver control flow.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A solver branch: one category plus the sub-keyword that selected it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// Arithmetic expression evaluated
    MathEval,
    /// "bug" / "error"
    CodeBug,
    /// "optimize" / "performance"
    CodeOptimize,
    CodeGeneric,
    /// "if" / "condition"
    LogicConditional,
    /// "true" / "false"
    LogicBoolean,
    LogicGeneric,
    /// "how" / "what"
    GeneralExplanatory,
    /// "why" / "cause"
    GeneralCausal,
    GeneralGeneric,
}

impl Branch {
    pub const ALL: [Branch; 10] = [
        Branch::MathEval,
        Branch::CodeBug,
        Branch::CodeOptimize,
        Branch::CodeGeneric,
        Branch::LogicConditional,
        Branch::LogicBoolean,
        Branch::LogicGeneric,
        Branch::GeneralExplanatory,
        Branch::GeneralCausal,
        Branch::GeneralGeneric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MathEval => "math_eval",
            Self::CodeBug => "code_bug",
            Self::CodeOptimize => "code_optimize",
            Self::CodeGeneric => "code_generic",
            Self::LogicConditional => "logic_conditional",
            Self::LogicBoolean => "logic_boolean",
            Self::LogicGeneric => "logic_generic",
            Self::GeneralExplanatory => "general_explanatory",
            Self::GeneralCausal => "general_causal",
            Self::GeneralGeneric => "general_generic",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-branch confidence values. Missing keys in config fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceTable {
    pub math_eval: f64,
    pub code_bug: f64,
    pub code_optimize: f64,
    pub code_generic: f64,
    pub logic_conditional: f64,
    pub logic_boolean: f64,
    pub logic_generic: f64,
    pub general_explanatory: f64,
    pub general_causal: f64,
    pub general_generic: f64,
}

impl Default for ConfidenceTable {
    fn default() -> Self {
        Self {
            math_eval: 0.95,
            code_bug: 0.8,
            code_optimize: 0.85,
            code_generic: 0.7,
            logic_conditional: 0.8,
            logic_boolean: 0.85,
            logic_generic: 0.75,
            general_explanatory: 0.7,
            general_causal: 0.75,
            general_generic: 0.65,
        }
    }
}

impl ConfidenceTable {
    pub fn get(&self, branch: Branch) -> f64 {
        match branch {
            Branch::MathEval => self.math_eval,
            Branch::CodeBug => self.code_bug,
            Branch::CodeOptimize => self.code_optimize,
            Branch::CodeGeneric => self.code_generic,
            Branch::LogicConditional => self.logic_conditional,
            Branch::LogicBoolean => self.logic_boolean,
            Branch::LogicGeneric => self.logic_generic,
            Branch::GeneralExplanatory => self.general_explanatory,
            Branch::GeneralCausal => self.general_causal,
            Branch::GeneralGeneric => self.general_generic,
        }
    }

    /// Every value must be a finite number within [0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for branch in Branch::ALL {
            let value = self.get(branch);
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ConfidenceOutOfRange { branch, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let table = ConfidenceTable::default();
        assert_eq!(table.get(Branch::MathEval), 0.95);
        assert_eq!(table.get(Branch::CodeBug), 0.8);
        assert_eq!(table.get(Branch::CodeOptimize), 0.85);
        assert_eq!(table.get(Branch::CodeGeneric), 0.7);
        assert_eq!(table.get(Branch::LogicConditional), 0.8);
        assert_eq!(table.get(Branch::LogicBoolean), 0.85);
        assert_eq!(table.get(Branch::LogicGeneric), 0.75);
        assert_eq!(table.get(Branch::GeneralExplanatory), 0.7);
        assert_eq!(table.get(Branch::GeneralCausal), 0.75);
        assert_eq!(table.get(Branch::GeneralGeneric), 0.65);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut table = ConfidenceTable::default();
        table.logic_boolean = 1.5;
        match table.validate() {
            Err(ConfigError::ConfidenceOutOfRange { branch, value }) => {
                assert_eq!(branch, Branch::LogicBoolean);
                assert_eq!(value, 1.5);
            }
            other => panic!("expected out-of-range error, got {:?}", other),
        }

        table.logic_boolean = f64::NAN;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_partial_table_uses_defaults() {
        let table: ConfidenceTable = toml::from_str("code_bug = 0.9").unwrap();
        assert_eq!(table.code_bug, 0.9);
        assert_eq!(table.math_eval, 0.95);
    }
}
