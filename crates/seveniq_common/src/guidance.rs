//! Heuristic solvers for Code, Logic and General problems.
//!
//! None of these compute an answer. They pick a branch from sub-keywords and
//! return a structured plan the explanation step can build on.

use crate::category::{has_any, words, Category};
use crate::confidence::Branch;

const CODE_BUG: &str = "The issue appears to be a bug or error in the code. To resolve this, we need to: 1) Identify the error message, 2) Locate the problematic code section, 3) Apply the appropriate fix based on the error type.";
const CODE_OPTIMIZE: &str = "This is a performance optimization request. The solution involves: 1) Profiling the current code to identify bottlenecks, 2) Implementing algorithmic improvements, 3) Optimizing data structures and memory usage.";
const CODE_GENERIC: &str = "This appears to be a code-related issue. The solution requires: 1) Understanding the specific problem context, 2) Analyzing the code structure, 3) Implementing the appropriate solution based on best practices.";

const LOGIC_CONDITIONAL: &str = "This is a conditional logic problem. The solution involves: 1) Identifying all possible conditions, 2) Mapping out the decision tree, 3) Ensuring all edge cases are covered.";
const LOGIC_BOOLEAN: &str = "This is a boolean logic problem. The solution requires: 1) Understanding the truth conditions, 2) Mapping out all possible combinations, 3) Verifying the logical consistency.";
const LOGIC_GENERIC: &str = "This is a logical reasoning problem. The solution involves: 1) Breaking down the problem into logical components, 2) Identifying the relationships between elements, 3) Applying systematic reasoning to reach a conclusion.";

const GENERAL_EXPLANATORY: &str = "This is an explanatory question. The solution involves: 1) Breaking down the concept into fundamental components, 2) Providing clear, step-by-step explanations, 3) Using examples to illustrate key points.";
const GENERAL_CAUSAL: &str = "This is a causal analysis question. The solution requires: 1) Identifying the root causes, 2) Understanding the relationships between factors, 3) Providing evidence-based explanations.";
const GENERAL_GENERIC: &str = "This is a general problem that requires analysis. The solution involves: 1) Understanding the problem context, 2) Breaking it down into manageable parts, 3) Applying appropriate problem-solving strategies.";

/// Guidance text for a non-computational branch. `None` for `MathEval`,
/// whose answer is computed.
pub fn text(branch: Branch) -> Option<&'static str> {
    let text = match branch {
        Branch::CodeBug => CODE_BUG,
        Branch::CodeOptimize => CODE_OPTIMIZE,
        Branch::CodeGeneric => CODE_GENERIC,
        Branch::LogicConditional => LOGIC_CONDITIONAL,
        Branch::LogicBoolean => LOGIC_BOOLEAN,
        Branch::LogicGeneric => LOGIC_GENERIC,
        Branch::GeneralExplanatory => GENERAL_EXPLANATORY,
        Branch::GeneralCausal => GENERAL_CAUSAL,
        Branch::GeneralGeneric => GENERAL_GENERIC,
        Branch::MathEval => return None,
    };
    Some(text)
}

/// Pick the sub-branch for a heuristic category.
///
/// Returns `None` for Math, which is solved by evaluation instead.
pub fn select_branch(category: Category, normalized: &str) -> Option<Branch> {
    let words = words(normalized);

    let branch = match category {
        Category::Math => return None,
        Category::Code => {
            if words.iter().any(|w| w.contains("bug") || w.starts_with("error")) {
                Branch::CodeBug
            } else if words
                .iter()
                .any(|w| w.starts_with("optimi") || w.starts_with("performance"))
            {
                Branch::CodeOptimize
            } else {
                Branch::CodeGeneric
            }
        }
        Category::Logic => {
            if has_any(&words, &["if", "condition", "conditions", "conditional"]) {
                Branch::LogicConditional
            } else if has_any(&words, &["true", "false"]) {
                Branch::LogicBoolean
            } else {
                Branch::LogicGeneric
            }
        }
        Category::General => {
            if has_any(&words, &["how", "what"]) {
                Branch::GeneralExplanatory
            } else if has_any(&words, &["why", "cause", "causes"]) {
                Branch::GeneralCausal
            } else {
                Branch::GeneralGeneric
            }
        }
    };

    Some(branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_branches() {
        assert_eq!(
            select_branch(Category::Code, "i have a bug in my code"),
            Some(Branch::CodeBug)
        );
        assert_eq!(
            select_branch(Category::Code, "debug this code"),
            Some(Branch::CodeBug)
        );
        assert_eq!(
            select_branch(Category::Code, "this script throws errors"),
            Some(Branch::CodeBug)
        );
        assert_eq!(
            select_branch(Category::Code, "optimize my program for performance"),
            Some(Branch::CodeOptimize)
        );
        assert_eq!(
            select_branch(Category::Code, "my program is not working"),
            Some(Branch::CodeGeneric)
        );
    }

    #[test]
    fn test_logic_branches() {
        assert_eq!(
            select_branch(Category::Logic, "if a is true, then what happens?"),
            Some(Branch::LogicConditional)
        );
        assert_eq!(
            select_branch(Category::Logic, "is this statement true or false?"),
            Some(Branch::LogicBoolean)
        );
        assert_eq!(
            select_branch(Category::Logic, "apply some reasoning here"),
            Some(Branch::LogicGeneric)
        );
        // "different" contains "if" but is not the word
        assert_eq!(
            select_branch(Category::Logic, "a different scenario"),
            Some(Branch::LogicGeneric)
        );
    }

    #[test]
    fn test_general_branches() {
        assert_eq!(
            select_branch(Category::General, "how does photosynthesis work?"),
            Some(Branch::GeneralExplanatory)
        );
        assert_eq!(
            select_branch(Category::General, "why does the sky appear blue?"),
            Some(Branch::GeneralCausal)
        );
        assert_eq!(
            select_branch(Category::General, "tell me about volcanoes"),
            Some(Branch::GeneralGeneric)
        );
    }

    #[test]
    fn test_math_has_no_heuristic_branch() {
        assert_eq!(select_branch(Category::Math, "2 + 2"), None);
    }

    #[test]
    fn test_texts_are_numbered_plans() {
        for branch in Branch::ALL.into_iter().filter(|b| *b != Branch::MathEval) {
            let t = text(branch).unwrap();
            assert!(t.contains("1)") && t.contains("2)") && t.contains("3)"));
        }
    }

    #[test]
    fn test_math_branch_has_no_text() {
        assert_eq!(text(Branch::MathEval), None);
    }
}
