//! Problem category detection.
//!
//! Detectors run in a fixed order (Math, Code, Logic, General) and the first
//! match wins. Keyword cues match whole words only, so "work" does not count
//! as "or" and "classify" does not count as "class".

use serde::{Deserialize, Serialize};

use crate::resolver::extract_expression;

const MATH_OPERATORS: &[char] = &['+', '-', '*', '/', '^', '='];
const MATH_CUES: &[&str] = &[
    "solve", "solves", "solved", "solving",
    "calculate", "calculates", "calculated", "calculating", "calculation", "calculations",
    "compute", "computes", "computed", "computing", "computation", "computations",
];
const MATH_TERMS: &[&str] = &[
    "equation", "equations", "formula", "formulas", "formulae", "function", "functions",
];

const CODE_TERMS: &[&str] = &[
    "bug", "bugs", "buggy", "error", "errors", "exception", "exceptions",
    "code", "program", "programs", "script", "scripts",
    "function", "functions", "method", "methods", "class", "classes",
    "syntax", "compilation",
    "debug", "debugging", "fix", "optimize", "optimise",
];

const LOGIC_TERMS: &[&str] = &[
    "if", "then", "else",
    "logic", "logical", "reasoning",
    "true", "false",
    "and", "or", "not",
    "condition", "conditions", "conditional", "scenario", "scenarios",
];

/// Coarse problem classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Math,
    Code,
    Logic,
    /// Catch-all, always matches
    General,
}

impl Category {
    /// Detection priority, first match wins
    pub const ORDER: [Category; 4] = [
        Category::Math,
        Category::Code,
        Category::Logic,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Code => "code",
            Self::Logic => "logic",
            Self::General => "general",
        }
    }

    /// Label reported in `Solution::method`
    pub fn method(&self) -> &'static str {
        match self {
            Self::Math => "Mathematical evaluation",
            Self::Code => "Code analysis and debugging",
            Self::Logic => "Logical reasoning analysis",
            Self::General => "General problem analysis",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How eagerly the Math detector claims an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionPolicy {
    /// Any digit, operator character, solve/calculate cue or math term
    /// classifies the input as Math. "bug #42" is Math.
    #[default]
    Permissive,
    /// Only a digit-operator-digit expression classifies as Math.
    Strict,
}

/// Split lower-cased text into alphanumeric words
pub(crate) fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

pub(crate) fn has_any(words: &[&str], terms: &[&str]) -> bool {
    words.iter().any(|w| terms.contains(w))
}

fn has_what_is(words: &[&str]) -> bool {
    words.windows(2).any(|pair| pair == ["what", "is"])
}

/// Whether the text holds an expression the Math solver can extract
pub fn has_arithmetic(text: &str) -> bool {
    extract_expression(text).is_some()
}

fn is_math(text: &str, words: &[&str], policy: DetectionPolicy) -> bool {
    if has_arithmetic(text) {
        return true;
    }
    match policy {
        DetectionPolicy::Strict => false,
        DetectionPolicy::Permissive => {
            has_any(words, MATH_CUES)
                || has_what_is(words)
                || text.chars().any(|c| c.is_ascii_digit())
                || text.contains(MATH_OPERATORS)
                || has_any(words, MATH_TERMS)
        }
    }
}

impl Category {
    fn matches(&self, text: &str, words: &[&str], policy: DetectionPolicy) -> bool {
        match self {
            Self::Math => is_math(text, words, policy),
            Self::Code => has_any(words, CODE_TERMS),
            Self::Logic => has_any(words, LOGIC_TERMS),
            Self::General => true,
        }
    }
}

/// Classify normalized (trimmed, lower-cased) text
pub fn detect(normalized: &str, policy: DetectionPolicy) -> Category {
    let words = words(normalized);
    Category::ORDER
        .into_iter()
        .find(|c| c.matches(normalized, &words, policy))
        .unwrap_or(Category::General)
}

/// Keywords from the category's vocabulary that appear in the text
pub fn matched_keywords(normalized: &str, category: Category) -> Vec<String> {
    let words = words(normalized);
    let terms: &[&str] = match category {
        Category::Math => MATH_TERMS,
        Category::Code => CODE_TERMS,
        Category::Logic => LOGIC_TERMS,
        Category::General => return Vec::new(),
    };

    let mut found: Vec<String> = Vec::new();
    for w in words.iter().filter(|w| terms.contains(w)) {
        if !found.iter().any(|f| f == w) {
            found.push(w.to_string());
        }
    }
    if category == Category::Math {
        for w in words.iter().filter(|w| MATH_CUES.contains(w)) {
            if !found.iter().any(|f| f == w) {
                found.push(w.to_string());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permissive(text: &str) -> Category {
        detect(text, DetectionPolicy::Permissive)
    }

    #[test]
    fn test_math_detection() {
        assert_eq!(permissive("15 + 27"), Category::Math);
        assert_eq!(permissive("15+27"), Category::Math);
        assert_eq!(permissive("what is the answer"), Category::Math);
        assert_eq!(permissive("please calculate my taxes"), Category::Math);
        assert_eq!(permissive("the quadratic formula"), Category::Math);
        assert_eq!(permissive("a well-known result"), Category::Math);
    }

    #[test]
    fn test_math_cue_inflections() {
        assert_eq!(permissive("help me with this calculation"), Category::Math);
        assert_eq!(permissive("solving for x"), Category::Math);
        assert_eq!(permissive("computing the average"), Category::Math);
        // not a cue
        assert_eq!(permissive("how does a computer work?"), Category::General);
    }

    #[test]
    fn test_order_puts_general_last() {
        assert_eq!(Category::ORDER[0], Category::Math);
        assert_eq!(Category::ORDER.last(), Some(&Category::General));
        // Math wins over Code and Logic when both match
        assert_eq!(permissive("fix the bug if 2 + 2 is wrong"), Category::Math);
        // Code wins over Logic
        assert_eq!(permissive("if the code fails"), Category::Code);
    }

    #[test]
    fn test_any_digit_is_math_when_permissive() {
        assert_eq!(permissive("bug #42 in my code"), Category::Math);
        assert_eq!(permissive("born in 1990"), Category::Math);
    }

    #[test]
    fn test_strict_requires_arithmetic() {
        let strict = |t: &str| detect(t, DetectionPolicy::Strict);
        assert_eq!(strict("bug #42 in my code"), Category::Code);
        assert_eq!(strict("what is the answer"), Category::General);
        assert_eq!(strict("what is 2 + 2?"), Category::Math);
        assert_eq!(strict("how can i optimize this function?"), Category::Code);
        // an ASCII run glued to a non-ASCII digit is not arithmetic
        assert_eq!(strict("1٢3 + 4"), Category::General);
        assert_eq!(strict("１２ + 3"), Category::General);
    }

    #[test]
    fn test_code_detection() {
        assert_eq!(permissive("i have a bug in my code"), Category::Code);
        assert_eq!(permissive("my program is not working"), Category::Code);
        assert_eq!(permissive("debug this"), Category::Code);
        assert_eq!(permissive("a syntax problem"), Category::Code);
    }

    #[test]
    fn test_logic_detection() {
        assert_eq!(permissive("if a is true, then what happens?"), Category::Logic);
        assert_eq!(permissive("is this statement true or false?"), Category::Logic);
        assert_eq!(permissive("consider this scenario"), Category::Logic);
    }

    #[test]
    fn test_whole_word_matching() {
        // "work" contains "or", "does" contains nothing relevant
        assert_eq!(permissive("how does photosynthesis work?"), Category::General);
        assert_eq!(permissive("classify these animals"), Category::General);
        assert_eq!(permissive("why does the sky appear blue?"), Category::General);
    }

    #[test]
    fn test_matched_keywords() {
        let kw = matched_keywords("fix the bug, the bug is in the code", Category::Code);
        assert_eq!(kw, vec!["fix", "bug", "code"]);
        assert!(matched_keywords("anything", Category::General).is_empty());
        assert_eq!(
            matched_keywords("solve this equation", Category::Math),
            vec!["equation", "solve"]
        );
    }
}
