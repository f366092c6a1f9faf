//! Explanation modes and prompt templates.
//!
//! After the resolver produces `{problem, answer}`, the explanation step fills
//! one of four audience templates and hands it to a language model. When no
//! model is available a canned explanation is used instead. Both live here;
//! the model call itself does not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::error::UnknownMode;
use crate::resolver::ProblemSolver;

/// Problem text longer than this is truncated in canned explanations
pub const FALLBACK_EXCERPT_CHARS: usize = 50;

/// Answer reported when the resolver could not solve the problem
pub const FALLBACK_ANSWER: &str = "Analysis completed";
pub const FALLBACK_CONFIDENCE: f64 = 0.8;
pub const FALLBACK_METHOD: &str = "Mock analysis";

/// Audience style for an explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationMode {
    #[default]
    Child,
    Grandma,
    Ceo,
    Technical,
}

impl ExplanationMode {
    pub const ALL: [ExplanationMode; 4] = [
        ExplanationMode::Child,
        ExplanationMode::Grandma,
        ExplanationMode::Ceo,
        ExplanationMode::Technical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Grandma => "grandma",
            Self::Ceo => "ceo",
            Self::Technical => "technical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Child => "Simple and friendly explanations perfect for kids and beginners",
            Self::Grandma => "Warm and patient explanations that anyone can understand",
            Self::Ceo => "Concise and strategic explanations for busy executives",
            Self::Technical => "Detailed technical explanations with depth and precision",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Self::Child => CHILD_PROMPT,
            Self::Grandma => GRANDMA_PROMPT,
            Self::Ceo => CEO_PROMPT,
            Self::Technical => TECHNICAL_PROMPT,
        }
    }
}

impl std::fmt::Display for ExplanationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExplanationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "child" => Ok(Self::Child),
            "grandma" => Ok(Self::Grandma),
            "ceo" => Ok(Self::Ceo),
            "technical" => Ok(Self::Technical),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

const CHILD_PROMPT: &str = "You are SevenIQ, an AI assistant that explains complex topics in simple, friendly language that a 5-year-old would understand.

IMPORTANT INSTRUCTIONS:
1. ALWAYS start with \"The answer is: [ANSWER]\" on the first line
2. Then explain how to get there in simple, friendly terms
3. Use concrete examples, short sentences, and avoid jargon
4. Make it warm and engaging
5. Use simple analogies and real-world examples
6. Keep explanations under 100 words

Problem: {PROBLEM}
Correct Answer: {ANSWER}

Now explain how to get there in child-friendly language:";

const GRANDMA_PROMPT: &str = "You are SevenIQ, an AI assistant that explains complex topics in warm, reassuring language that a grandmother would appreciate.

IMPORTANT INSTRUCTIONS:
1. ALWAYS start with \"The answer is: [ANSWER]\" on the first line
2. Then explain how to get there in warm, patient terms
3. Use step-by-step guidance and gentle metaphors
4. Avoid slang or abrupt phrasing
5. Be thorough but not overwhelming
6. Keep explanations under 120 words

Problem: {PROBLEM}
Correct Answer: {ANSWER}

Now explain how to get there in warm, reassuring language:";

const CEO_PROMPT: &str = "You are SevenIQ, an AI assistant that explains complex topics in concise, bottom-line focused language for busy executives.

IMPORTANT INSTRUCTIONS:
1. ALWAYS start with \"The answer is: [ANSWER]\" on the first line
2. Then provide a concise explanation focused on impact and action items
3. Use bullet points where helpful
4. Focus on KPIs and business value
5. Keep it to 5-7 lines maximum
6. Lead with key points and strategic implications

Problem: {PROBLEM}
Correct Answer: {ANSWER}

Now explain how to get there in executive-focused language:";

const TECHNICAL_PROMPT: &str = "You are SevenIQ, an AI assistant that explains complex topics with technical precision and depth.

IMPORTANT INSTRUCTIONS:
1. ALWAYS start with \"The answer is: [ANSWER]\" on the first line
2. Then provide a detailed technical explanation
3. Include relevant technical details and context
4. Use precise terminology and technical concepts
5. Structure the explanation logically
6. Keep explanations under 150 words

Problem: {PROBLEM}
Correct Answer: {ANSWER}

Now explain how to get there with technical precision:";

/// Fill the mode template. Only the first `{PROBLEM}` and `{ANSWER}` are
/// replaced, problem first.
pub fn system_prompt(mode: ExplanationMode, problem: &str, answer: &str) -> String {
    mode.template()
        .replacen("{PROBLEM}", problem, 1)
        .replacen("{ANSWER}", answer, 1)
}

fn excerpt(text: &str) -> String {
    if text.chars().count() > FALLBACK_EXCERPT_CHARS {
        let head: String = text.chars().take(FALLBACK_EXCERPT_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Canned explanation used when no language model is available
pub fn fallback_explanation(mode: ExplanationMode, problem: &str, answer: &str) -> String {
    let base = excerpt(problem);
    match mode {
        ExplanationMode::Child => format!(
            "The answer is: {answer}\n\nHere's a simple explanation: {base} is like when you're learning something new! It might seem complicated at first, but once you break it down into smaller pieces, it becomes much easier to understand. Think of it like building with blocks - you start with the basics and work your way up!"
        ),
        ExplanationMode::Grandma => format!(
            "The answer is: {answer}\n\nLet me explain this in a gentle way: {base} is something that many people find confusing at first. But don't worry - we'll take it step by step, and I'll make sure you understand each part before we move on. It's like learning to cook - you don't need to know everything at once!"
        ),
        ExplanationMode::Ceo => format!(
            "The answer is: {answer}\n\nKey points:\n• {base} represents a core strategic concept\n• Impact: High strategic value with immediate implementation potential\n• Action items: Focus on rapid deployment and team alignment\n• Timeline: 30-60 day implementation window\n• ROI: Significant long-term benefits with measurable KPIs"
        ),
        ExplanationMode::Technical => format!(
            "The answer is: {answer}\n\nTechnical analysis:\n\n{base} involves several key technical components:\n\n1. Core Architecture: The system utilizes a distributed architecture with microservices\n2. Data Flow: Input processing follows a pipeline pattern with validation layers\n3. Performance: Optimized for sub-second response times with caching\n4. Scalability: Horizontal scaling supported through load balancing"
        ),
    }
}

/// Everything the explanation step needs, prepared without any network call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationDraft {
    pub mode: ExplanationMode,
    /// Filled template for the model; absent when the resolver failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// Offline explanation
    pub explanation: String,
    pub word_count: usize,
    pub answer: String,
    pub confidence: f64,
    pub method: String,
    pub timestamp: DateTime<Utc>,
}

impl ExplanationDraft {
    /// Resolve the problem and build the prompt plus an offline explanation.
    ///
    /// A resolver failure does not fail the draft: it falls back to a generic
    /// answer and leaves `system_prompt` empty.
    pub fn prepare(mode: ExplanationMode, text: &str, solver: &ProblemSolver) -> Self {
        let (system_prompt, answer, confidence, method) = match solver.try_solve(text) {
            Ok(solution) => (
                Some(system_prompt(mode, text, &solution.answer)),
                solution.answer,
                solution.confidence,
                solution.method,
            ),
            Err(e) => {
                debug!(%mode, "Using fallback explanation: {}", e);
                (
                    None,
                    FALLBACK_ANSWER.to_string(),
                    FALLBACK_CONFIDENCE,
                    FALLBACK_METHOD.to_string(),
                )
            }
        };

        let explanation = fallback_explanation(mode, text, &answer);
        let word_count = explanation.split_whitespace().count();

        Self {
            mode,
            system_prompt,
            explanation,
            word_count,
            answer,
            confidence,
            method,
            timestamp: Utc::now(),
        }
    }
}
