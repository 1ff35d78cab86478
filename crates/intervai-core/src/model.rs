//! Core data model types for intervai.
//!
//! Questions and their reference answers are static input; analysis results
//! are derived per answer and embedded into sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An interview question shown to the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, shared with the matching reference answer.
    pub id: u32,
    /// The question as asked.
    pub text: String,
    /// Category label (e.g. "Technical").
    pub category: String,
}

/// The ideal answer for a question and the keywords a good answer mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAnswer {
    /// Identifier of the question this answer belongs to.
    pub question_id: u32,
    /// Description of what an ideal answer covers.
    #[serde(default)]
    pub ideal_answer: String,
    /// Keywords matched case-insensitively against candidate answers.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A three-step qualitative level used for confidence and nervousness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// Qualitative bucket derived from a numeric score.
///
/// Serializes as its long label; sessions store the short label instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Average Performance")]
    Average,
    #[serde(rename = "Good Performance")]
    Good,
}

impl PerformanceTier {
    /// Bucket a 0–100 score. Both 40 and 70 fall in the middle tier.
    pub fn from_score(score: u32) -> Self {
        if score < 40 {
            PerformanceTier::NeedsImprovement
        } else if score <= 70 {
            PerformanceTier::Average
        } else {
            PerformanceTier::Good
        }
    }

    /// Label used on a single answer (e.g. "Average Performance").
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::NeedsImprovement => "Needs Improvement",
            PerformanceTier::Average => "Average Performance",
            PerformanceTier::Good => "Good Performance",
        }
    }

    /// Label used on a whole session (e.g. "Average").
    pub fn short_label(&self) -> &'static str {
        match self {
            PerformanceTier::NeedsImprovement => "Needs Improvement",
            PerformanceTier::Average => "Average",
            PerformanceTier::Good => "Good",
        }
    }

    /// Inverse of [`short_label`](Self::short_label).
    pub fn from_short_label(label: &str) -> Option<Self> {
        match label {
            "Needs Improvement" => Some(PerformanceTier::NeedsImprovement),
            "Average" => Some(PerformanceTier::Average),
            "Good" => Some(PerformanceTier::Good),
            _ => None,
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The multi-dimensional assessment of one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall score, always within 0..=100.
    pub score: u32,
    /// Confidence inferred from answer length.
    pub confidence: Level,
    /// Percentage of reference keywords found in the answer.
    pub keyword_coverage: u32,
    /// Same value as `keyword_coverage`.
    pub clarity_score: u32,
    /// Nervousness inferred from filler word usage.
    pub nervousness_level: Level,
    /// One sentence of qualitative feedback.
    pub feedback: String,
    /// Actionable suggestions in a fixed evaluation order.
    pub recommendations: Vec<String>,
    /// Tier derived from `score`.
    pub performance_level: PerformanceTier,
}

impl AnalysisResult {
    /// The fixed result returned for a question id with no reference answer.
    pub fn question_not_found() -> Self {
        Self {
            score: 0,
            confidence: Level::Low,
            keyword_coverage: 0,
            clarity_score: 0,
            nervousness_level: Level::High,
            feedback: "Question not found.".to_string(),
            recommendations: Vec::new(),
            performance_level: PerformanceTier::NeedsImprovement,
        }
    }
}
