//! Rule-based answer analysis.
//!
//! Scores a free-text answer against a reference answer's keywords using
//! lexical matching and fixed arithmetic: keyword coverage dominates, answer
//! length adds structure points, and filler words only penalize.

use std::sync::LazyLock;

use regex::Regex;

use crate::bank::QuestionBank;
use crate::model::{AnalysisResult, Level, PerformanceTier, ReferenceAnswer};

/// Filler terms counted as whole words or whole phrases.
pub const FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "like",
    "basically",
    "actually",
    "literally",
    "you know",
    "i mean",
    "sort of",
    "kind of",
    "well",
    "so",
    "just",
];

static FILLER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FILLER_WORDS
        .iter()
        .map(|filler| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(filler))).unwrap())
        .collect()
});

const FEEDBACK_NEEDS_IMPROVEMENT: &str = "Your answer lacks key concepts. Focus on covering the main points and providing specific examples to strengthen your response.";
const FEEDBACK_AVERAGE: &str = "You covered some key points but could improve by being more detailed and structured. Use the STAR method for behavioral questions.";
const FEEDBACK_GOOD: &str = "Strong answer with good keyword coverage and structure. Continue refining your delivery for even better results.";

const REC_KEYWORDS: &str = "Include more relevant keywords and technical terms in your answer.";
const REC_DETAIL: &str = "Provide more detailed responses — aim for at least 50-80 words.";
const REC_FILLERS: &str = "Reduce filler words (um, like, basically) to sound more confident.";
const REC_ELABORATE: &str = "Elaborate on your points with specific examples and experiences.";
const REC_ANECDOTE: &str = "Great coverage! Try adding a personal anecdote to make it memorable.";
const REC_EXCELLENT: &str = "Excellent response! Practice delivering it naturally for maximum impact.";

/// Intermediate metrics computed for one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisBreakdown {
    /// Whitespace-separated tokens in the normalized answer.
    pub word_count: usize,
    /// Reference keywords found in the answer, in reference order.
    pub matched_keywords: Vec<String>,
    /// Number of keywords in the reference answer.
    pub total_keywords: usize,
    /// `matched / total`, or 0 when the reference has no keywords.
    pub coverage: f64,
    /// Length band score (10, 30, 60, 85 or 95).
    pub length_score: u32,
    /// Total filler occurrences across all filler terms.
    pub filler_count: usize,
    /// `filler_count / word_count`, or 0 for an empty answer.
    pub filler_ratio: f64,
}

impl AnalysisBreakdown {
    /// Compute the metrics for `answer` against `reference`.
    pub fn compute(reference: &ReferenceAnswer, answer: &str) -> Self {
        let normalized = answer.to_lowercase();
        let normalized = normalized.trim();
        let word_count = normalized.split_whitespace().count();

        let matched_keywords: Vec<String> = reference
            .keywords
            .iter()
            .filter(|kw| normalized.contains(&kw.to_lowercase()))
            .cloned()
            .collect();
        let total_keywords = reference.keywords.len();
        let coverage = if total_keywords == 0 {
            0.0
        } else {
            matched_keywords.len() as f64 / total_keywords as f64
        };

        let filler_count = count_fillers(normalized);
        let filler_ratio = if word_count > 0 {
            filler_count as f64 / word_count as f64
        } else {
            0.0
        };

        Self {
            word_count,
            matched_keywords,
            total_keywords,
            coverage,
            length_score: length_score(word_count),
            filler_count,
            filler_ratio,
        }
    }

    /// Keyword coverage as a rounded percentage.
    pub fn coverage_percent(&self) -> u32 {
        (self.coverage * 100.0).round() as u32
    }

    pub fn nervousness(&self) -> Level {
        if self.filler_ratio > 0.1 {
            Level::High
        } else if self.filler_ratio > 0.05 {
            Level::Medium
        } else {
            Level::Low
        }
    }

    pub fn confidence(&self) -> Level {
        if self.word_count < 15 {
            Level::Low
        } else if self.word_count < 50 {
            Level::Medium
        } else {
            Level::High
        }
    }

    /// Final score, rounded and clamped to 0..=100.
    pub fn score(&self) -> u32 {
        let keyword_score = self.coverage * 50.0;
        let structure_score = f64::from(self.length_score) * 0.3;
        let filler_penalty = self.filler_ratio * 30.0;
        (keyword_score + structure_score - filler_penalty)
            .round()
            .clamp(0.0, 100.0) as u32
    }

    /// Suggestions in fixed rule order; never empty.
    pub fn recommendations(&self) -> Vec<String> {
        let mut recommendations = Vec::new();
        if self.coverage < 0.4 {
            recommendations.push(REC_KEYWORDS.to_string());
        }
        if self.word_count < 30 {
            recommendations.push(REC_DETAIL.to_string());
        }
        if self.filler_ratio > 0.05 {
            recommendations.push(REC_FILLERS.to_string());
        }
        if self.confidence() == Level::Low {
            recommendations.push(REC_ELABORATE.to_string());
        }
        if self.coverage >= 0.6 && self.word_count >= 50 {
            recommendations.push(REC_ANECDOTE.to_string());
        }
        if recommendations.is_empty() {
            recommendations.push(REC_EXCELLENT.to_string());
        }
        recommendations
    }

    /// Collapse the metrics into the reported result.
    pub fn to_result(&self) -> AnalysisResult {
        let score = self.score();
        let performance_level = PerformanceTier::from_score(score);
        let feedback = match performance_level {
            PerformanceTier::NeedsImprovement => FEEDBACK_NEEDS_IMPROVEMENT,
            PerformanceTier::Average => FEEDBACK_AVERAGE,
            PerformanceTier::Good => FEEDBACK_GOOD,
        };
        let coverage = self.coverage_percent();

        AnalysisResult {
            score,
            confidence: self.confidence(),
            keyword_coverage: coverage,
            clarity_score: coverage,
            nervousness_level: self.nervousness(),
            feedback: feedback.to_string(),
            recommendations: self.recommendations(),
            performance_level,
        }
    }
}

/// Length band for a word count. Upper bounds are exclusive.
pub fn length_score(word_count: usize) -> u32 {
    match word_count {
        0..=9 => 10,
        10..=29 => 30,
        30..=59 => 60,
        60..=119 => 85,
        _ => 95,
    }
}

/// Count whole-word filler occurrences in already-normalized text.
pub fn count_fillers(text: &str) -> usize {
    FILLER_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(text).count())
        .sum()
}

/// Score `answer` against a known reference answer.
pub fn score_answer(reference: &ReferenceAnswer, answer: &str) -> AnalysisResult {
    AnalysisBreakdown::compute(reference, answer).to_result()
}

/// Analyzes answers against the reference answers of a question bank.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    bank: &'a QuestionBank,
}

impl<'a> Analyzer<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self { bank }
    }

    /// Analyze an answer. Unknown question ids yield
    /// [`AnalysisResult::question_not_found`] rather than an error.
    pub fn analyze(&self, question_id: u32, answer: &str) -> AnalysisResult {
        match self.analyze_detailed(question_id, answer) {
            Some((result, _)) => result,
            None => AnalysisResult::question_not_found(),
        }
    }

    /// Analyze an answer and also return the intermediate metrics.
    pub fn analyze_detailed(
        &self,
        question_id: u32,
        answer: &str,
    ) -> Option<(AnalysisResult, AnalysisBreakdown)> {
        let Some(reference) = self.bank.reference(question_id) else {
            tracing::debug!("no reference answer for question {question_id}");
            return None;
        };

        let breakdown = AnalysisBreakdown::compute(reference, answer);
        let result = breakdown.to_result();
        tracing::debug!(
            question_id,
            words = breakdown.word_count,
            matched = breakdown.matched_keywords.len(),
            fillers = breakdown.filler_count,
            score = result.score,
            "analyzed answer"
        );
        Some((result, breakdown))
    }
}
