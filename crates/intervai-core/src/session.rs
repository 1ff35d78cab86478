//! Interview sessions: answered questions aggregated into one summary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::model::{AnalysisResult, PerformanceTier, Question};

/// One question as answered during a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question_id: u32,
    /// Question text at the time it was answered.
    pub question: String,
    /// Raw answer text as submitted.
    pub answer: String,
    pub result: AnalysisResult,
}

impl AnsweredQuestion {
    pub fn new(question: &Question, answer: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            question_id: question.id,
            question: question.text.clone(),
            answer: answer.into(),
            result,
        }
    }
}

/// A complete practice run, summarized by its average score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Category the questions were drawn from ("All" for every category).
    pub category: String,
    pub questions: Vec<AnsweredQuestion>,
    /// Rounded mean of the per-question scores.
    pub average_score: u32,
    /// Stored as the short label ("Average" rather than "Average Performance").
    #[serde(with = "short_tier")]
    pub overall_performance: PerformanceTier,
}

mod short_tier {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::model::PerformanceTier;

    pub fn serialize<S: Serializer>(tier: &PerformanceTier, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(tier.short_label())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<PerformanceTier, D::Error> {
        let label = String::deserialize(d)?;
        PerformanceTier::from_short_label(&label).ok_or_else(|| {
            de::Error::unknown_variant(&label, &["Needs Improvement", "Average", "Good"])
        })
    }
}

impl InterviewSession {
    /// Build a session stamped with a fresh id and the current time.
    pub fn new(
        category: impl Into<String>,
        questions: Vec<AnsweredQuestion>,
    ) -> Result<Self, SessionError> {
        Self::from_parts(Uuid::new_v4(), Utc::now(), category, questions)
    }

    /// Build a session with an explicit id and timestamp.
    pub fn from_parts(
        id: Uuid,
        created_at: DateTime<Utc>,
        category: impl Into<String>,
        questions: Vec<AnsweredQuestion>,
    ) -> Result<Self, SessionError> {
        let average_score = average_score(&questions)?;
        Ok(Self {
            id,
            created_at,
            category: category.into(),
            questions,
            average_score,
            overall_performance: PerformanceTier::from_score(average_score),
        })
    }

    /// The last six characters of the id, as shown in history listings.
    pub fn short_id(&self) -> String {
        let id = self.id.simple().to_string();
        id[id.len() - 6..].to_string()
    }

    /// "Needs Improvement", "Average" or "Good".
    pub fn overall_label(&self) -> &'static str {
        self.overall_performance.short_label()
    }
}

/// Rounded mean of the per-question scores; errors when there are none.
pub fn average_score(questions: &[AnsweredQuestion]) -> Result<u32, SessionError> {
    if questions.is_empty() {
        return Err(SessionError::NoAnswers);
    }
    let total: u32 = questions.iter().map(|q| q.result.score).sum();
    Ok((f64::from(total) / questions.len() as f64).round() as u32)
}
