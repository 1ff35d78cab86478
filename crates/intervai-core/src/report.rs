//! History statistics and session rendering.

use serde::{Deserialize, Serialize};

use crate::model::Level;
use crate::session::InterviewSession;

/// Display band for a score: 70 and up is High, 40 and up is Medium.
///
/// Unlike [`crate::model::PerformanceTier`], a score of exactly 70 lands in
/// the top band here.
pub fn score_band(score: u32) -> Level {
    if score >= 70 {
        Level::High
    } else if score >= 40 {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Dashboard totals across the stored history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of sessions stored.
    pub sessions: usize,
    /// Rounded mean of the session averages.
    pub average_score: u32,
    /// Questions answered across all sessions.
    pub questions_answered: usize,
    /// Highest session average.
    pub best_score: u32,
}

impl HistorySummary {
    /// Summarize `sessions`; `None` when there are none.
    pub fn from_sessions(sessions: &[InterviewSession]) -> Option<Self> {
        if sessions.is_empty() {
            return None;
        }

        let total: u32 = sessions.iter().map(|s| s.average_score).sum();
        let average_score = (f64::from(total) / sessions.len() as f64).round() as u32;
        let best_score = sessions.iter().map(|s| s.average_score).max().unwrap_or(0);

        Some(Self {
            sessions: sessions.len(),
            average_score,
            questions_answered: sessions.iter().map(|s| s.questions.len()).sum(),
            best_score,
        })
    }
}

/// Format a session as markdown, one section per answered question.
pub fn session_to_markdown(session: &InterviewSession) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "## Session #{} ({})\n\n",
        session.short_id(),
        session.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    md.push_str(&format!(
        "**Overall score:** {} / 100 | {} | Category: {} | {} questions\n\n",
        session.average_score,
        session.overall_label(),
        session.category,
        session.questions.len()
    ));

    for (i, q) in session.questions.iter().enumerate() {
        let r = &q.result;
        md.push_str(&format!("### Q{}. {}\n\n", i + 1, q.question));
        md.push_str(&format!("> {}\n\n", q.answer.trim()));
        md.push_str("| Score | Confidence | Keywords | Clarity | Nervousness |\n");
        md.push_str("|-------|------------|----------|---------|-------------|\n");
        md.push_str(&format!(
            "| {} | {} | {}% | {}% | {} |\n\n",
            r.score, r.confidence, r.keyword_coverage, r.clarity_score, r.nervousness_level
        ));
        md.push_str(&format!("{}\n\n", r.feedback));
        for rec in &r.recommendations {
            md.push_str(&format!("- {rec}\n"));
        }
        md.push('\n');
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use crate::bank::QuestionBank;
    use crate::session::AnsweredQuestion;

    fn session_with_scores(scores: &[u32]) -> InterviewSession {
        let bank = QuestionBank::builtin();
        let analyzer = Analyzer::new(&bank);
        let question = bank.question(8).unwrap();
        let questions = scores
            .iter()
            .map(|&score| {
                let mut result = analyzer.analyze(8, "stack and queue");
                result.score = score;
                AnsweredQuestion::new(question, "stack and queue", result)
            })
            .collect();
        InterviewSession::new("Technical", questions).unwrap()
    }

    #[test]
    fn score_band_thresholds() {
        assert_eq!(score_band(39), Level::Low);
        assert_eq!(score_band(40), Level::Medium);
        assert_eq!(score_band(69), Level::Medium);
        assert_eq!(score_band(70), Level::High);
    }

    #[test]
    fn summary_of_empty_history() {
        assert!(HistorySummary::from_sessions(&[]).is_none());
    }

    #[test]
    fn summary_totals() {
        let sessions = vec![
            session_with_scores(&[80, 60, 40]),
            session_with_scores(&[90]),
            session_with_scores(&[30, 35]),
        ];
        let summary = HistorySummary::from_sessions(&sessions).unwrap();
        assert_eq!(summary.sessions, 3);
        // session averages are 60, 90 and 33 (32.5 rounds up)
        assert_eq!(summary.average_score, 61);
        assert_eq!(summary.questions_answered, 6);
        assert_eq!(summary.best_score, 90);
    }

    #[test]
    fn markdown_contains_per_question_details() {
        let session = session_with_scores(&[49]);
        let md = session_to_markdown(&session);
        assert!(md.contains(&format!("Session #{}", session.short_id())));
        assert!(md.contains("**Overall score:** 49 / 100 | Average | Category"));
        assert!(md.contains("### Q1. Explain the difference between a stack and a queue."));
        assert!(md.contains("> stack and queue"));
        assert!(md.contains("- Provide more detailed responses"));
    }
}
