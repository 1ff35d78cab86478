//! Category filtering and random question selection for a practice run.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bank::QuestionBank;
use crate::model::Question;

/// Pseudo-category that selects every question.
pub const ALL_CATEGORIES: &str = "All";

/// Questions asked per session unless configured otherwise.
pub const DEFAULT_QUESTIONS_PER_SESSION: usize = 5;

/// "All" followed by each distinct category in first-seen order.
pub fn categories(bank: &QuestionBank) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for q in bank.questions() {
        if !categories.iter().any(|c| c == &q.category) {
            categories.push(q.category.clone());
        }
    }
    categories
}

/// Questions in `category` (case-insensitive), or every question for "All".
pub fn questions_in<'a>(bank: &'a QuestionBank, category: &str) -> Vec<&'a Question> {
    if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return bank.questions().iter().collect();
    }
    bank.questions()
        .iter()
        .filter(|q| q.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Shuffle `questions` and keep at most `max` of them.
pub fn pick_questions<'a, R: Rng + ?Sized>(
    questions: &[&'a Question],
    max: usize,
    rng: &mut R,
) -> Vec<&'a Question> {
    let mut picked = questions.to_vec();
    picked.shuffle(rng);
    picked.truncate(max);
    picked
}
