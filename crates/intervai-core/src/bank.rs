//! Question bank: the static questions and reference answers.
//!
//! Ships a built-in bank and loads custom banks from TOML files, with a
//! validation pass for common authoring mistakes.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, ReferenceAnswer};

/// Questions paired one-to-one with their reference answers by id.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    answers: Vec<ReferenceAnswer>,
}

impl QuestionBank {
    /// Build a bank from a question feed and a parallel reference answer feed.
    pub fn new(questions: Vec<Question>, answers: Vec<ReferenceAnswer>) -> Self {
        Self { questions, answers }
    }

    /// The bank that ships with intervai.
    pub fn builtin() -> Self {
        let (questions, answers) = BUILTIN
            .iter()
            .map(|&(id, text, category, ideal, keywords)| {
                (
                    Question {
                        id,
                        text: text.to_string(),
                        category: category.to_string(),
                    },
                    ReferenceAnswer {
                        question_id: id,
                        ideal_answer: ideal.to_string(),
                        keywords: keywords.iter().map(|k| k.to_string()).collect(),
                    },
                )
            })
            .unzip();
        Self { questions, answers }
    }

    /// All questions in feed order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// All reference answers in feed order.
    pub fn answers(&self) -> &[ReferenceAnswer] {
        &self.answers
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn reference(&self, question_id: u32) -> Option<&ReferenceAnswer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

type BuiltinEntry = (u32, &'static str, &'static str, &'static str, &'static [&'static str]);

const BUILTIN: &[BuiltinEntry] = &[
    (
        1,
        "Tell me about yourself and your professional background.",
        "General",
        "A concise summary of education, experience, skills, and career goals.",
        &["experience", "education", "skills", "background", "career", "professional", "degree", "university", "project", "work"],
    ),
    (
        2,
        "What are your greatest strengths?",
        "General",
        "Specific strengths with examples demonstrating them.",
        &["strength", "problem-solving", "communication", "teamwork", "leadership", "adaptable", "detail", "organized", "analytical", "creative"],
    ),
    (
        3,
        "Where do you see yourself in 5 years?",
        "General",
        "Clear vision aligned with role and company growth.",
        &["growth", "career", "goal", "develop", "leadership", "contribute", "learn", "advance", "role", "skill"],
    ),
    (
        4,
        "Describe a challenging situation you faced and how you handled it.",
        "Behavioral",
        "STAR method response showing problem-solving ability.",
        &["challenge", "situation", "action", "result", "solution", "resolved", "overcome", "team", "approach", "learned"],
    ),
    (
        5,
        "How do you handle working under pressure?",
        "Behavioral",
        "Strategies for managing stress and maintaining productivity.",
        &["pressure", "prioritize", "deadline", "organize", "calm", "focus", "manage", "stress", "plan", "efficient"],
    ),
    (
        6,
        "Tell me about a time you showed leadership.",
        "Behavioral",
        "Specific leadership example with positive outcomes.",
        &["leadership", "team", "initiative", "guide", "decision", "responsibility", "motivate", "delegate", "project", "outcome"],
    ),
    (
        7,
        "What is Object-Oriented Programming?",
        "Technical",
        "Explanation of OOP concepts with examples.",
        &["class", "object", "inheritance", "encapsulation", "polymorphism", "abstraction", "method", "instance", "reusable", "modular"],
    ),
    (
        8,
        "Explain the difference between a stack and a queue.",
        "Technical",
        "Clear comparison of stack (LIFO) and queue (FIFO).",
        &["stack", "queue", "LIFO", "FIFO", "push", "pop", "enqueue", "dequeue", "first", "last"],
    ),
    (
        9,
        "What is the importance of data structures in software development?",
        "Technical",
        "Explanation of efficiency, organization, and optimization.",
        &["efficiency", "data", "algorithm", "organize", "performance", "optimize", "search", "sort", "complexity", "structure"],
    ),
    (
        10,
        "Why should we hire you?",
        "General",
        "Unique value proposition aligned with role requirements.",
        &["value", "skill", "experience", "contribute", "passionate", "fit", "unique", "quality", "deliver", "team"],
    ),
    (
        11,
        "How do you prioritize tasks when you have multiple deadlines?",
        "Behavioral",
        "Systematic approach to task management and prioritization.",
        &["prioritize", "deadline", "urgent", "important", "organize", "schedule", "plan", "communicate", "manage", "time"],
    ),
    (
        12,
        "What is a REST API and how does it work?",
        "Technical",
        "Explanation of REST principles, HTTP methods, and API design.",
        &["REST", "API", "HTTP", "GET", "POST", "endpoint", "request", "response", "resource", "JSON"],
    ),
];

/// Intermediate TOML structure for question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    text: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    ideal_answer: String,
    #[serde(default)]
    keywords: Vec<String>,
}

fn default_category() -> String {
    "General".to_string()
}

/// Parse a TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let (questions, answers) = parsed
        .questions
        .into_iter()
        .map(|q| {
            (
                Question {
                    id: q.id,
                    text: q.text,
                    category: q.category,
                },
                ReferenceAnswer {
                    question_id: q.id,
                    ideal_answer: q.ideal_answer,
                    keywords: q.keywords,
                },
            )
        })
        .unzip();

    let bank = QuestionBank::new(questions, answers);
    tracing::debug!(
        "loaded {} questions from {}",
        bank.len(),
        source_path.display()
    );
    Ok(bank)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "question bank is empty".into(),
        });
    }

    // Check for duplicate question IDs
    let mut seen_ids = HashSet::new();
    for q in bank.questions() {
        if !seen_ids.insert(q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in bank.questions() {
        if q.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: "question text is empty".into(),
            });
        }
        if bank.reference(q.id).is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id),
                message: "no reference answer for question".into(),
            });
        }
    }

    for a in bank.answers() {
        if bank.question(a.question_id).is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(a.question_id),
                message: "reference answer has no matching question".into(),
            });
        }

        // An empty keyword list makes every answer score 0% coverage
        if a.keywords.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(a.question_id),
                message: "no keywords defined".into(),
            });
        }

        let mut seen_keywords = HashSet::new();
        for kw in &a.keywords {
            if !seen_keywords.insert(kw.to_lowercase()) {
                warnings.push(ValidationWarning {
                    question_id: Some(a.question_id),
                    message: format!("duplicate keyword: {kw}"),
                });
            }
        }
    }

    warnings
}
