//! intervai-core: answer analysis, session aggregation, and storage.
//!
//! This crate holds the rule-based answer scorer, the built-in question bank,
//! and the session history that the intervai CLI builds on.

pub mod analyzer;
pub mod bank;
pub mod error;
pub mod model;
pub mod report;
pub mod selection;
pub mod session;
pub mod store;

pub use analyzer::Analyzer;
pub use bank::QuestionBank;
pub use error::{SessionError, StoreError};
pub use model::{AnalysisResult, Level, PerformanceTier, Question, ReferenceAnswer};
pub use session::{AnsweredQuestion, InterviewSession};
pub use store::{FileStore, KeyValueStore, MemoryStore, SessionStore};
