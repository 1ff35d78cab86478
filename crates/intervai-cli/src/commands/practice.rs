//! The `intervai practice` command.
//!
//! Asks a random subset of questions and reads one answer per line from
//! stdin. End of input submits empty answers for the remaining questions.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use intervai_core::analyzer::Analyzer;
use intervai_core::selection;
use intervai_core::session::{AnsweredQuestion, InterviewSession};

use crate::config::load_config_from;

pub fn execute(
    category: String,
    count: Option<usize>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = config.load_bank()?;

    let count = count.unwrap_or(config.questions_per_session);
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let pool = selection::questions_in(&bank, &category);
    if pool.is_empty() {
        anyhow::bail!(
            "no questions in category '{}'. Available: {}",
            category,
            selection::categories(&bank).join(", ")
        );
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picked = selection::pick_questions(&pool, count, &mut rng);
    tracing::debug!("picked {} of {} questions", picked.len(), pool.len());

    let analyzer = Analyzer::new(&bank);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answered = Vec::with_capacity(picked.len());

    for (i, question) in picked.iter().enumerate() {
        println!(
            "Q{}/{} [{}] {}",
            i + 1,
            picked.len(),
            question.category,
            question.text
        );

        let answer = match lines.next() {
            Some(line) => line.context("failed to read answer from stdin")?,
            None => String::new(),
        };

        let result = analyzer.analyze(question.id, &answer);
        println!(
            "  Score: {} ({})\n",
            result.score, result.performance_level
        );
        answered.push(AnsweredQuestion::new(question, answer, result));
    }

    let session = InterviewSession::new(category, answered)?;
    let short_id = session.short_id();
    let average = session.average_score;
    let overall = session.overall_label();

    let mut store = config.open_store();
    store
        .save(session)
        .context("failed to save practice session")?;

    println!("Session #{short_id}: {average}/100 ({overall})");
    println!("Run `intervai show {short_id}` for detailed feedback.");

    Ok(())
}
