//! The `intervai analyze` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use intervai_core::analyzer::Analyzer;
use intervai_core::model::AnalysisResult;

use crate::config::load_config_from;

pub fn execute(
    question_id: u32,
    answer: Option<String>,
    file: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = config.load_bank()?;

    let answer = match (answer, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read answer from {}", path.display()))?,
        (None, None) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read answer from stdin")?;
            text
        }
    };

    if bank.question(question_id).is_none() {
        tracing::warn!("question {question_id} is not in the question bank");
    }

    let result = Analyzer::new(&bank).analyze(question_id, &answer);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            if let Some(q) = bank.question(question_id) {
                println!("Q{}: {}\n", q.id, q.text);
            }
            print_result(&result);
        }
    }

    Ok(())
}

/// Print one analysis result in the text layout shared with `show`.
pub fn print_result(result: &AnalysisResult) {
    println!("Score: {}/100 ({})", result.score, result.performance_level);
    println!(
        "Confidence: {} | Keywords: {}% | Clarity: {}% | Nervousness: {}",
        result.confidence,
        result.keyword_coverage,
        result.clarity_score,
        result.nervousness_level
    );
    println!("{}", result.feedback);
    for rec in &result.recommendations {
        println!("  -> {rec}");
    }
}
