//! The `intervai validate` command.

use std::path::PathBuf;

use anyhow::Result;

use intervai_core::bank;
use intervai_core::selection;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let bank = bank::parse_bank(&bank_path)?;

    let categories = selection::categories(&bank);
    println!(
        "Question bank: {} ({} questions, categories: {})",
        bank_path.display(),
        bank.len(),
        categories[1..].join(", ")
    );

    let warnings = bank::validate_bank(&bank);
    for w in &warnings {
        let prefix = w
            .question_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
