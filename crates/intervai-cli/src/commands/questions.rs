//! The `intervai questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use intervai_core::selection::{self, ALL_CATEGORIES};

use crate::config::load_config_from;

pub fn execute(category: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = config.load_bank()?;

    let category = category.unwrap_or_else(|| ALL_CATEGORIES.to_string());
    let questions = selection::questions_in(&bank, &category);
    if questions.is_empty() {
        anyhow::bail!(
            "no questions in category '{}'. Available: {}",
            category,
            selection::categories(&bank).join(", ")
        );
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Category", "Question"]);
    for q in &questions {
        table.add_row(vec![
            Cell::new(q.id),
            Cell::new(&q.category),
            Cell::new(&q.text),
        ]);
    }

    println!("{table}");
    println!("{} questions", questions.len());

    Ok(())
}
