//! The `intervai history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use intervai_core::report::{score_band, HistorySummary};

use crate::config::load_config_from;

pub fn execute(format: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let sessions = config.open_store().list();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    let Some(summary) = HistorySummary::from_sessions(&sessions) else {
        println!("No sessions yet. Run `intervai practice` to start one.");
        return Ok(());
    };

    println!(
        "Sessions: {} | Avg Score: {} | Questions: {} | Best Score: {}\n",
        summary.sessions, summary.average_score, summary.questions_answered, summary.best_score
    );

    let mut table = Table::new();
    table.set_header(vec![
        "Session",
        "Date",
        "Category",
        "Score",
        "Confidence",
        "Performance",
    ]);

    for session in &sessions {
        table.add_row(vec![
            Cell::new(format!("#{}", session.short_id())),
            Cell::new(session.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&session.category),
            Cell::new(session.average_score),
            Cell::new(score_band(session.average_score)),
            Cell::new(session.overall_label()),
        ]);
    }

    println!("{table}");

    Ok(())
}
