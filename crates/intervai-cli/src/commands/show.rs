//! The `intervai show` command.

use std::path::PathBuf;

use anyhow::Result;

use intervai_core::report::session_to_markdown;

use super::analyze::print_result;
use crate::config::load_config_from;

pub fn execute(id: String, format: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = config.open_store();

    let Some(session) = store.find(&id) else {
        anyhow::bail!("session not found: {id}");
    };

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&session)?),
        "markdown" | "md" => print!("{}", session_to_markdown(&session)),
        _ => {
            println!(
                "Session #{} ({})",
                session.short_id(),
                session.created_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!(
                "Overall Score: {}/100 | {} | {} | {} Questions",
                session.average_score,
                session.category,
                session.overall_label(),
                session.questions.len()
            );

            for (i, q) in session.questions.iter().enumerate() {
                println!("\nQ{}: {}", i + 1, q.question);
                println!("  \"{}\"", q.answer.trim());
                print_result(&q.result);
            }
        }
    }

    Ok(())
}
