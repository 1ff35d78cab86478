//! The `intervai init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create intervai.toml
    if std::path::Path::new("intervai.toml").exists() {
        println!("intervai.toml already exists, skipping.");
    } else {
        std::fs::write("intervai.toml", SAMPLE_CONFIG)?;
        println!("Created intervai.toml");
    }

    // Create example question bank
    let bank_path = std::path::Path::new("questions.toml");
    if bank_path.exists() {
        println!("questions.toml already exists, skipping.");
    } else {
        std::fs::write(bank_path, EXAMPLE_BANK)?;
        println!("Created questions.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit questions.toml and set question_bank in intervai.toml to use it");
    println!("  2. Run: intervai validate --bank questions.toml");
    println!("  3. Run: intervai practice --category Technical");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# intervai configuration

# Where session history is stored
data_dir = "${HOME}/.local/share/intervai"

# Questions asked per practice session
questions_per_session = 5

# Uncomment to use a custom question bank instead of the built-in one
# question_bank = "questions.toml"
"#;

const EXAMPLE_BANK: &str = r#"[[questions]]
id = 1
text = "Explain the difference between a stack and a queue."
category = "Technical"
ideal_answer = "Clear comparison of stack (LIFO) and queue (FIFO)."
keywords = ["stack", "queue", "LIFO", "FIFO", "push", "pop", "enqueue", "dequeue", "first", "last"]

[[questions]]
id = 2
text = "Tell me about a time you showed leadership."
category = "Behavioral"
ideal_answer = "Specific leadership example with positive outcomes."
keywords = ["leadership", "team", "initiative", "guide", "decision", "responsibility", "motivate", "delegate", "project", "outcome"]
"#;
