//! The `intervai clear` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut store = config.open_store();

    let count = store.list().len();
    store.clear().context("failed to clear session history")?;

    println!("Cleared {count} session(s).");
    Ok(())
}
