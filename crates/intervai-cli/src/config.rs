//! CLI configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use intervai_core::bank::{self, QuestionBank};
use intervai_core::selection::DEFAULT_QUESTIONS_PER_SESSION;
use intervai_core::store::{FileStore, SessionStore};

/// Top-level intervai configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervaiConfig {
    /// Directory holding the session history.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Questions asked in one practice session.
    #[serde(default = "default_questions_per_session")]
    pub questions_per_session: usize,
    /// Custom question bank TOML file (built-in bank when unset).
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    home_dir()
        .map(|h| h.join(".local").join("share").join("intervai"))
        .unwrap_or_else(|| PathBuf::from(".intervai"))
}
fn default_questions_per_session() -> usize {
    DEFAULT_QUESTIONS_PER_SESSION
}

impl Default for IntervaiConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            questions_per_session: default_questions_per_session(),
            question_bank: None,
        }
    }
}

impl IntervaiConfig {
    /// The question bank this configuration points at.
    pub fn load_bank(&self) -> Result<QuestionBank> {
        match &self.question_bank {
            Some(path) => bank::parse_bank(path),
            None => Ok(QuestionBank::builtin()),
        }
    }

    /// The session history under `data_dir`.
    pub fn open_store(&self) -> SessionStore<FileStore> {
        SessionStore::new(FileStore::new(&self.data_dir))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `intervai.toml` in the current directory
/// 2. `~/.config/intervai/config.toml`
///
/// `INTERVAI_DATA_DIR` overrides `data_dir` from any source.
pub fn load_config_from(path: Option<&Path>) -> Result<IntervaiConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("intervai.toml");
        if local.exists() {
            Some(local)
        } else {
            home_dir()
                .map(|h| h.join(".config").join("intervai").join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<IntervaiConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => IntervaiConfig::default(),
    };

    if let Ok(dir) = std::env::var("INTERVAI_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.question_bank = config.question_bank.as_deref().map(resolve_path);

    anyhow::ensure!(
        config.questions_per_session >= 1,
        "questions_per_session must be at least 1"
    );

    Ok(config)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
