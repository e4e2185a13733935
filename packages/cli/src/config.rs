use serde::{Deserialize, Serialize};
use stackblocks_evaluator::{EvaluatorOptions, DEFAULT_BINDING};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "stackblocks.config.json";

/// Stackblocks configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding lesson snapshots (`*.json`)
    #[serde(default = "default_lessons_dir")]
    pub lessons_dir: String,

    /// Scope name bound to ForEach elements without an explicit `item`
    #[serde(default = "default_binding")]
    pub default_binding: String,

    /// Name hashed into the prefix of generated node ids
    #[serde(default = "default_id_seed")]
    pub id_seed: String,
}

fn default_lessons_dir() -> String {
    "lessons".to_string()
}

fn default_binding() -> String {
    DEFAULT_BINDING.to_string()
}

fn default_id_seed() -> String {
    "stackblocks".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_lessons_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.lessons_dir)
    }

    pub fn evaluator_options(&self) -> EvaluatorOptions {
        EvaluatorOptions {
            default_binding: self.default_binding.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lessons_dir: default_lessons_dir(),
            default_binding: default_binding(),
            id_seed: default_id_seed(),
        }
    }
}
