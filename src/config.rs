use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::{
        utils::RootChars,
        TangoError,
    },
    persistence::Storage,
};

pub const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_CONTRAST_THRESHOLD: usize = 1; // Near-homophones only
pub const DEFAULT_ROOT_SUGGESTION_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub batch_size: usize,
    pub contrast_threshold: usize,
    pub root_suggestion_limit: usize,
    pub root_chars: RootChars,
    pub catalog_file: String,
    pub state_file: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            root_suggestion_limit: DEFAULT_ROOT_SUGGESTION_LIMIT,
            root_chars: RootChars::All,
            catalog_file: "master_vocab.json".to_string(),
            state_file: "user_state.json".to_string(),
        }
    }
}

impl EngineConfig {
    /// Reads `settings.json`, falling back to defaults when it is absent.
    pub fn load(storage: &Storage) -> Result<Self, TangoError> {
        let config = storage
            .load_json::<EngineConfig>(SETTINGS_FILE)
            .map_err(|e| TangoError::Config(format!("Failed to read {}: {}", SETTINGS_FILE, e)))?
            .unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, storage: &Storage) -> Result<(), TangoError> {
        storage.save_json(self, SETTINGS_FILE)
    }

    pub fn validate(&self) -> Result<(), TangoError> {
        if self.catalog_file.trim().is_empty() || self.state_file.trim().is_empty() {
            return Err(TangoError::Config("file names must not be empty".to_string()));
        }
        if self.catalog_file == self.state_file {
            return Err(TangoError::Config(format!(
                "catalog and state cannot share the file '{}'",
                self.catalog_file
            )));
        }
        Ok(())
    }
}
