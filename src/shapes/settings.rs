use crate::constants::{BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{env::var, path::PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub last_used_dir: Option<PathBuf>,
}

impl Settings {
    /// Starting folder for the file picker.
    pub fn get_default_path(&self) -> Option<PathBuf> {
        self.last_used_dir.clone().or_else(home_dir)
    }

    /// Service URL resolution order: config file, environment, default.
    pub fn resolve_base_url(&self) -> String {
        self.base_url
            .clone()
            .or_else(|| var(BASE_URL_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
