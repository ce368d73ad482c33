use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use url::Url;

use crate::{
    error::{DirectoryError, Result},
    source::{RosterLocation, DEFAULT_ROSTER_URL},
};

pub const DEFAULT_CONFIG_FILE: &str = "doctor_directory.toml";
pub const DEFAULT_PAGE_URL: &str = "http://localhost:3000/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub roster_url: String,
    pub roster_file: Option<PathBuf>,
    /// Base of the shareable page link; its query carries the filters.
    pub page_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster_url: DEFAULT_ROSTER_URL.into(),
            roster_file: None,
            page_url: DEFAULT_PAGE_URL.into(),
        }
    }
}

impl Settings {
    /// A local roster file wins over the URL when both are set.
    pub fn roster_location(&self) -> Result<RosterLocation> {
        match &self.roster_file {
            Some(path) => Ok(RosterLocation::File(path.clone())),
            None => RosterLocation::http(&self.roster_url),
        }
    }

    pub fn page_url(&self) -> Result<Url> {
        Url::parse(&self.page_url).map_err(|err| DirectoryError::invalid_url(&self.page_url, err))
    }
}

/// Defaults, then the TOML file, then environment. An explicitly named file
/// must exist; the default one is optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let raw = match config_path {
        Some(path) => Some(fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?),
        None => fs::read_to_string(DEFAULT_CONFIG_FILE).ok(),
    };
    if let Some(raw) = raw {
        apply_file(&mut settings, &raw)?;
    }

    apply_env(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, String>>(raw)
        .map_err(|err| DirectoryError::Config(err.to_string()))?;
    if let Some(v) = file_cfg.get("roster_url") {
        settings.roster_url = v.clone();
    }
    if let Some(v) = file_cfg.get("roster_file") {
        settings.roster_file = Some(PathBuf::from(v));
    }
    if let Some(v) = file_cfg.get("page_url") {
        settings.page_url = v.clone();
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("ROSTER_URL") {
        settings.roster_url = v;
    }
    if let Some(v) = var("APP__ROSTER_URL") {
        settings.roster_url = v;
    }

    if let Some(v) = var("ROSTER_FILE") {
        settings.roster_file = Some(PathBuf::from(v));
    }
    if let Some(v) = var("APP__ROSTER_FILE") {
        settings.roster_file = Some(PathBuf::from(v));
    }

    if let Some(v) = var("PAGE_URL") {
        settings.page_url = v;
    }
    if let Some(v) = var("APP__PAGE_URL") {
        settings.page_url = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
