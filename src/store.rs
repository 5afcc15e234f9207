use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::settings::FilerSettings;

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;
        Some(base.join("snippet-filer").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<FilerSettings> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).with_context(|| {
                format!("snippet-filer settings {} are not valid json", self.path.display())
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(FilerSettings::default()),
            Err(err) => Err(err).with_context(|| {
                format!("cannot read snippet-filer settings {}", self.path.display())
            }),
        }
    }

    pub fn save(&self, settings: &FilerSettings) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("snippet-filer settings path has no parent directory")?;
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create settings directory {}", dir.display()))?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json).with_context(|| {
            format!("cannot write snippet-filer settings {}", self.path.display())
        })
    }
}
