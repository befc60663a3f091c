use crate::data::locale::Language;
use crate::data::persistence::Persistable;
use crate::data::theme::ThemeMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default)]
    pub language: Language,
}

/// Wrapper that reads the `settings` key from config.yaml, so the file can
/// grow other top-level sections without breaking older readers.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    pub fn load_from(dir: &Path) -> Result<Self> {
        let settings = SettingsWrapper::load_from(dir)?.settings;
        log::debug!("loaded settings {settings:?}");
        Ok(settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let wrapper = SettingsWrapper { settings: *self };
        wrapper.save_to(dir)
    }

    /// Applies command-line overrides on top of the stored values.
    pub fn with_overrides(mut self, theme: Option<ThemeMode>, language: Option<Language>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(language) = language {
            self.language = language;
        }
        self
    }
}
