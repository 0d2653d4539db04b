use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::adder::ADD_SYMBOL;
use crate::loader::LibrarySource;
use crate::presentation::{FieldId, ToastDuration, DEFAULT_MESSAGE_PREFIX};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySection {
    #[serde(default = "default_library_name")]
    pub name: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
    /// Resolve the symbol from this binary instead of a shared object.
    #[serde(default = "default_in_process")]
    pub in_process: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationSetting {
    #[default]
    Short,
    Long,
}

impl From<DurationSetting> for ToastDuration {
    fn from(setting: DurationSetting) -> Self {
        match setting {
            DurationSetting::Short => ToastDuration::Short,
            DurationSetting::Long => ToastDuration::Long,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSection {
    #[serde(default = "default_message_prefix")]
    pub message_prefix: String,
    #[serde(default)]
    pub toast_duration: DurationSetting,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldsSection {
    #[serde(default = "default_first_field")]
    pub first: String,
    #[serde(default = "default_second_field")]
    pub second: String,
    #[serde(default = "default_trigger")]
    pub trigger: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SampleConfig {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub fields: FieldsSection,
}

impl SampleConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Reads the user config if there is one, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("myjnisample").join("config.toml"))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn library_source(&self) -> LibrarySource {
        if self.library.in_process {
            LibrarySource::InProcess
        } else {
            LibrarySource::Named {
                name: self.library.name.clone(),
                search_paths: self.library.search_paths.clone(),
            }
        }
    }

    pub fn first_field(&self) -> FieldId {
        FieldId::new(&self.fields.first)
    }

    pub fn second_field(&self) -> FieldId {
        FieldId::new(&self.fields.second)
    }

    pub fn trigger_field(&self) -> FieldId {
        FieldId::new(&self.fields.trigger)
    }
}

impl Default for LibrarySection {
    fn default() -> Self {
        Self {
            name: default_library_name(),
            symbol: default_symbol(),
            search_paths: vec![],
            in_process: default_in_process(),
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            message_prefix: default_message_prefix(),
            toast_duration: DurationSetting::default(),
        }
    }
}

impl Default for FieldsSection {
    fn default() -> Self {
        Self {
            first: default_first_field(),
            second: default_second_field(),
            trigger: default_trigger(),
        }
    }
}

fn default_library_name() -> String {
    "native_lib".to_string()
}

fn default_symbol() -> String {
    ADD_SYMBOL.to_string()
}

fn default_in_process() -> bool {
    true
}

fn default_message_prefix() -> String {
    DEFAULT_MESSAGE_PREFIX.to_string()
}

fn default_first_field() -> String {
    "number_1".to_string()
}

fn default_second_field() -> String {
    "number_2".to_string()
}

fn default_trigger() -> String {
    "sum".to_string()
}
