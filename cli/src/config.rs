use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bagwords_core::ComponentConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Settings driving the `encode` command.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EncodeSettings {
    /// Component used to encode the samples.
    #[serde(default)]
    pub component: ComponentConfig,
    /// Encode on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
    /// Separator placed between counts of one vector.
    #[serde(default = "EncodeSettings::default_separator")]
    pub separator: String,
}

impl EncodeSettings {
    fn default_separator() -> String {
        " ".to_string()
    }
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            component: ComponentConfig::default(),
            parallel: false,
            separator: Self::default_separator(),
        }
    }
}

/// Where a command's settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// `--config <path>` was given.
    Explicit(PathBuf),
    /// `<command>.toml` was found in the working directory.
    WorkingDir(PathBuf),
    /// No file; built-in defaults apply.
    Defaults,
}

/// Picks the settings file for `command`.
///
/// An explicit path must exist; the implicit `<command>.toml` is optional.
pub fn resolve_settings(command: &str, explicit: Option<PathBuf>) -> Result<SettingsSource> {
    match explicit {
        Some(path) if path.is_file() => Ok(SettingsSource::Explicit(path)),
        Some(path) => bail!(
            "configuration file for `{command}` not found at {}",
            path.display()
        ),
        None => {
            let implicit = PathBuf::from(format!("{command}.toml"));
            if implicit.is_file() {
                Ok(SettingsSource::WorkingDir(implicit))
            } else {
                Ok(SettingsSource::Defaults)
            }
        }
    }
}

/// Loads TOML settings for `command`, or its defaults when no file applies.
pub fn load_settings<T>(command: &str, explicit: Option<PathBuf>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = match resolve_settings(command, explicit)? {
        SettingsSource::Explicit(path) | SettingsSource::WorkingDir(path) => path,
        SettingsSource::Defaults => {
            tracing::debug!("no {command}.toml found, using default {command} settings");
            return Ok(T::default());
        }
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read `{command}` settings from {}", path.display()))?;
    let settings = toml::from_str(&raw)
        .with_context(|| format!("invalid `{command}` settings in {}", path.display()))?;

    tracing::info!(path = %path.display(), "loaded {command} settings");
    Ok(settings)
}
