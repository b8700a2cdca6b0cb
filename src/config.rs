//! Bridge credential and light group configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "HUEDO_CONFIG";

/// Returns the config file location.
///
/// `HUEDO_CONFIG` wins when set and non-empty, otherwise
/// `~/.config/huedo.yaml`.
pub fn default_config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("huedo.yaml"),
    }
}

/// The bridge a client talks to.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct HubConfig {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub user: String,
}

/// A locally named list of light ids.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct LightGroup {
    #[serde(default)]
    pub lights: Vec<u32>,
}

/// Contents of the huedo config file.
///
/// A missing file loads as an unpaired config, so a fresh install can run
/// `init` without creating anything first.
///
/// # Example
///
/// ```
/// use huedo::HueConfig;
///
/// let mut config = HueConfig::default();
/// assert!(!config.is_paired());
///
/// config.hub.ip = "10.0.0.2".into();
/// config.hub.user = "abc".into();
/// assert_eq!(config.build_url("lights/1"), "https://10.0.0.2/api/abc/lights/1");
/// ```
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct HueConfig {
    #[serde(default)]
    pub hub: HubConfig,
    #[serde(default)]
    pub lightgroups: BTreeMap<String, LightGroup>,
    /// Top-level keys huedo does not use, written back untouched on save.
    #[serde(flatten)]
    extra: serde_yaml::Mapping,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl HueConfig {
    /// A paired config with no file behind it.
    #[cfg(test)]
    pub(crate) fn paired(ip: &str, user: &str) -> Self {
        HueConfig {
            hub: HubConfig {
                ip: ip.to_string(),
                user: user.to_string(),
            },
            ..Self::default()
        }
    }

    /// Load the config from the default location.
    pub fn load_default() -> Result<Self> {
        Self::load(&default_config_path())
    }

    /// Load the config from `path`, treating a missing file as unpaired.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("no config at {}, starting unconfigured", path.display());
            return Ok(HueConfig {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let raw = fs::read_to_string(path).map_err(|e| Error::config("read", path, e))?;
        let mut config: HueConfig = if raw.trim().is_empty() {
            HueConfig::default()
        } else {
            serde_yaml::from_str(&raw).map_err(Error::YamlLoad)?
        };
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// File this config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether a bridge address and username are both known.
    pub fn is_paired(&self) -> bool {
        !self.hub.ip.is_empty() && !self.hub.user.is_empty()
    }

    /// Build an authenticated URL for a resource fragment such as `lights/3`.
    pub fn build_url(&self, fragment: &str) -> String {
        format!(
            "https://{}/api/{}/{}",
            self.hub.ip,
            self.hub.user,
            fragment.trim_start_matches('/')
        )
    }

    pub fn get_lightgroup(&self, name: &str) -> Result<&LightGroup> {
        self.lightgroups
            .get(name)
            .ok_or_else(|| Error::LightGroupNotFound(name.to_string()))
    }

    /// Store a new bridge credential and write the config out.
    pub fn update_user(&mut self, hub_ip: &str, user: &str) -> Result<()> {
        self.hub.ip = hub_ip.to_string();
        self.hub.user = user.to_string();
        self.save()
    }

    /// Write the config as it exists in memory to its file.
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => default_config_path(),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::config("create", parent, e))?;
            }
        }

        let raw = serde_yaml::to_string(self).map_err(Error::YamlDump)?;
        info!("writing config to {}", path.display());
        fs::write(&path, raw).map_err(|e| Error::config("write", &path, e))
    }
}
