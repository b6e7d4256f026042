use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Location of the devbox config file relative to the home directory.
pub const CONFIG_RELATIVE_PATH: &str = ".config/nc-devbox/config.yaml";

/// Contents of the `nc-devbox` config file.
///
/// The file is shared with the devbox provisioning tooling, so most of it is
/// only modeled here; the reset reads `azure.resource_group` and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DevboxConfig {
    pub time_to_live: String,
    pub azure: AzureConfig,
    pub vm: VmConfig,
    pub ssh: SshConfig,
    pub sync: Vec<String>,
    pub post_create_scripts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AzureConfig {
    pub resource_group: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VmConfig {
    pub name: String,
    pub size: String,
    pub image: String,
    pub disk_size: i64,
    pub auto_shutdown_time: String,
    pub cloud_init_path: String,
    pub enable_security_tags: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SshConfig {
    pub private_key_path: String,
}

/// `<home>/.config/nc-devbox/config.yaml`, or `None` without a home directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_RELATIVE_PATH))
}

impl DevboxConfig {
    /// Read and parse the config file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid YAML for
    /// this schema. A missing file is an error too.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse config contents.
    ///
    /// # Errors
    /// Returns an error if `content` is not valid YAML for this schema.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}
