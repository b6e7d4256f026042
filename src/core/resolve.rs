use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::{app::context::AppContext, config::DevboxConfig};

/// Environment variables consulted for the resource group, in order.
pub const GROUP_ENV_VARS: [&str; 2] = ["AZ_GROUP", "DB_AZ_RESOURCE_GROUP"];

/// Where the resource group name came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Flag,
    Env(&'static str),
    Config(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--group"),
            Self::Env(var) => write!(f, "${var}"),
            Self::Config(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub group: String,
    pub source: Source,
}

/// Picks the resource group from flag, environment, then config file.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    flag: Option<String>,
    env: Option<(&'static str, String)>,
    config_path: Option<PathBuf>,
}

impl Resolver {
    pub const fn new(
        flag: Option<String>,
        env: Option<(&'static str, String)>,
        config_path: Option<PathBuf>,
    ) -> Self {
        Self {
            flag,
            env,
            config_path,
        }
    }

    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.group.clone(), group_from_env(), ctx.config_path.clone())
    }

    /// Return the first non-empty resource group.
    ///
    /// The config file is only opened when neither the flag nor the
    /// environment supplied a name.
    ///
    /// # Errors
    /// Returns an error if the config file has to be read and is missing or
    /// malformed, or if no source yields a name.
    pub fn resolve(&self) -> Result<Resolved> {
        if let Some(group) = non_empty(self.flag.as_deref()) {
            return Ok(Resolved {
                group,
                source: Source::Flag,
            });
        }

        if let Some((var, value)) = &self.env
            && let Some(group) = non_empty(Some(value.as_str()))
        {
            return Ok(Resolved {
                group,
                source: Source::Env(*var),
            });
        }

        if let Some(path) = &self.config_path {
            let from_config = group_from_config(path).with_context(|| {
                format!(
                    "no resource group given by --group, ${} or ${}, and the config fallback failed",
                    GROUP_ENV_VARS[0], GROUP_ENV_VARS[1]
                )
            })?;
            if let Some(group) = from_config {
                return Ok(Resolved {
                    group,
                    source: Source::Config(path.clone()),
                });
            }
            debug!("{} has no azure.resource_group", path.display());
        }

        bail!(
            "no resource group given; pass --group, set ${} or ${}, or set azure.resource_group in {}",
            GROUP_ENV_VARS[0],
            GROUP_ENV_VARS[1],
            self.config_path
                .as_deref()
                .map_or_else(|| "the devbox config".to_string(), |p| p.display().to_string())
        )
    }
}

/// First supported environment variable holding a non-empty value.
pub fn group_from_env() -> Option<(&'static str, String)> {
    GROUP_ENV_VARS.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .and_then(|v| non_empty(Some(v.as_str())))
            .map(|v| (*var, v))
    })
}

fn group_from_config(path: &Path) -> Result<Option<String>> {
    let cfg = DevboxConfig::load(path)?;
    Ok(non_empty(Some(cfg.azure.resource_group.as_str())))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
