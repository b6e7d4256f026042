use std::path::PathBuf;

use crate::cli::Cli;

/// Everything a single reset needs, built once from the parsed arguments.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    pub group: Option<String>,
    pub subscription: Option<String>,
    /// Config file to fall back on. `None` when no path was given and no home
    /// directory could be found.
    pub config_path: Option<PathBuf>,
    pub verbosity: u8,
}

impl AppContext {
    pub const fn new(
        group: Option<String>,
        subscription: Option<String>,
        config_path: Option<PathBuf>,
        verbosity: u8,
    ) -> Self {
        Self {
            group,
            subscription,
            config_path,
            verbosity,
        }
    }

    /// Convenience constructor applying the default config location.
    pub fn from_cli(cli: &Cli) -> Self {
        let config_path = cli
            .config
            .clone()
            .or_else(crate::config::default_config_path);
        let subscription = cli
            .subscription
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        Self::new(cli.group.clone(), subscription, config_path, cli.verbose)
    }
}
