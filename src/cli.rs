use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// janitor-reset command-line interface
#[derive(Parser, Debug, Clone)]
#[command(
    name = "janitor-reset",
    version,
    about = "Refresh cleanup tags on an Azure resource group so the janitor leaves it alone",
    long_about = None
)]
pub struct Cli {
    /// Resource group to reset (falls back to $AZ_GROUP, $DB_AZ_RESOURCE_GROUP, then the config file)
    #[arg(short, long, value_name = "NAME")]
    pub group: Option<String>,

    /// Azure subscription that owns the resource group
    #[arg(short, long, value_name = "NAME")]
    pub subscription: Option<String>,

    /// Config file to read the resource group from (defaults to ~/.config/nc-devbox/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
