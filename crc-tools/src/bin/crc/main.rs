mod cmd;
mod config;
mod util;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;

use crate::cmd::Context;
use crate::config::{Config, Configs};
use crate::util::logging::{setup_logging, LevelFilter};

#[derive(clap::Parser)]
#[clap(
    name = "crc",
    about = "Compute, trace and verify CRCs of any width from 1 to 64 bits",
    version
)]
struct Cli {
    /// Location for log file
    #[clap(long, global = true, help_heading = "LOG CONFIGURATION")]
    log_file: Option<PathBuf>,
    /// Log level, overriding the configuration and RUST_LOG
    #[clap(
        long,
        global = true,
        value_enum,
        ignore_case = true,
        help_heading = "LOG CONFIGURATION"
    )]
    log_level: Option<LevelFilter>,

    /// Additional configuration file (.toml, .json, .yaml or .yml)
    #[clap(long, global = true, value_name = "PATH", help_heading = "CONFIGURATION")]
    config: Option<PathBuf>,
    /// The configuration profile to use
    #[clap(
        long,
        global = true,
        default_value = "default",
        help_heading = "CONFIGURATION"
    )]
    profile: String,

    /// Additional catalog file, loaded after the ones from the configuration.
    ///
    /// Files with a .yaml or .yml extension hold a list of parameter sets, all others are read as
    /// CRC RevEng catalogue text. Variants replace earlier ones with the same name.
    #[clap(
        long = "catalog",
        global = true,
        value_name = "PATH",
        help_heading = "CONFIGURATION"
    )]
    catalogs: Vec<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Compute the checksums of a message
    Compute(cmd::compute::Cmd),
    /// Verify the CRC variants against their check values
    Check(cmd::check::Cmd),
    /// List all known CRC variants
    List(cmd::list::Cmd),
    /// Show the parameters of a CRC variant
    Info(cmd::info::Cmd),
    /// Show the register after every message bit
    Trace(cmd::trace::Cmd),
    /// Show the nibble stream configuring a nibble-wide hardware CRC unit
    Setup(cmd::setup::Cmd),
}

impl Subcommand {
    fn run(self, context: &Context) -> Result<()> {
        match self {
            Subcommand::Compute(cmd) => cmd.run(context),
            Subcommand::Check(cmd) => cmd.run(context),
            Subcommand::List(cmd) => cmd.run(context),
            Subcommand::Info(cmd) => cmd.run(context),
            Subcommand::Trace(cmd) => cmd.run(context),
            Subcommand::Setup(cmd) => cmd.run(context),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).context("Failed to load configuration.")?;

    let _logger_guard = setup_logging(
        cli.log_file.as_deref(),
        cli.log_level.or(config.general.log_level),
    )?;

    let context = Context::new(
        config.catalog.files.iter().chain(&cli.catalogs),
        config.catalog.select,
        cli.json || config.output.json,
    )?;

    cli.subcommand.run(&context)
}

/// Merges the configuration from the home directory, the working directory, and `--config`.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut conf_dirs = Vec::new();
    if let Some(user) = directories::UserDirs::new() {
        conf_dirs.push(user.home_dir().to_path_buf());
    }
    conf_dirs.push(PathBuf::from("."));

    let mut configs = Configs::new(conf_dirs);

    if let Some(path) = &cli.config {
        anyhow::ensure!(
            path.is_file(),
            "The configuration file {} does not exist.",
            path.display()
        );
        configs.merge(path.clone())?;
    }

    configs.select_defined(&cli.profile)
}
