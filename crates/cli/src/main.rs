use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use imodels::commands::{
    identifier_command, list_command, lookup_command, model_command, show_command,
};
use imodels::{init_tracing, resolve_probe_config};
use tracing::debug;

/// Apple device model lookup CLI.
///
/// This CLI is a thin wrapper around `imodels-core` (exposed in code as `imodels_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "imodels",
    version,
    about = "Translate Apple hardware identifiers into marketing names",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    probe: ProbeArgs,

    /// Emit JSON instead of human-readable text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct ProbeArgs {
    /// Read the identifier from the simulator environment variable instead of the hardware.
    #[arg(long, global = true, default_value_t = false)]
    simulated: bool,

    /// Name of the environment variable holding the simulated model identifier.
    #[arg(long, global = true)]
    simulator_var: Option<String>,

    /// Optional JSON probe config file (`simulated`, `simulator_variable`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show identifier, model name, family and platform of this device.
    Show,

    /// Print the raw hardware identifier of this device (e.g. `iPhone16,1`).
    Identifier,

    /// Print the model name of this device.
    ///
    /// Unknown identifiers fall back to the raw identifier; simulators get a
    /// " Simulator" suffix.
    Model,

    /// Look up the model name for an explicit identifier.
    Lookup {
        /// Hardware identifier to resolve, e.g. `iPad16,6`.
        identifier: String,
    },

    /// List every identifier in the catalog.
    List {
        /// Restrict to one family: iphone, ipod, ipad, watch, apple_tv, reality_device.
        #[arg(long)]
        family: Option<String>,
    },

    /// Print the library version.
    Version,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = resolve_probe_config(
        cli.probe.config.as_deref(),
        cli.probe.simulated,
        cli.probe.simulator_var,
    )?;
    debug!(?config, "resolved probe config");

    // Default to the Show command if none is provided.
    match cli.command.unwrap_or(Command::Show) {
        Command::Show => show_command(&config, cli.json)?,
        Command::Identifier => identifier_command(&config, cli.json)?,
        Command::Model => model_command(&config, cli.json)?,
        Command::Lookup { identifier } => lookup_command(&identifier, cli.json)?,
        Command::List { family } => list_command(family.as_deref(), cli.json)?,
        Command::Version => println!("imodels v{}", imodels_core::version()),
    }

    Ok(())
}
