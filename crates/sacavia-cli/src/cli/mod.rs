//! CLI for the Sacavia client helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sacavia_core::config::{self, EnvironmentConfig};

use commands::{run_env, run_initials, run_resolve};

/// Top-level CLI for the Sacavia client helpers.
#[derive(Debug, Parser)]
#[command(name = "sacavia")]
#[command(about = "Sacavia: media URL and profile display helpers", long_about = None)]
pub struct Cli {
    /// Use the local development API regardless of config.toml.
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve stored media references to absolute URLs.
    Resolve {
        /// Full URLs, root-relative paths, or bare file identifiers.
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print the avatar initials for a display name.
    Initials {
        /// Display name (quote it if it has spaces).
        name: String,
    },

    /// Show the active environment and base API URL.
    Env,
}

impl Cli {
    /// `--dev` wins over the config file.
    fn environment(&self) -> Result<EnvironmentConfig> {
        if self.dev {
            return Ok(EnvironmentConfig::development());
        }
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg.environment_config())
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let env = cli.environment()?;

        match cli.command {
            CliCommand::Resolve { inputs } => run_resolve(&env, &inputs),
            CliCommand::Initials { name } => run_initials(&name),
            CliCommand::Env => run_env(&env),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
