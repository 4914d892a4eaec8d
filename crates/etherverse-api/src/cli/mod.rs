//! CLI command definitions for the `etherverse` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod awesome;
pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};

/// Ethereum chat proxy and curated resource browser.
#[derive(Parser)]
#[command(name = "etherverse", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to a config file. Errors in an explicitly given file are fatal.
    #[arg(long, global = true, env = "ETHERVERSE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (`POST /api/ask`, `GET /api/awesome`).
    Serve {
        /// Port to listen on. Defaults to the configured port.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to. Defaults to the configured host.
        #[arg(long)]
        host: Option<String>,
    },

    /// Start an interactive chat session.
    Chat {
        /// Talk to a running Etherverse server instead of the upstream directly.
        #[arg(long)]
        server: Option<String>,

        /// Wallet address to attach to requests.
        #[arg(long)]
        address: Option<String>,
    },

    /// Browse the Awesome Ethereum list.
    Awesome {
        /// Case-insensitive filter over resource names and descriptions.
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Steady-ticking cyan spinner used while waiting on the network.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chat_with_proxy_server() {
        let cli = Cli::try_parse_from([
            "etherverse",
            "chat",
            "--server",
            "http://127.0.0.1:3000",
        ])
        .unwrap();
        match cli.command {
            Commands::Chat { server, address } => {
                assert_eq!(server.as_deref(), Some("http://127.0.0.1:3000"));
                assert!(address.is_none());
            }
            _ => panic!("expected chat command"),
        }
    }

    #[test]
    fn verbosity_is_global() {
        let cli = Cli::try_parse_from(["etherverse", "awesome", "-vv", "--search", "wallet"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Awesome { ref search } if search == "wallet"));
    }
}
