// Copyright 2026 Routemap Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use routemap::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routemap",
    about = "Routemap — route-driven XML sitemap generator",
    version,
    after_help = "Run 'routemap <command> --help' for details on each command."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sitemap from an endpoint catalog file
    Generate {
        /// Endpoint catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
        /// Application root URL (absolute, e.g. "https://example.com")
        #[arg(long)]
        root_url: String,
        /// Write the document here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve /sitemap.xml over HTTP
    Serve {
        /// Endpoint catalog JSON file
        #[arg(long)]
        catalog: PathBuf,
        /// Application root URL (absolute, e.g. "https://example.com")
        #[arg(long)]
        root_url: String,
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Generate {
            catalog,
            root_url,
            output,
        } => cli::generate_cmd::run(&catalog, &root_url, output.as_deref()),
        Commands::Serve {
            catalog,
            root_url,
            port,
        } => cli::serve_cmd::run(&catalog, &root_url, port).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "routemap", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    result
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
