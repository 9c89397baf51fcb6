use crate::config::RouterConfig;
use crate::exchange::{IncomingRequest, RecordedResponse};
use crate::manifest::RouteManifest;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for routeboard
///
/// Inspects a YAML route manifest and probes how requests would be routed.
#[derive(Parser)]
#[command(name = "routeboard")]
#[command(about = "Inspect and probe routeboard route manifests", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the routing table in match order
    List {
        /// Path to the route manifest (YAML)
        #[arg(short, long)]
        routes: PathBuf,
    },
    /// Dispatch one request through echo handlers and print the outcome
    Probe {
        /// Path to the route manifest (YAML)
        #[arg(short, long)]
        routes: PathBuf,

        /// Router config file (YAML); defaults come from the environment
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Turn off route log lines regardless of config
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Request method, e.g. GET
        method: String,

        /// Request url, e.g. /movies/42
        url: String,
    },
}

/// Parse arguments and run the selected command.
///
/// Returns the process exit code: `0` when the probed request was routed,
/// `1` when it was answered with a non-success status.
pub fn run_cli() -> Result<i32> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::List { routes } => {
            let manifest = RouteManifest::load(&routes)?;
            let dispatcher = manifest.build_dispatcher(RouterConfig::quiet())?;
            for entry in dispatcher.router().routes() {
                println!("{:<6} {}", entry.method(), entry.path());
            }
            Ok(0)
        }
        Commands::Probe {
            routes,
            config,
            quiet,
            method,
            url,
        } => {
            let mut router_config = match config {
                Some(path) => RouterConfig::load(path)?,
                None => RouterConfig::from_env(),
            };
            if quiet {
                router_config.show_log = false;
            }

            let manifest = RouteManifest::load(&routes)?;
            let dispatcher = manifest.build_dispatcher(router_config)?;

            let request = IncomingRequest::new(method, url);
            let mut response = RecordedResponse::new();
            dispatcher.dispatch(&request, &mut response);

            let status = response.status().map(|s| s.as_u16()).unwrap_or(200);
            println!("status: {status}");
            if !response.body().is_empty() {
                println!("{}", response.body());
            }

            Ok(if (200..300).contains(&status) { 0 } else { 1 })
        }
    }
}
