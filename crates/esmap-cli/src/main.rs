#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "esmap")]
#[command(author, version, about = "Generate browser import maps from source imports", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted logs (and JSON output for `version`)
    #[arg(long, global = true)]
    json: bool,

    /// Resolver config file (JSON with `resolutionHost` / `reactVersion`)
    #[arg(long, global = true, value_name = "PATH", env = "ESMAP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Scan source files for imports and print the import map
    Scan {
        /// Files to scan, in order (omit or use `-` to read stdin)
        files: Vec<PathBuf>,

        /// Print an HTML `<script type="importmap">` element instead of JSON
        #[arg(long)]
        html: bool,

        /// Pretty-print the JSON output
        #[arg(long, conflicts_with = "html")]
        pretty: bool,

        /// Override the CDN root for this run
        #[arg(long, value_name = "URL")]
        host: Option<String>,

        /// Override the pinned React version for this run
        #[arg(long, value_name = "VERSION")]
        react_version: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    match cli.command {
        Commands::Version => commands::version::run(cli.json),
        Commands::Scan {
            files,
            html,
            pretty,
            host,
            react_version,
        } => {
            let output = if html {
                commands::scan::Output::Html
            } else if pretty {
                commands::scan::Output::PrettyJson
            } else {
                commands::scan::Output::Json
            };
            commands::scan::run(&commands::scan::ScanAction {
                files,
                config: cli.config,
                host,
                react_version,
                output,
            })
        }
    }
}
