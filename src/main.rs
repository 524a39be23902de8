use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use trainjson::commands::{convert_group, convert_program, init_config, show_estimates, ConvertTarget};
use trainjson::core::load_config;
use trainjson::Result;

/// trainjson - convert a training program directory of CSV files into JSON
#[derive(Parser)]
#[command(name = "trainjson")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./trainjson.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a program directory (<root>/<level>/<group>.csv) into one JSON document
    Convert {
        /// Program root directory
        root: PathBuf,

        /// Output file (defaults to <root>.json next to the root directory)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },

    /// Convert a single exercise group CSV file
    Group {
        /// Exercise group CSV file
        csv: PathBuf,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },

    /// Estimate workout durations for a program directory or JSON document
    Estimate {
        /// Program root directory or converted JSON document
        path: PathBuf,
    },

    /// Write a default trainjson.toml
    Init {
        /// Target directory (defaults to current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Convert {
            root,
            output,
            stdout,
            pretty,
        } => {
            let config = load_config(&working_dir, config_file, pretty)?;
            convert_program(&root, ConvertTarget { output, stdout }, &config)?;
        }

        Commands::Group { csv, output, pretty } => {
            let config = load_config(&working_dir, config_file, pretty)?;
            convert_group(&csv, output, &config)?;
        }

        Commands::Estimate { path } => {
            let config = load_config(&working_dir, config_file, false)?;
            show_estimates(&path, &config)?;
        }

        Commands::Init { path } => {
            let dir = path.unwrap_or(working_dir);
            init_config(&dir)?;
        }
    }

    Ok(())
}
