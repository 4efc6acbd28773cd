use clap::{Parser, Subcommand};
use discotag::normalize::PositionInfo;
use discotag::{NormalizeOptions, Normalizer};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "discotag-cli")]
#[command(about = "CLI for discotag - Discogs release normalizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a release document into a flat tagging record
    Normalize {
        /// Release JSON file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Merge tracks listed once per format into one record
        #[arg(short, long, env = "DISCOTAG_MULTI")]
        multi: bool,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Separator for multi-value fields
        #[arg(long, env = "DISCOTAG_SEPARATOR", default_value = discotag::options::DEFAULT_SEPARATOR)]
        separator: String,

        /// Base URL of release pages
        #[arg(long, env = "DISCOTAG_BASE_URL", default_value = discotag::options::DEFAULT_RELEASE_BASE_URL)]
        base_url: String,
    },
    /// Show how position strings resolve to disc and track numbers
    Position {
        /// Position strings, e.g. A1 2-05 CD1-3
        #[arg(required = true)]
        positions: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            file,
            multi,
            pretty,
            separator,
            base_url,
        } => {
            let options = NormalizeOptions::new()
                .with_multi_format(multi)
                .with_separator(separator)
                .with_release_base_url(base_url);
            let normalizer = Normalizer::with_options(options);

            let release = match &file {
                Some(path) => normalizer.normalize_reader(BufReader::new(File::open(path)?))?,
                None => normalizer.normalize_reader(io::stdin().lock())?,
            };

            let output = if pretty {
                serde_json::to_string_pretty(&release)?
            } else {
                serde_json::to_string(&release)?
            };
            println!("{}", output);
        }
        Commands::Position { positions } => {
            for position in &positions {
                let info = PositionInfo::parse(position);
                println!(
                    "{}\tdisc {}\ttrack {}\tkey {}",
                    info.position,
                    info.discnumber,
                    if info.trackno.is_empty() { "-" } else { info.trackno.as_str() },
                    info.key
                );
            }
        }
    }

    Ok(())
}
