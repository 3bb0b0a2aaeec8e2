#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use turtlewatch_config::KeywordStore;

mod command;

use command::{
    CommandStrategy, FingerprintStrategy, InfoStrategy, InitStrategy, ParseStrategy, TextInput,
    VersionStrategy,
};

#[derive(Parser)]
#[command(name = "turtlewatch")]
#[command(about = "Extract turtle sighting records from social-media posts", long_about = None)]
struct Cli {
    /// Path to the keyword config file
    #[arg(
        short = 'c',
        long,
        global = true,
        env = "TURTLEWATCH_CONFIG",
        default_value = KeywordStore::DEFAULT_PATH
    )]
    config: PathBuf,

    /// Log extraction decisions
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default keyword config if it does not exist
    Init,
    /// Extract a record from post text
    Parse {
        /// Post text (read from stdin when neither this nor --file is given)
        text: Option<String>,

        /// Read post text from a file, e.g. saved OCR output
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Print the dedup fingerprint of post text
    Fingerprint {
        /// Post text (read from stdin when neither this nor --file is given)
        text: Option<String>,

        /// Read post text from a file
        #[arg(short = 'f', long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Show the loaded keyword vocabulary
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let store = KeywordStore::new(cli.config);

    match cli.command {
        Commands::Init => InitStrategy.execute(store),
        Commands::Parse { text, file } => ParseStrategy.execute((store, TextInput { text, file })),
        Commands::Fingerprint { text, file } => FingerprintStrategy.execute(TextInput { text, file }),
        Commands::Info => InfoStrategy.execute(store),
        Commands::Version => VersionStrategy.execute(()),
    }
}
