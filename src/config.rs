//! Command line configuration.

use crate::source::DEFAULT_FLASHCARDS_DIR;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Delay between flipping a card back and moving to the next one.
pub const FLIP_DELAY: Duration = Duration::from_millis(150);

/// How long navigation feedback stays on screen.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(800);

pub const DEFAULT_SERVE_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "csv-flashcards", version, about = "Study flashcards loaded from CSV files")]
pub struct Cli {
    /// Directory scanned for *.csv card sets
    #[arg(long, global = true, env = "FLASHCARDS_DIR", default_value = DEFAULT_FLASHCARDS_DIR)]
    pub dir: PathBuf,

    /// Log file used while the terminal UI is running
    #[arg(long, global = true, env = "FLASHCARDS_LOG", default_value = "flashcards.log")]
    pub log_file: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Study in the terminal (default)
    Study(StudyArgs),
    /// Serve the card set listing over HTTP
    Serve {
        #[arg(long, default_value = DEFAULT_SERVE_ADDR)]
        addr: SocketAddr,
    },
    /// Print the card set listing as JSON
    List,
}

#[derive(Debug, Clone, Default, Args)]
pub struct StudyArgs {
    /// Start with shuffle mode on
    #[arg(long)]
    pub shuffle: bool,

    /// Move between cards without the flip delay
    #[arg(long)]
    pub no_animation: bool,

    /// Upload a CSV file as soon as the UI starts
    #[arg(long, value_name = "FILE")]
    pub open: Option<PathBuf>,
}

/// Settings for a study session.
#[derive(Debug, Clone)]
pub struct StudyConfig {
    pub dir: PathBuf,
    pub shuffle: bool,
    pub flip_delay: Duration,
    pub open: Option<PathBuf>,
}

impl StudyConfig {
    pub fn new(dir: PathBuf, args: StudyArgs) -> Self {
        Self {
            dir,
            shuffle: args.shuffle,
            flip_delay: if args.no_animation {
                Duration::ZERO
            } else {
                FLIP_DELAY
            },
            open: args.open,
        }
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_FLASHCARDS_DIR), StudyArgs::default())
    }
}
