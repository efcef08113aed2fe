//! Command-line interface definitions.
//!
//! Lives in the library so the xtask man-page generator can reach the
//! same clap command tree the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(name = "debrief")]
#[command(version = crate::version())]
#[command(about = "Review companion for recorded calls: transcripts, timed notes, rewrites.")]
pub struct Cli {
    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a transcript and print its segments
    Show {
        /// Transcript file (.txt, .srt or .json)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Summarize a transcript: counts, duration, detected format
    Info {
        /// Transcript file (.txt, .srt or .json)
        file: PathBuf,
    },

    /// Show the segment under a playback position
    At {
        /// Transcript file (.txt, .srt or .json)
        file: PathBuf,

        /// Playback position in seconds
        seconds: f64,
    },

    /// Print the transcript text between two playback positions
    Excerpt {
        /// Transcript file (.txt, .srt or .json)
        file: PathBuf,

        /// Inclusive lower bound in seconds
        #[arg(long)]
        from: f64,

        /// Exclusive upper bound in seconds
        #[arg(long)]
        to: f64,
    },

    /// Compile a notes file into dated markdown
    Compile {
        /// Notes file, one note per blank-line-separated block
        notes: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Send notes to the transform service
    Transform {
        /// Notes file, or '-' for stdin
        notes: String,

        /// Transformation prompt
        #[arg(long)]
        prompt: String,
    },

    /// Send a text selection to the tag-transform service
    Tag {
        /// The selected text
        text: String,

        /// Timestamp anchor (MM:SS); defaults to the first bracketed
        /// tag in the text, or 00:00
        #[arg(long)]
        timestamp: Option<String>,
    },

    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
