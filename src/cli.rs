use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "travelstory")]
#[command(author, version, about = "Pin photos to places and keep them in a local database")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file (overrides database.path from the config)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pin a photo to a place
    Add {
        /// Image file to add (any common format)
        #[arg(required = true)]
        file: PathBuf,

        /// Latitude of the place in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the place in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Place name shown as the marker title
        #[arg(long)]
        place: Option<String>,
    },

    /// List stored photos
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every stored photo with the given id
    Delete {
        /// Photo id
        id: String,
    },

    /// Delete all stored photos
    Clear,

    /// Write every stored photo to a directory as PNG
    Export {
        /// Output directory (created if missing)
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
