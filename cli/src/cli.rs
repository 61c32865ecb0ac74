use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brief")]
#[command(
    author,
    version,
    about = "Build and check the Louisville nurse organizing brief"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the page and export the content tables into an output directory
    Build {
        /// Directory receiving index.html and content.json
        #[clap(short, long, default_value = "dist")]
        out: PathBuf,

        /// Configuration file path (defaults to brief.toml when present)
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Footer year to bake into the page (defaults to the current year)
        #[clap(long)]
        year: Option<i32>,
    },

    /// Print content tables as JSON
    Content {
        /// Single table to print (timeline, analysis, outcomes, voices, staffing, benefits)
        #[clap(short, long)]
        section: Option<String>,
    },

    /// Validate the content tables and the page markup contract
    Check {
        /// Configuration file path (defaults to brief.toml when present)
        #[clap(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a commented default configuration file
    Init {
        /// Where to write the file
        #[clap(default_value = "brief.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}
