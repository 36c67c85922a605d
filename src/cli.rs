use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Portfolio site engine: project gallery, scroll tracking and contact form", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/portfolio/config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log workspace crates at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the project gallery
    Projects {
        /// Filter category: all, featured, ai, web, backend
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// Card layout: grid or list
        #[arg(long, default_value = "grid")]
        view: String,
        #[arg(long)]
        json: bool,
    },
    /// Deduplicated, sorted technology list
    TechStack {
        #[arg(long)]
        json: bool,
    },
    /// Profile and experience timeline
    Experience {
        #[arg(long)]
        json: bool,
    },
    /// Replay scroll positions against a page layout
    Scroll {
        /// TOML page layout (defaults to the site sections stacked one viewport each)
        #[arg(short, long)]
        layout: Option<PathBuf>,
        /// Scroll positions in px, comma separated
        #[arg(long, value_delimiter = ',')]
        at: Vec<u32>,
        /// Jump to a section by id, as a navbar click would
        #[arg(long)]
        goto: Option<String>,
        /// Viewport height for the default layout
        #[arg(long, default_value_t = 900)]
        viewport_height: u32,
        #[arg(long)]
        json: bool,
    },
    /// Submit the contact form through the mail service
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long)]
        json: bool,
    },
}
