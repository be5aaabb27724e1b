use std::path::PathBuf;

use clap::Parser;

/// HTTP service that stores text notes as individual files in a directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "notes-backend", version, about, long_about = None)]
pub struct Config {
    /// Server host address to bind
    #[arg(long, value_name = "HOST")]
    pub host: String,

    /// Server port to bind
    #[arg(short, long, value_name = "PORT")]
    pub port: u16,

    /// Storage directory path (created recursively if absent)
    #[arg(short = 'c', long, value_name = "DIR")]
    pub storage_dir: PathBuf,
}
