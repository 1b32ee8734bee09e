use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about = "Resume record store: HTML pages and JSON API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve HTTP traffic (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}
