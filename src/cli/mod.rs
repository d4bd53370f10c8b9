//! CLI module for Circle Hub

pub mod serve;

use clap::{Parser, Subcommand};

/// Circle Hub - users, circles and recommendations over HTTP
#[derive(Parser)]
#[command(name = "circle-hub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
