//! CLI module for Mongo Data Extractor
//!
//! Subcommands:
//! - `serve`: browser UI + JSON API (default when no subcommand is given)
//! - `export`: run a single export and write the file to disk

pub mod export;
pub mod serve;

use clap::{Parser, Subcommand};

/// Mongo Data Extractor - filter MongoDB data and download reports
#[derive(Parser)]
#[command(name = "mongo-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web UI and API server
    Serve(serve::ServeArgs),

    /// Export matching documents to a CSV or Excel file
    Export(export::ExportArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
