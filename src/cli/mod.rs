//! CLI module - Command-line interface for RecoverEase
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// RecoverEase - lost & found reporting
#[derive(Parser)]
#[command(name = "recoverease")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    Init,

    /// Register a user account
    AddUser {
        username: String,
        password: String,
        /// Grant access to the admin page
        #[arg(long)]
        admin: bool,
    },

    /// Print all lost and found reports
    #[command(alias = "ls")]
    List,
}

pub use commands::*;
