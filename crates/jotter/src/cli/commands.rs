//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::Config;

/// Serve command arguments.
#[derive(Debug, Default, Args)]
pub struct ServeCommand {
    /// Interface to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides `server.port` and `PORT`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the JSON note store (overrides `storage.path`)
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Directory of static assets (overrides `assets.public_dir`)
    #[arg(long, value_name = "DIR")]
    pub public: Option<PathBuf>,
}

impl ServeCommand {
    /// Apply the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = &self.db {
            config.storage.path.clone_from(db);
        }
        if let Some(public) = &self.public {
            config.assets.public_dir.clone_from(public);
        }
    }
}

/// Init command arguments.
#[derive(Debug, Default, Args)]
pub struct InitCommand {
    /// Path to the JSON note store (overrides `storage.path`)
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Replace an existing store with an empty one
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    /// The store path to initialize.
    #[must_use]
    pub fn store_path(&self, config: &Config) -> PathBuf {
        self.db
            .clone()
            .unwrap_or_else(|| config.storage.path.clone())
    }
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
