//! `jotter` - CLI and server entry point
//!
//! This binary runs the note-taking HTTP server and provides helpers for
//! creating the note store and inspecting configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use jotter::cli::{Cli, Command, ConfigCommand, InitCommand, ServeCommand};
use jotter::{init_logging, server, Config, NoteStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Serve(serve_cmd) => handle_serve(config, &serve_cmd).await,
        Command::Init(init_cmd) => handle_init(&config, &init_cmd).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    cmd.apply(&mut config);
    config.validate()?;

    server::serve(&config)
        .await
        .with_context(|| format!("serving on {}:{}", config.server.host, config.server.port))
}

async fn handle_init(config: &Config, cmd: &InitCommand) -> anyhow::Result<()> {
    let store = NoteStore::new(cmd.store_path(config));

    if store.init(cmd.force).await? {
        println!("Created empty note store at {}", store.path().display());
    } else {
        println!(
            "Note store already exists at {} (use --force to reset it)",
            store.path().display()
        );
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Host:               {}", config.server.host);
                println!("  Port:               {}", config.server.port);
                println!("  Max body (bytes):   {}", config.server.max_body_bytes);
                println!();
                println!("[Storage]");
                println!("  Note store:         {}", config.storage.path.display());
                println!();
                println!("[Assets]");
                println!("  Public dir:         {}", config.assets.public_dir.display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("validating {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
