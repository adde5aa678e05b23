//! Per-command handlers.
//!
//! Every handler builds its `ShareApi` from the loaded [`ShareConfig`], calls
//! one API method and prints the result. `view` and `raw` share one lookup;
//! `raw` writes the stored body byte for byte and nothing else.

use super::print::{eprint_messages, print_bundle, print_rendered};
use super::setup::{Cli, Commands};
use clap::Parser;
use env_logger::Env;
use std::io::Read;
use std::path::{Path, PathBuf};
use wgetshare::api::{failure_notice, CmdMessage, RenderMode, ShareApi};
use wgetshare::clipboard::copy_to_clipboard;
use wgetshare::config::ShareConfig;
use wgetshare::error::Result;
use wgetshare::store::fs::FileStore;
use wgetshare::web::{server, Site};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = ShareConfig::load(cli.data_dir.as_deref())?;
    log::debug!("config: {:?}", config);

    match cli.command {
        Commands::Serve { addr, origin } => {
            if let Some(addr) = addr {
                config.addr = addr;
            }
            if origin.is_some() {
                config.origin = origin;
            }
            handle_serve(&config)
        }
        Commands::Publish { file, name, copy } => handle_publish(&config, file, name, copy),
        Commands::View { id } => handle_show(&config, &id, RenderMode::Decorated),
        Commands::Raw { id } => handle_show(&config, &id, RenderMode::Raw),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init();
}

fn init_api(config: &ShareConfig) -> ShareApi<FileStore> {
    let root = config.store_dir();
    log::debug!("store at {}", root.display());
    ShareApi::new(FileStore::new(root), &config.origin())
}

fn handle_serve(config: &ShareConfig) -> Result<()> {
    let mut api = init_api(config);
    // Without a configured origin, links follow the Host header of each request.
    let site = Site::new(config.has_origin().then(|| config.origin()))?;
    server::serve(&mut api, &site, &config.addr)
}

fn handle_publish(
    config: &ShareConfig,
    file: Option<PathBuf>,
    name: Option<String>,
    copy: bool,
) -> Result<()> {
    let (code, stem) = read_input(file.as_deref())?;
    let filename = name.or(stem);

    let mut api = init_api(config);
    let result = match api.publish(code, filename.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            log::debug!("publish failed: {}", e);
            eprint_messages(&[failure_notice(&e)]);
            std::process::exit(1);
        }
    };

    eprint_messages(&result.messages);
    print_bundle(&result.bundle);

    if copy {
        match copy_to_clipboard(&result.bundle.download_command) {
            Ok(()) => eprint_messages(&[CmdMessage::info("Copied!", "Command copied to clipboard")]),
            Err(e) => eprint_messages(&[CmdMessage::warning("Copy failed", e.to_string())]),
        }
    }
    Ok(())
}

/// Reads the snippet body from `file`, or stdin for `None` / `-`. Also returns
/// the file stem as the suggested download name.
fn read_input(file: Option<&Path>) -> Result<(String, Option<String>)> {
    match file {
        Some(path) if path != Path::new("-") => {
            let code = std::fs::read_to_string(path)?;
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned());
            Ok((code, stem))
        }
        _ => {
            let mut code = String::new();
            std::io::stdin().read_to_string(&mut code)?;
            Ok((code, None))
        }
    }
}

/// `view` and `raw` differ only in the rendering contract.
fn handle_show(config: &ShareConfig, id: &str, mode: RenderMode) -> Result<()> {
    let api = init_api(config);
    if !print_rendered(&api.render(Some(id), mode))? {
        std::process::exit(1);
    }
    Ok(())
}
