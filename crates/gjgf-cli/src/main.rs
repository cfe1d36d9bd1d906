// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `gjgf` entrypoint.
//!
//! ```text
//! gjgf normalize [--pretty] [--no-file-paths] [--max-file-bytes N] [INPUT]...
//! gjgf prefs [--init]
//! ```
//!
//! Exits `0` on success; on failure the error chain goes to stderr and the
//! exit code is non-zero.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use gjgf_config::{ConfigService, ConvertPrefs, FsConfigStore, CONVERT_PREFS_KEY};
use gjgf_convert::{normalize_graph_data_with, GraphInput};
use gjgf_model::GraphBody;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, NormalizeArgs};

#[derive(Serialize)]
struct Output<'a> {
    graphs: &'a [GraphBody],
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_prefs(config_dir: Option<&std::path::Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new().context("opening preference store")?,
    };
    Ok(ConfigService::new(store))
}

/// Saved preferences, or defaults when the store is unusable.
/// Normalizing never writes to the store and never fails because of it.
fn load_prefs(config_dir: Option<&std::path::Path>) -> ConvertPrefs {
    let loaded: Result<ConvertPrefs> = open_prefs(config_dir).and_then(|service| {
        service
            .load_or_default(CONVERT_PREFS_KEY)
            .context("loading preferences")
    });
    loaded.unwrap_or_else(|err| {
        warn!(error = %format!("{err:#}"), "preferences unavailable, using defaults");
        ConvertPrefs::default()
    })
}

fn read_input(raw: &str) -> Result<GraphInput> {
    if raw != "-" {
        return Ok(GraphInput::from(raw));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading stdin")?;
    let value = serde_json::from_str(&text).context("stdin is not valid JSON")?;
    Ok(GraphInput::Json(value))
}

fn normalize(args: &NormalizeArgs, prefs: ConvertPrefs) -> Result<()> {
    let mut options = prefs.normalize;
    if args.no_file_paths {
        options.resolve_file_paths = false;
    }
    if args.max_file_bytes.is_some() {
        options.max_file_bytes = args.max_file_bytes;
    }

    let mut inputs = if args.inputs.is_empty() {
        vec![read_input("-")?]
    } else {
        args.inputs
            .iter()
            .map(|raw| read_input(raw))
            .collect::<Result<Vec<_>>>()?
    };
    let input = if inputs.len() == 1 {
        inputs.remove(0)
    } else {
        GraphInput::Sequence(inputs)
    };
    debug!(?options, "normalizing");

    let graphs = normalize_graph_data_with(&input, &options)?;
    info!(count = graphs.len(), "normalized");

    let output = Output { graphs: &graphs };
    let mut stdout = io::stdout().lock();
    if args.pretty || prefs.pretty {
        serde_json::to_writer_pretty(&mut stdout, &output)?;
    } else {
        serde_json::to_writer(&mut stdout, &output)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn prefs(config_dir: Option<&std::path::Path>, init: bool) -> Result<()> {
    let service = open_prefs(config_dir)?;
    let saved: Option<ConvertPrefs> = service.load(CONVERT_PREFS_KEY)?;
    let effective = match saved {
        Some(prefs) => prefs,
        None if init => {
            let prefs = ConvertPrefs::default();
            service.save(CONVERT_PREFS_KEY, &prefs)?;
            info!(
                path = %service.store().path_for(CONVERT_PREFS_KEY).display(),
                "wrote default preferences"
            );
            prefs
        }
        None => ConvertPrefs::default(),
    };
    println!("{}", serde_json::to_string_pretty(&effective)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config_dir = cli.config_dir.as_deref();
    match &cli.command {
        Command::Normalize(args) => normalize(args, load_prefs(config_dir)),
        Command::Prefs { init } => prefs(config_dir, *init),
    }
}
