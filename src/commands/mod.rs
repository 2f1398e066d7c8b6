//! Command implementations for mfdecode.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input reading shared by `check` and `dump`.

mod check;
mod dump;


use crate::cli::{Cli, Command};
use mfdecode::config::DecoderConfig;
use mfdecode::decoder::Decoder;
use mfdecode::error::{MfError, Result};
use mfdecode::registry::Registry;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Label used for standard input in messages and errors.
pub(crate) const STDIN_LABEL: &str = "-";

/// Dispatch a command to its implementation.
///
/// Loads the decoder config (if one was given) and builds the registry
/// before routing the command to its handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => DecoderConfig::load(path)?,
        None => DecoderConfig::default(),
    };
    let registry = Registry::default();
    let decoder = Decoder::new(&registry).with_config(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Check(args) => check::cmd_check(&decoder, &read_inputs(&args.files)?, &mut out),
        Command::Dump(args) => {
            dump::cmd_dump(&decoder, &read_inputs(&args.input.files)?, args.format, &mut out)
        }
        Command::Kinds => cmd_kinds(&registry, &mut out),
    }
}

/// One named input buffer.
pub(crate) struct Input {
    pub label: String,
    pub bytes: Vec<u8>,
}

/// Read every requested input up front. No files means stdin.
pub(crate) fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    files
        .iter()
        .map(|path| {
            if path.as_os_str() == STDIN_LABEL {
                read_stdin()
            } else {
                read_file(path)
            }
        })
        .collect()
}

fn read_file(path: &Path) -> Result<Input> {
    let bytes = std::fs::read(path).map_err(|e| {
        MfError::UserError(format!(
            "failed to read manifest file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(Input {
        label: path.display().to_string(),
        bytes,
    })
}

fn read_stdin() -> Result<Input> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|e| MfError::UserError(format!("failed to read stdin: {}", e)))?;

    Ok(Input {
        label: STDIN_LABEL.to_string(),
        bytes,
    })
}

pub(crate) fn write_err(e: std::io::Error) -> MfError {
    MfError::UserError(format!("failed to write output: {}", e))
}

/// Execute the `mfdecode kinds` command.
pub(crate) fn cmd_kinds(registry: &Registry, out: &mut impl Write) -> Result<()> {
    for factory in registry.kinds() {
        let version = if factory.version.is_empty() {
            "-"
        } else {
            factory.version.as_str()
        };
        writeln!(out, "{}\t{}\t{}", factory.kind, version, factory.type_name)
            .map_err(write_err)?;
    }
    Ok(())
}
