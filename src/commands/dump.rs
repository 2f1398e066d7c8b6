//! Implementation of the `mfdecode dump` command.
//!
//! Prints decoded objects re-serialized with empty fields omitted, either
//! as a YAML document stream or as one JSON array per input.

use super::{Input, write_err};
use crate::cli::DumpFormat;
use mfdecode::decoder::Decoder;
use mfdecode::encoder;
use mfdecode::error::{MfError, Result};
use serde_yaml::Value;
use std::io::Write;

/// Execute the `mfdecode dump` command.
pub(crate) fn cmd_dump(
    decoder: &Decoder<'_>,
    inputs: &[Input],
    format: DumpFormat,
    out: &mut impl Write,
) -> Result<()> {
    for input in inputs {
        let decoded = decoder
            .decode(&input.bytes)
            .map_err(|e| e.in_input(&input.label))?;

        let trees = decoded
            .iter()
            .map(|object| object.to_value(true))
            .collect::<Result<Vec<Value>>>()?;

        match format {
            DumpFormat::Yaml => {
                for tree in &trees {
                    let yaml = encoder::to_yaml(tree, false)?;
                    write!(out, "---\n{}", yaml).map_err(write_err)?;
                }
            }
            DumpFormat::Json => {
                let json = serde_json::to_string_pretty(&trees)
                    .map_err(|e| MfError::decode("encode", e))?;
                writeln!(out, "{}", json).map_err(write_err)?;
            }
        }
    }
    Ok(())
}
