//! Implementation of the `mfdecode check` command.

use super::{Input, write_err};
use mfdecode::decoder::Decoder;
use mfdecode::error::Result;
use std::io::Write;

/// Execute the `mfdecode check` command.
///
/// Decodes each input in turn and reports the document count. The first
/// failing input aborts the run with that input's error.
pub(crate) fn cmd_check(
    decoder: &Decoder<'_>,
    inputs: &[Input],
    out: &mut impl Write,
) -> Result<()> {
    for input in inputs {
        let decoded = decoder
            .decode(&input.bytes)
            .map_err(|e| e.in_input(&input.label))?;

        writeln!(out, "{}: {} document(s) ok", input.label, decoded.len()).map_err(write_err)?;
    }
    Ok(())
}
