//! Parameter-file reader.
//!
//! Seven whitespace/newline-separated tokens in field order:
//! `nx ny max_iters reynolds_dim density accel omega`. Errors name the
//! field that failed so the diagnostic points at the right token.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use riffle_core::SimParams;

use crate::error::ReadError;

fn parse_field<T: FromStr>(
    tokens: &mut std::str::SplitWhitespace<'_>,
    name: &'static str,
) -> Result<T, ReadError> {
    let token = tokens.next().ok_or(ReadError::MissingParam { name })?;
    token.parse().map_err(|_| ReadError::MalformedParam {
        name,
        token: token.to_string(),
    })
}

/// Read a parameter bundle from any buffered reader.
///
/// Structural validation (positive dimensions, `omega` range) happens at
/// simulation construction, not here.
pub fn read_params<R: BufRead>(mut reader: R) -> Result<SimParams, ReadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();
    Ok(SimParams {
        nx: parse_field(&mut tokens, "nx")?,
        ny: parse_field(&mut tokens, "ny")?,
        max_iters: parse_field(&mut tokens, "max_iters")?,
        reynolds_dim: parse_field(&mut tokens, "reynolds_dim")?,
        density: parse_field(&mut tokens, "density")?,
        accel: parse_field(&mut tokens, "accel")?,
        omega: parse_field(&mut tokens, "omega")?,
    })
}

/// Read a parameter bundle from a file on disk.
pub fn load_params(path: &Path) -> Result<SimParams, ReadError> {
    let file = File::open(path)?;
    read_params(BufReader::new(file))
}
