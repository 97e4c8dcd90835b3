use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Fatal failures while reading the location lists.
///
/// Malformed lines never show up here, they are skipped by the tokenizer.
#[derive(Debug, Error, Diagnostic)]
pub enum ScoreError {
    #[error("Failed to open input file `{}`", .path.display())]
    #[diagnostic(
        code(day01::open_failure),
        help("download the puzzle input next to the crate's Cargo.toml")
    )]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input")]
    #[diagnostic(code(day01::read_failure))]
    ReadFailure(#[from] io::Error),
}
