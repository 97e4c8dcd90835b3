use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("Failed to open reactor report `{}`", .path.display())]
    #[diagnostic(
        code(day02::open_failure),
        help("download the puzzle input next to the crate's Cargo.toml")
    )]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read reactor report")]
    #[diagnostic(code(day02::read_failure))]
    ReadFailure(#[from] io::Error),
}
