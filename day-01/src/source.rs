use std::{
    fs::File,
    io::{BufRead, BufReader, Read, Seek},
    path::Path,
    time::Instant,
};

use crate::{
    record::{Column, Record},
    ScoreError,
};

/// Line counts from a single scan of a source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    pub counted: usize,
    pub skipped: usize,
}

pub fn open(path: impl AsRef<Path>) -> Result<BufReader<File>, ScoreError> {
    let path = path.as_ref();
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ScoreError::OpenFailure {
            path: path.to_path_buf(),
            source,
        })
}

/// Opens `path` and reads it whole, replacing invalid UTF-8.
pub fn read_lossy(path: impl AsRef<Path>) -> Result<String, ScoreError> {
    let mut bytes = Vec::new();
    open(path)?.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Rewinds `source` to its start and calls `visit` with the `column` value of
/// every well-formed line.
#[tracing::instrument(skip(source, visit))]
pub fn scan_column<R, F>(source: &mut R, column: Column, mut visit: F) -> Result<PassStats, ScoreError>
where
    R: BufRead + Seek,
    F: FnMut(i64),
{
    let start = Instant::now();
    source.rewind()?;

    let mut stats = PassStats::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if source.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        match Record::parse(&line).and_then(|record| record.value(column)) {
            Some(value) => {
                visit(value);
                stats.counted += 1;
            }
            None => stats.skipped += 1,
        }
    }

    tracing::debug!(
        counted = stats.counted,
        skipped = stats.skipped,
        elapsed = ?start.elapsed(),
        "pass complete"
    );
    Ok(stats)
}
