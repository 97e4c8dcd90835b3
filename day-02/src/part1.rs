use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    time::Instant,
};

use itertools::Itertools;
use nom::{character::complete::i32 as integer, combinator::all_consuming};

use crate::ReportError;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Slope {
    Increasing,
    Decreasing,
    Unsafe,
}

/// Classifies one step between adjacent levels. Steps of 1 to 3 keep their
/// direction, anything else (including no change) is unsafe.
pub fn evaluate_slope(start: i32, end: i32) -> Slope {
    match i64::from(end) - i64::from(start) {
        1..=3 => Slope::Increasing,
        -3..=-1 => Slope::Decreasing,
        _ => Slope::Unsafe,
    }
}

fn parse_level(token: &str) -> Option<i32> {
    all_consuming(integer::<&str, nom::error::Error<&str>>)(token)
        .ok()
        .map(|(_, level)| level)
}

/// Numeric levels of one report; tokens that are not integers are dropped.
pub fn parse_levels(line: &str) -> Vec<i32> {
    line.split_whitespace().filter_map(parse_level).collect()
}

/// A report is safe when every step has the same direction as the first.
/// Reports with fewer than two levels have no steps and are safe.
pub fn is_safe(levels: &[i32]) -> bool {
    let mut slopes = levels
        .iter()
        .tuple_windows()
        .map(|(&start, &end)| evaluate_slope(start, end));

    let Some(first) = slopes.next() else {
        return true;
    };
    first != Slope::Unsafe && slopes.all(|slope| slope == first)
}

#[tracing::instrument(skip(input))]
pub fn count_safe(input: &str) -> usize {
    input
        .lines()
        .filter(|line| is_safe(&parse_levels(line)))
        .count()
}

/// Streams `reader` line by line, counting safe reports.
#[tracing::instrument(skip(reader))]
pub fn count_safe_reader<R: BufRead>(mut reader: R) -> Result<usize, ReportError> {
    let start = Instant::now();
    let mut safe = 0;
    let mut total = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        total += 1;
        if is_safe(&parse_levels(&String::from_utf8_lossy(&buf))) {
            safe += 1;
        }
    }

    tracing::debug!(safe, total, elapsed = ?start.elapsed(), "reports checked");
    Ok(safe)
}

#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn safe_reports_file(path: impl AsRef<Path>) -> Result<usize, ReportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReportError::OpenFailure {
        path: path.to_path_buf(),
        source,
    })?;
    count_safe_reader(BufReader::new(file))
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    Ok(count_safe(input).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use super::*;
    use rstest::rstest;

    const EXAMPLE: &str = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
        }
    }

    #[test]
    fn test_process() -> miette::Result<()> {
        assert_eq!("2", process(EXAMPLE)?);
        Ok(())
    }

    #[rstest]
    #[case("7 6 4 2 1", true)]
    #[case("1 3 6 7 9", true)]
    #[case("-1 -3 -4", true)]
    #[case("8 6 4 4 1", false)]
    #[case("1 1", false)]
    #[case("1 2 7 8 9", false)]
    #[case("1 5 6", false)]
    #[case("1 3 2 4 5", false)]
    #[case("9 7 8", false)]
    #[case("", true)]
    #[case("5", true)]
    #[case("x 5", true)]
    #[case("1 x 2 y 3", true)]
    #[case("2147483647 -2147483648", false)]
    fn test_is_safe(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(expected, is_safe(&parse_levels(line)));
    }

    #[rstest]
    #[case(1, 4, Slope::Increasing)]
    #[case(4, 1, Slope::Decreasing)]
    #[case(4, 4, Slope::Unsafe)]
    #[case(0, 4, Slope::Unsafe)]
    #[case(i32::MIN, i32::MAX, Slope::Unsafe)]
    fn test_evaluate_slope(#[case] start: i32, #[case] end: i32, #[case] expected: Slope) {
        assert_eq!(expected, evaluate_slope(start, end));
    }

    #[test]
    fn test_parse_levels_drops_non_numeric() {
        assert_eq!(vec![1, -2, 3], parse_levels(" 1 -2\tabc 3 4x 99999999999"));
    }

    #[test_log::test]
    fn test_reader_matches_in_memory() -> miette::Result<()> {
        assert_eq!(2, count_safe_reader(Cursor::new(EXAMPLE))?);
        Ok(())
    }

    #[test]
    fn test_read_failure() {
        let result = count_safe_reader(BufReader::new(BrokenPipe));
        assert!(matches!(result, Err(ReportError::ReadFailure(_))));
    }

    #[test]
    fn test_safe_reports_file() -> miette::Result<()> {
        let path = std::env::temp_dir().join(format!("day-02-reports-{}.txt", std::process::id()));
        std::fs::write(&path, EXAMPLE).map_err(ReportError::from)?;
        let safe = safe_reports_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(2, safe?);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = safe_reports_file("no/such/dir/input1.txt");
        assert!(matches!(result, Err(ReportError::OpenFailure { .. })));
    }
}
