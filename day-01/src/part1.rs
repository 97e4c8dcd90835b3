use std::path::Path;

use itertools::Itertools;

use crate::{
    record::{column_values, Column},
    source, ScoreError,
};

/// Sort both lists, pair them up smallest to smallest and sum the gaps.
///
/// If one column has more valid values than the other the surplus is ignored.
#[tracing::instrument(skip(input))]
pub fn total_distance(input: &str) -> u128 {
    let left = column_values(input, Column::Left).sorted_unstable();
    let right = column_values(input, Column::Right).sorted_unstable();

    left.zip(right)
        .map(|(a, b)| u128::from(a.abs_diff(b)))
        .sum()
}

#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn distance_file(path: impl AsRef<Path>) -> Result<u128, ScoreError> {
    let input = source::read_lossy(path)?;
    Ok(total_distance(&input))
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    Ok(total_distance(input).to_string())
}
