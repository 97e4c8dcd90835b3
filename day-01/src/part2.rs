use std::{
    collections::HashMap,
    io::{BufRead, Cursor, Seek},
    path::Path,
};

use crate::{
    record::{column_values, Column},
    source::{self, scan_column},
    ScoreError,
};

/// How many times each value occurs in the right-hand list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<i64, u64>,
}

impl FrequencyTable {
    /// Counts the valid right-hand values of `input`.
    pub fn build(input: &str) -> Self {
        column_values(input, Column::Right).collect()
    }

    pub fn insert(&mut self, value: i64) {
        *self.counts.entry(value).or_default() += 1;
    }

    pub fn get(&self, value: i64) -> u64 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// `value` multiplied by how often it appears on the right.
    pub fn weigh(&self, value: i64) -> i128 {
        i128::from(value) * i128::from(self.get(value))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<i64> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut table = Self::default();
        for value in iter {
            table.insert(value);
        }
        table
    }
}

/// Two passes over `source`: count the right column, then weigh every left
/// value by that count.
#[tracing::instrument(skip(source))]
pub fn compute_similarity_score<R: BufRead + Seek>(mut source: R) -> Result<i128, ScoreError> {
    let mut table = FrequencyTable::default();
    scan_column(&mut source, Column::Right, |right| table.insert(right))?;
    tracing::debug!(distinct = table.len(), "frequency table built");

    let mut score = 0i128;
    scan_column(&mut source, Column::Left, |left| score += table.weigh(left))?;

    Ok(score)
}

#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn score_file(path: impl AsRef<Path>) -> Result<i128, ScoreError> {
    compute_similarity_score(source::open(&path)?)
}

/// In-memory variant of [`compute_similarity_score`].
pub fn similarity_score(input: &str) -> i128 {
    let table = FrequencyTable::build(input);
    column_values(input, Column::Left)
        .map(|left| table.weigh(left))
        .sum()
}

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    let score = compute_similarity_score(Cursor::new(input))?;
    Ok(score.to_string())
}
