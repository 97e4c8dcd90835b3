pub mod error;
pub mod part1;
pub mod part2;
pub mod record;
pub mod source;

pub use error::ScoreError;
