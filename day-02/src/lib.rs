pub mod error;
pub mod part1;

pub use error::ReportError;
