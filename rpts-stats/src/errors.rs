use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StatsError {
    #[error("Number of histogram bins must be positive, got {0}")]
    InvalidBinCount(usize),
}
