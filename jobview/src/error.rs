use std::result;
use thiserror;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no job records in input")]
    Empty,
    #[error("malformed job record: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;
