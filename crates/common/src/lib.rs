use thiserror::Error;

pub mod types;
pub mod utils;

#[derive(Debug, Error)]
pub enum CommonError {
    #[error("unknown log format: {0}")]
    LogFormat(String),
}
