//! Error types for the recommender.
//!
//! Scoring itself never fails. Everything here is either a caller contract
//! violation caught at the boundary or a broken catalog/config detected at
//! startup.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("Failed to read stdin: {0}")]
    StdinRead(#[from] io::Error),

    #[error("Failed to read context from {path}: {source}")]
    InputRead { path: PathBuf, source: io::Error },

    #[error("Invalid recommendation context: {0}")]
    InvalidContext(#[from] serde_json::Error),

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(serde_json::Error),

    #[error("Failed to read scoring config from {path}: {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse scoring config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("Duplicate command id in catalog: {0}")]
    DuplicateCommand(String),

    #[error("Command {referrer} references unknown command {missing}")]
    UnknownCommand { referrer: String, missing: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, RecommenderError>;
