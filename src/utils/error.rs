use crate::inventory::checker::Violation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("invalid namespace UUID '{value}': {source}")]
    InvalidNamespace {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("unknown filter '{name}'")]
    UnknownFilter { name: String },

    #[error("filter '{filter}' takes {expected} argument(s), got {got}")]
    FilterArity {
        filter: String,
        expected: usize,
        got: usize,
    },

    #[error("{path} not found")]
    FileNotFound { path: String },

    #[error("{path} is not valid JSON: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} could not be read: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{} structural violation(s) found", .0.len())]
    StructuralViolation(Vec<Violation>),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidArgumentError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HelperError>;
