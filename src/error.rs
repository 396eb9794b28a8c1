use miette::Diagnostic;
use thiserror::Error;

use crate::domain::table::StudyTable;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not connect to DB: {source}\nTried URL: {url}")]
    #[diagnostic(
        code(study_inspect::connection),
        help("pass --db <URL> or set DATABASE_URL")
    )]
    Connection {
        url: String,
        #[source]
        source: diesel::ConnectionError,
    },

    #[error("Unknown table '{name}'. Valid choices: {}", StudyTable::choices())]
    UnknownTable { name: String },

    #[error("couldn't cast timestamps: {0}")]
    TimestampCast(String),

    #[error("query failed: {source}")]
    Query {
        title: &'static str,
        #[source]
        source: diesel::result::Error,
    },

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}
