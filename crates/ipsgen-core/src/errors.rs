// crates/ipsgen-core/src/errors.rs

use thiserror::Error;

/// Weight unit string that does not name a supported mass unit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported weight unit '{unit}'")]
pub struct UnsupportedUnit {
    pub unit: String,
}

/// Failure to turn one manifest record into a mail item document.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("required field '{field}' is missing or empty")]
    FieldMissing { field: &'static str },

    #[error("field '{field}' has invalid value '{value}': {message}")]
    InvalidValue {
        field: &'static str,
        value: String,
        message: String,
    },

    #[error(transparent)]
    UnsupportedUnit(#[from] UnsupportedUnit),
}

/// XML writer failure. Reaching this with a mapped document means a core
/// bug, not bad user input.
#[derive(Debug, Error)]
#[error("xml writer error: {0}")]
pub struct XmlError(#[from] quick_xml::Error);

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{file}: {message}")]
    Parse { file: String, message: String },

    #[error("{file}: malformed delimited text: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("{file}: record {offset}: {source}")]
    Record {
        file: String,
        offset: usize,
        #[source]
        source: MapError,
    },

    #[error("{file}: record {offset}: serialization invariant violated: {source}")]
    Serialize {
        file: String,
        offset: usize,
        #[source]
        source: XmlError,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
