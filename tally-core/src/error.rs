//! Error types for Tally

use thiserror::Error;

/// The input table does not carry a column the loader cannot do without
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Required column '{0}' not found.")]
    MissingColumn(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The schema problem behind this error, if that is what it is
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            Error::Schema(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_message() {
        let err: Error = SchemaError::MissingColumn("Amount".into()).into();
        assert_eq!(
            err.to_string(),
            "Schema error: Required column 'Amount' not found."
        );
        assert_eq!(
            err.as_schema(),
            Some(&SchemaError::MissingColumn("Amount".into()))
        );
    }
}
