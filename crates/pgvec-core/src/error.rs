use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PgvecError {
    #[error("Malformed halfvec wire data: {0}")]
    MalformedWireData(String),

    #[error("Malformed halfvec text data: {0}")]
    MalformedTextData(String),

    #[error("Type '{type_name}' of extension '{extension}' not found in catalog")]
    TypeNotFound {
        extension: String,
        type_name: String,
    },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Vector has {len} dimensions, wire format allows at most {max}")]
    DimensionLimit { len: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PgvecError {
    /// Whether retrying the same call later could succeed.
    ///
    /// Malformed data never becomes well-formed by retrying; a missing
    /// extension or an unreachable database might.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PgvecError::TypeNotFound { .. } | PgvecError::ConnectionError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PgvecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(PgvecError::ConnectionError("refused".into()).is_retryable());
        assert!(PgvecError::TypeNotFound {
            extension: "vector".into(),
            type_name: "halfvec".into(),
        }
        .is_retryable());
        assert!(!PgvecError::MalformedWireData("short".into()).is_retryable());
        assert!(!PgvecError::MalformedTextData("bad".into()).is_retryable());
        assert!(!PgvecError::DimensionLimit { len: 70000, max: 65535 }.is_retryable());
    }

    #[test]
    fn test_display() {
        let err = PgvecError::TypeNotFound {
            extension: "vector".into(),
            type_name: "halfvec".into(),
        };
        assert_eq!(
            err.to_string(),
            "Type 'halfvec' of extension 'vector' not found in catalog"
        );
    }
}
