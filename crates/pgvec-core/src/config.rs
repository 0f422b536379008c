use crate::codec::{EXTENSION_NAME, TYPE_NAME};
use crate::error::{PgvecError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for resolving the `halfvec` type OID
///
/// The database URL is handed to the driver untouched; this crate never
/// parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Connection string of the target database
    pub database_url: String,

    /// Extension that installs the type
    /// Default: "vector"
    #[serde(default = "default_extension_name")]
    pub extension_name: String,

    /// Catalog name of the type
    /// Default: "halfvec"
    #[serde(default = "default_type_name")]
    pub type_name: String,

    /// Upper bound on establishing the lookup connection, in milliseconds
    /// Default: none (the driver's own behavior applies)
    #[serde(default)]
    pub connect_timeout_ms: Option<u64>,
}

fn default_extension_name() -> String {
    EXTENSION_NAME.to_string()
}

fn default_type_name() -> String {
    TYPE_NAME.to_string()
}

impl ResolverConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            extension_name: default_extension_name(),
            type_name: default_type_name(),
            connect_timeout_ms: None,
        }
    }

    pub fn with_extension_name(mut self, name: impl Into<String>) -> Self {
        self.extension_name = name.into();
        self
    }

    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = name.into();
        self
    }

    /// Bound the lookup connection attempt. `0` removes the bound.
    pub fn with_connect_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.connect_timeout_ms = (timeout_ms > 0).then_some(timeout_ms);
        self
    }

    pub fn connect_timeout(&self) -> Option<std::time::Duration> {
        self.connect_timeout_ms
            .filter(|ms| *ms > 0)
            .map(std::time::Duration::from_millis)
    }

    /// Reject settings that cannot produce a lookup.
    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(PgvecError::Config("database URL must not be empty".into()));
        }
        if self.extension_name.trim().is_empty() {
            return Err(PgvecError::Config(
                "extension name must not be empty".into(),
            ));
        }
        if self.type_name.trim().is_empty() {
            return Err(PgvecError::Config("type name must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::new("postgres://localhost/app");
        assert_eq!(config.extension_name, "vector");
        assert_eq!(config.type_name, "halfvec");
        assert_eq!(config.connect_timeout_ms, None);
        assert_eq!(config.connect_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_defaults() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{"database_url":"postgres://db/x"}"#).unwrap();
        assert_eq!(config, ResolverConfig::new("postgres://db/x"));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(
            ResolverConfig::new("").validate(),
            Err(PgvecError::Config(_))
        ));
        assert!(ResolverConfig::new("postgres://db")
            .with_type_name(" ")
            .validate()
            .is_err());
        assert!(ResolverConfig::new("postgres://db")
            .with_extension_name("")
            .validate()
            .is_err());
    }

    #[test]
    fn test_connect_timeout_is_opt_in() {
        let config = ResolverConfig::new("postgres://db").with_connect_timeout_ms(250);
        assert_eq!(
            config.connect_timeout(),
            Some(std::time::Duration::from_millis(250))
        );

        let unbounded = config.with_connect_timeout_ms(0);
        assert_eq!(unbounded.connect_timeout(), None);
        assert!(unbounded.validate().is_ok());

        let from_json: ResolverConfig =
            serde_json::from_str(r#"{"database_url":"postgres://db","connect_timeout_ms":0}"#)
                .unwrap();
        assert_eq!(from_json.connect_timeout(), None);
    }
}
