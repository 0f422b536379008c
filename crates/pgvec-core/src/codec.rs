//! Encode/decode entry points for client type systems
//!
//! A database driver's pluggable type layer needs four operations for a
//! custom column type: binary and text, each direction. [`VectorCodec`]
//! provides them for [`HalfVector`] and carries no state beyond the
//! preferred wire format, so a single instance can be shared freely.

use crate::error::{PgvecError, Result};
use crate::observe;
use crate::vector::HalfVector;
use serde::{Deserialize, Serialize};

/// Catalog name of the half-precision vector type.
pub const TYPE_NAME: &str = "halfvec";

/// Name of the extension that installs [`TYPE_NAME`].
pub const EXTENSION_NAME: &str = "vector";

/// Which representation a value travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WireFormat {
    /// Binary protocol form (preferred)
    #[default]
    Binary,
    /// `[v1,v2,...]` text form
    Text,
}

/// Stateless `halfvec` codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorCodec {
    preferred: WireFormat,
}

impl VectorCodec {
    pub const fn new() -> Self {
        Self {
            preferred: WireFormat::Binary,
        }
    }

    /// Codec that prefers `format` when the caller has no plan of its own.
    pub const fn with_preferred_format(format: WireFormat) -> Self {
        Self { preferred: format }
    }

    pub fn preferred_format(&self) -> WireFormat {
        self.preferred
    }

    pub fn encode_binary(&self, value: &HalfVector) -> Result<Vec<u8>> {
        let bytes = value.encode_binary()?;
        observe::record_encode(WireFormat::Binary);
        Ok(bytes)
    }

    pub fn decode_binary(&self, buf: &[u8]) -> Result<HalfVector> {
        let result = HalfVector::decode_binary(buf);
        observe::record_decode(WireFormat::Binary, result.is_ok());
        result
    }

    pub fn encode_text(&self, value: &HalfVector) -> String {
        observe::record_encode(WireFormat::Text);
        value.encode_text()
    }

    pub fn decode_text(&self, s: &str) -> Result<HalfVector> {
        let result = HalfVector::decode_text(s);
        observe::record_decode(WireFormat::Text, result.is_ok());
        result
    }

    /// Encode in the given format. Text output is UTF-8.
    pub fn encode(&self, value: &HalfVector, format: WireFormat) -> Result<Vec<u8>> {
        match format {
            WireFormat::Binary => self.encode_binary(value),
            WireFormat::Text => Ok(self.encode_text(value).into_bytes()),
        }
    }

    /// Decode bytes that arrived in the given format.
    pub fn decode(&self, buf: &[u8], format: WireFormat) -> Result<HalfVector> {
        match format {
            WireFormat::Binary => self.decode_binary(buf),
            WireFormat::Text => {
                let s = std::str::from_utf8(buf).map_err(|e| {
                    observe::record_decode(WireFormat::Text, false);
                    PgvecError::MalformedTextData(format!("not valid UTF-8: {}", e))
                })?;
                self.decode_text(s)
            }
        }
    }
}
