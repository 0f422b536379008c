//! pgvec core: half-precision vectors and their PostgreSQL wire forms
//!
//! This crate holds everything needed to move `halfvec` values (from the
//! pgvector extension) in and out of a database client without touching
//! the network:
//! - [`Half`]: a 16-bit IEEE-754 bit pattern with explicit conversions
//! - [`HalfVector`]: an immutable, fixed-length sequence of halves
//! - [`VectorCodec`]: binary and text encode/decode entry points used by
//!   client type systems
//! - [`ResolverConfig`]: settings for looking up the extension's type OID
//!
//! With the `sqlx` feature, [`HalfVector`] also implements sqlx's
//! PostgreSQL `Type`/`Encode`/`Decode`. OID resolution and pool setup
//! live in `pgvec-postgres`.
//!
//! # Example
//!
//! ```
//! use pgvec_core::{HalfVector, VectorCodec, WireFormat};
//!
//! let v = HalfVector::from_f32(&[0.5, 1.0, -2.0]);
//! let codec = VectorCodec::new();
//!
//! let bytes = codec.encode(&v, WireFormat::Binary).unwrap();
//! assert_eq!(bytes.len(), 6 + 3 * 2);
//!
//! let back = codec.decode(&bytes, WireFormat::Binary).unwrap();
//! assert_eq!(back, v);
//! assert_eq!(v.to_string(), "[0.5,1,-2]");
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod float16;
pub mod observe;
#[cfg(feature = "sqlx")]
pub mod sqlx_types;
pub mod types;
pub mod vector;
mod wire;

pub use codec::{VectorCodec, WireFormat, EXTENSION_NAME, TYPE_NAME};
pub use config::ResolverConfig;
pub use error::{PgvecError, Result};
pub use float16::Half;
pub use types::TypeOid;
pub use vector::HalfVector;
pub use wire::{HEADER_LEN, MAX_DIMENSIONS};
