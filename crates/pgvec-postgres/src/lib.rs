//! PostgreSQL binding for pgvec
//!
//! Looks up the type OID the pgvector extension was assigned on a given
//! database and pairs it with the codec. Enables `pgvec-core`'s `sqlx`
//! feature, so [`HalfVector`] columns and parameters travel in the binary
//! protocol.
//!
//! # Example
//!
//! ```no_run
//! use pgvec_core::{HalfVector, ResolverConfig};
//! use pgvec_postgres::connect_pool;
//! use sqlx::postgres::PgPoolOptions;
//!
//! # async fn example() -> pgvec_core::Result<()> {
//! let config = ResolverConfig::new("postgres://localhost/app");
//! let (pool, halfvec) = connect_pool(&config, PgPoolOptions::new().max_connections(5)).await?;
//! println!("halfvec oid = {}", halfvec.oid());
//!
//! let embedding = HalfVector::from_f32(&[0.1, 0.2, 0.3]);
//! sqlx::query("INSERT INTO items (embedding) VALUES ($1)")
//!     .bind(halfvec.bind(&embedding))
//!     .execute(&pool)
//!     .await
//!     .map_err(|e| pgvec_core::PgvecError::ConnectionError(e.to_string()))?;
//!
//! let stored: HalfVector = sqlx::query_scalar("SELECT embedding FROM items LIMIT 1")
//!     .fetch_one(&pool)
//!     .await
//!     .map_err(|e| pgvec_core::PgvecError::ConnectionError(e.to_string()))?;
//! assert_eq!(stored, embedding);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod pool;
pub mod registration;
pub mod resolver;

pub use cache::OidCache;
pub use pool::connect_pool;
pub use registration::{BoundHalfVector, HalfVecType};
pub use resolver::{lookup_type_oid, resolve_type_oid, OidResolver};

pub use pgvec_core::{HalfVector, PgvecError, Result, TypeOid, VectorCodec, WireFormat};
