//! Pool setup with a resolved `halfvec` registration

use crate::registration::HalfVecType;
use crate::resolver::{connection_error, OidResolver};
use pgvec_core::{ResolverConfig, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Resolve the `halfvec` OID once, then open a pool against the same
/// database.
///
/// The returned [`HalfVecType`] is valid for as long as the pool talks to
/// that database; connecting the same config to another instance needs a
/// fresh call.
pub async fn connect_pool(
    config: &ResolverConfig,
    options: PgPoolOptions,
) -> Result<(PgPool, HalfVecType)> {
    let oid = OidResolver::new(config.clone())?.resolve().await?;

    let pool = options
        .connect(&config.database_url)
        .await
        .map_err(|e| connection_error("failed to open pool", e))?;

    tracing::info!(
        "Opened pool with {}.{} registered as OID {}",
        config.extension_name,
        config.type_name,
        oid
    );
    Ok((pool, HalfVecType::new(oid)))
}
