//! resolve-oid command implementation

use anyhow::{Context, Result};
use pgvec_core::ResolverConfig;
use pgvec_postgres::OidResolver;

pub async fn execute(config: ResolverConfig) -> Result<()> {
    tracing::info!(
        "Looking up {}.{}",
        config.extension_name,
        config.type_name
    );

    let resolver = OidResolver::new(config).context("Invalid resolver configuration")?;
    let oid = resolver
        .resolve()
        .await
        .context("Failed to resolve type OID")?;

    println!("{}", oid);
    Ok(())
}
