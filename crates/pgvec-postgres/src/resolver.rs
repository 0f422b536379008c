//! Catalog lookup of the extension type OID

use pgvec_core::{observe, PgvecError, ResolverConfig, Result, TypeOid};
use sqlx::postgres::types::Oid;
use sqlx::postgres::PgConnection;
use sqlx::Connection;
use std::time::Instant;

/// Types installed by an extension live in the extension's namespace.
const TYPE_OID_QUERY: &str = "\
SELECT t.oid \
FROM pg_catalog.pg_type t \
JOIN pg_catalog.pg_namespace n ON n.oid = t.typnamespace \
JOIN pg_catalog.pg_extension e ON e.extnamespace = n.oid \
WHERE t.typname = $1 AND e.extname = $2";

pub(crate) fn connection_error(context: &str, err: impl std::fmt::Display) -> PgvecError {
    PgvecError::ConnectionError(format!("{}: {}", context, err))
}

/// Look up the OID of `type_name` installed by `extension_name` on an
/// already-open connection.
///
/// Read-only; safe to repeat.
pub async fn lookup_type_oid(
    conn: &mut PgConnection,
    extension_name: &str,
    type_name: &str,
) -> Result<TypeOid> {
    let row: Option<Oid> = sqlx::query_scalar(TYPE_OID_QUERY)
        .bind(type_name)
        .bind(extension_name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| connection_error("type OID lookup failed", e))?;

    match row {
        Some(Oid(oid)) if oid != 0 => Ok(TypeOid::new(oid)),
        _ => Err(PgvecError::TypeNotFound {
            extension: extension_name.to_string(),
            type_name: type_name.to_string(),
        }),
    }
}

/// Resolves the `halfvec` OID over a short-lived connection.
///
/// Resolution does not retry; wrap [`resolve`](Self::resolve) if the
/// database may not be up yet. Callers should resolve once per database
/// and keep the result for the lifetime of their pool (see
/// [`OidCache`](crate::OidCache)).
#[derive(Debug, Clone)]
pub struct OidResolver {
    config: ResolverConfig,
}

impl OidResolver {
    pub fn new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Open a connection, run the catalog query, close the connection.
    pub async fn resolve(&self) -> Result<TypeOid> {
        let start = Instant::now();
        let result = self.resolve_inner().await;
        observe::record_resolve(start.elapsed(), result.is_ok());
        result
    }

    async fn resolve_inner(&self) -> Result<TypeOid> {
        tracing::debug!(
            extension = %self.config.extension_name,
            type_name = %self.config.type_name,
            "Resolving type OID"
        );

        let connect = PgConnection::connect(&self.config.database_url);
        let connected = match self.config.connect_timeout() {
            Some(timeout) => tokio::time::timeout(timeout, connect).await.map_err(|_| {
                PgvecError::ConnectionError(format!("connect timed out after {:?}", timeout))
            })?,
            None => connect.await,
        };
        let mut conn = connected.map_err(|e| connection_error("failed to connect", e))?;

        let result = lookup_type_oid(
            &mut conn,
            &self.config.extension_name,
            &self.config.type_name,
        )
        .await;

        if let Err(e) = conn.close().await {
            tracing::debug!("Closing OID lookup connection failed: {}", e);
        }

        let oid = result?;
        tracing::info!(
            "Resolved {}.{} type OID {}",
            self.config.extension_name,
            self.config.type_name,
            oid
        );
        Ok(oid)
    }
}

/// One-shot form of [`OidResolver::resolve`].
///
/// Applies no timeout of its own; cancel the future or use
/// [`OidResolver`] with a configured timeout to bound it.
pub async fn resolve_type_oid(
    database_url: &str,
    extension_name: &str,
    type_name: &str,
) -> Result<TypeOid> {
    let config = ResolverConfig::new(database_url)
        .with_extension_name(extension_name)
        .with_type_name(type_name);
    OidResolver::new(config)?.resolve().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_config() {
        let err = OidResolver::new(ResolverConfig::new("postgres://db").with_type_name(""))
            .unwrap_err();
        assert!(matches!(err, PgvecError::Config(_)));
    }

    #[test]
    fn test_default_resolver_has_no_timeout() {
        let resolver = OidResolver::new(ResolverConfig::new("postgres://db")).unwrap();
        assert_eq!(resolver.config().connect_timeout(), None);
    }

    #[tokio::test]
    async fn test_configured_timeout_bounds_connect() {
        // TEST-NET-1 address; never answers
        let config = ResolverConfig::new("postgres://nobody@192.0.2.1:5432/none")
            .with_connect_timeout_ms(50);
        let start = std::time::Instant::now();
        let err = OidResolver::new(config).unwrap().resolve().await.unwrap_err();
        assert!(matches!(err, PgvecError::ConnectionError(_)));
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_query_filters_by_both_names() {
        assert!(TYPE_OID_QUERY.contains("t.typname = $1"));
        assert!(TYPE_OID_QUERY.contains("e.extname = $2"));
    }

    #[tokio::test]
    async fn test_unparseable_url_is_connection_error() {
        let err = resolve_type_oid("not a connection string", "vector", "halfvec")
            .await
            .unwrap_err();
        assert!(matches!(err, PgvecError::ConnectionError(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let config = ResolverConfig::new("postgres://nobody@127.0.0.1:1/none")
            .with_connect_timeout_ms(2000);
        let err = OidResolver::new(config).unwrap().resolve().await.unwrap_err();
        assert!(matches!(err, PgvecError::ConnectionError(_)));
    }
}
