//! Optional metrics instrumentation.
//!
//! When the `observe` feature is enabled, codec and resolver calls emit
//! counters and histograms via the [`metrics`] crate. A downstream
//! application must install a recorder to collect them.
//!
//! Without the feature every function here is a no-op.

use crate::codec::WireFormat;

#[cfg(feature = "observe")]
fn format_label(format: WireFormat) -> &'static str {
    match format {
        WireFormat::Binary => "binary",
        WireFormat::Text => "text",
    }
}

/// - `pgvec.codec.encode_total` – counter with `format` label
#[inline]
pub fn record_encode(format: WireFormat) {
    #[cfg(feature = "observe")]
    {
        metrics::counter!("pgvec.codec.encode_total", "format" => format_label(format))
            .increment(1);
    }
    #[cfg(not(feature = "observe"))]
    {
        let _ = format;
    }
}

/// - `pgvec.codec.decode_total` – counter with `format` and `outcome` labels
#[inline]
pub fn record_decode(format: WireFormat, success: bool) {
    #[cfg(feature = "observe")]
    {
        let outcome = if success { "ok" } else { "malformed" };
        metrics::counter!(
            "pgvec.codec.decode_total",
            "format" => format_label(format),
            "outcome" => outcome
        )
        .increment(1);
    }
    #[cfg(not(feature = "observe"))]
    {
        let _ = (format, success);
    }
}

/// Record a catalog lookup for the type OID.
///
/// - `pgvec.resolver.total` – counter with `outcome` label
/// - `pgvec.resolver.duration_seconds` – histogram
#[inline]
pub fn record_resolve(duration: std::time::Duration, success: bool) {
    #[cfg(feature = "observe")]
    {
        let outcome = if success { "ok" } else { "fail" };
        metrics::counter!("pgvec.resolver.total", "outcome" => outcome).increment(1);
        metrics::histogram!("pgvec.resolver.duration_seconds").record(duration.as_secs_f64());
    }
    #[cfg(not(feature = "observe"))]
    {
        let _ = (duration, success);
    }
}
