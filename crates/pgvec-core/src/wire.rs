//! Byte and text layouts of a `halfvec` value
//!
//! Binary layout (all fields big-endian):
//!
//! ```text
//! +--------+--------+--------+------------------------+
//! | dim:u16| unused | flags  | dim x binary16 element |
//! +--------+--------+--------+------------------------+
//! ```
//!
//! `unused` and `flags` must be zero.

use crate::error::{PgvecError, Result};
use crate::float16::Half;
use std::fmt::Write;

/// Size of the fixed header in bytes.
pub const HEADER_LEN: usize = 6;

/// Largest dimension count the `u16` header field can carry.
pub const MAX_DIMENSIONS: usize = u16::MAX as usize;

pub(crate) fn encoded_len(dims: usize) -> usize {
    HEADER_LEN + dims * 2
}

pub(crate) fn encode_binary(values: &[Half]) -> Result<Vec<u8>> {
    if values.len() > MAX_DIMENSIONS {
        return Err(PgvecError::DimensionLimit {
            len: values.len(),
            max: MAX_DIMENSIONS,
        });
    }

    let mut buf = Vec::with_capacity(encoded_len(values.len()));
    buf.extend_from_slice(&(values.len() as u16).to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes()); // unused
    buf.extend_from_slice(&0u16.to_be_bytes()); // flags
    for h in values {
        buf.extend_from_slice(&h.to_be_bytes());
    }
    Ok(buf)
}

pub(crate) fn decode_binary(buf: &[u8]) -> Result<Vec<Half>> {
    if buf.len() < HEADER_LEN {
        return Err(PgvecError::MalformedWireData(format!(
            "buffer of {} bytes is shorter than the {}-byte header",
            buf.len(),
            HEADER_LEN
        )));
    }

    let dims = u16::from_be_bytes([buf[0], buf[1]]) as usize;
    let unused = u16::from_be_bytes([buf[2], buf[3]]);
    let flags = u16::from_be_bytes([buf[4], buf[5]]);

    if unused != 0 {
        return Err(PgvecError::MalformedWireData(format!(
            "reserved header field is {:#06x}, expected 0",
            unused
        )));
    }
    if flags != 0 {
        return Err(PgvecError::MalformedWireData(format!(
            "flags header field is {:#06x}, expected 0",
            flags
        )));
    }

    let expected = encoded_len(dims);
    if buf.len() != expected {
        return Err(PgvecError::MalformedWireData(format!(
            "header declares {} dimensions ({} bytes) but buffer has {} bytes",
            dims,
            expected,
            buf.len()
        )));
    }

    Ok(buf[HEADER_LEN..]
        .chunks_exact(2)
        .map(|c| Half::from_be_bytes([c[0], c[1]]))
        .collect())
}

pub(crate) fn encode_text(values: &[Half]) -> String {
    // most elements render in under 12 characters
    let mut out = String::with_capacity(2 + values.len() * 12);
    out.push('[');
    for (i, h) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // writing into a String cannot fail
        let _ = write!(out, "{}", h.to_f32());
    }
    out.push(']');
    out
}

pub(crate) fn decode_text(s: &str) -> Result<Vec<Half>> {
    let s = s.trim();
    let inner = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| {
            PgvecError::MalformedTextData(format!("expected '[...]', got '{}'", s))
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            if token.is_empty() {
                return Err(PgvecError::MalformedTextData(format!(
                    "empty element at position {}",
                    i
                )));
            }
            token.parse::<f32>().map(Half::from_f32).map_err(|e| {
                PgvecError::MalformedTextData(format!(
                    "invalid element '{}' at position {}: {}",
                    token, i, e
                ))
            })
        })
        .collect()
}
