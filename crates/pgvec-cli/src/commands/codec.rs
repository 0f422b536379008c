//! encode / decode command implementations

use anyhow::{Context, Result};
use pgvec_core::{HalfVector, VectorCodec};

pub fn encode(literal: &str) -> Result<String> {
    let codec = VectorCodec::new();
    let vector = codec
        .decode_text(literal)
        .context("Failed to parse vector literal")?;
    tracing::debug!("Encoding {} dimensions", vector.len());

    let bytes = codec
        .encode_binary(&vector)
        .context("Failed to encode vector")?;
    Ok(hex::encode(bytes))
}

pub fn decode(input: &str, text: bool) -> Result<String> {
    let codec = VectorCodec::new();
    let vector: HalfVector = if text {
        codec
            .decode_text(input)
            .context("Failed to parse vector literal")?
    } else {
        let bytes = hex::decode(input.trim()).context("Input is not valid hex")?;
        codec
            .decode_binary(&bytes)
            .context("Failed to decode binary value")?
    };
    Ok(codec.encode_text(&vector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_literal() {
        assert_eq!(encode("[1,0.5]").unwrap(), "0002000000003c003800");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode("0002000000003c003800", false).unwrap(), "[1,0.5]");
    }

    #[test]
    fn test_decode_text_rounds_to_half() {
        let out = decode("[0.1, 1.0000001]", true).unwrap();
        assert!(out.starts_with("[0.0999"));
        assert!(out.ends_with(",1]"));
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(decode("zz", false).is_err());
        assert!(decode("000200000000", false).is_err());
        assert!(encode("1,2").is_err());
    }
}
