//! The half-precision vector value type

use crate::error::{PgvecError, Result};
use crate::float16::Half;
use crate::wire;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A fixed-length vector of half-precision floats.
///
/// Values are rounded to half precision once, at construction, and never
/// change afterwards. Equality is decided in half-precision space, so two
/// vectors built from slightly different `f32` inputs compare equal when
/// the inputs round to the same halves.
///
/// # Example
///
/// ```
/// use pgvec_core::HalfVector;
///
/// let a = HalfVector::from_f32(&[1.0000001, 0.25]);
/// let b = HalfVector::from_f32(&[1.0, 0.25]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_f32(), vec![1.0, 0.25]);
/// ```
#[derive(Clone, Default)]
pub struct HalfVector {
    values: Vec<Half>,
}

impl HalfVector {
    /// Round every element to the nearest half. Never fails.
    pub fn from_f32(values: &[f32]) -> Self {
        Self {
            values: values.iter().copied().map(Half::from_f32).collect(),
        }
    }

    pub fn from_halves(values: Vec<Half>) -> Self {
        Self { values }
    }

    /// Widen every element back to `f32`.
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|h| h.to_f32()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Alias of [`len`](Self::len), matching the column's `halfvec(n)` notion.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn as_halves(&self) -> &[Half] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).map(|h| h.to_f32())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.values.iter().map(|h| h.to_f32())
    }

    /// Element-wise equality in half-precision space.
    pub fn equals(&self, other: &HalfVector) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.same_value(*b))
    }

    /// Compare against full-precision values after rounding them to half.
    pub fn equals_f32(&self, other: &[f32]) -> bool {
        self.values.len() == other.len()
            && self
                .values
                .iter()
                .zip(other)
                .all(|(a, b)| a.same_value(Half::from_f32(*b)))
    }

    /// Size of [`encode_binary`](Self::encode_binary)'s output.
    pub fn encoded_len(&self) -> usize {
        wire::encoded_len(self.values.len())
    }

    /// Serialize to the `halfvec` binary wire form.
    ///
    /// Fails only when the vector has more elements than the `u16` count
    /// field can express.
    pub fn encode_binary(&self) -> Result<Vec<u8>> {
        wire::encode_binary(&self.values)
    }

    /// Parse the `halfvec` binary wire form.
    ///
    /// Returns [`PgvecError::MalformedWireData`] when the buffer is shorter
    /// than its header claims, has trailing bytes, or carries non-zero
    /// reserved fields.
    pub fn decode_binary(buf: &[u8]) -> Result<Self> {
        wire::decode_binary(buf).map(Self::from_halves)
    }

    /// Render as `[v1,v2,...]`.
    pub fn encode_text(&self) -> String {
        wire::encode_text(&self.values)
    }

    /// Parse `[v1,v2,...]`. Elements are rounded to half precision.
    pub fn decode_text(s: &str) -> Result<Self> {
        wire::decode_text(s).map(Self::from_halves)
    }
}

impl PartialEq for HalfVector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl PartialEq<[f32]> for HalfVector {
    fn eq(&self, other: &[f32]) -> bool {
        self.equals_f32(other)
    }
}

impl PartialEq<Vec<f32>> for HalfVector {
    fn eq(&self, other: &Vec<f32>) -> bool {
        self.equals_f32(other)
    }
}

impl From<Vec<f32>> for HalfVector {
    fn from(values: Vec<f32>) -> Self {
        Self::from_f32(&values)
    }
}

impl From<&[f32]> for HalfVector {
    fn from(values: &[f32]) -> Self {
        Self::from_f32(values)
    }
}

impl From<HalfVector> for Vec<f32> {
    fn from(v: HalfVector) -> Self {
        v.to_f32()
    }
}

impl fmt::Display for HalfVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_text())
    }
}

impl fmt::Debug for HalfVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HalfVector(dims={}, {})", self.len(), self)
    }
}

impl FromStr for HalfVector {
    type Err = PgvecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode_text(s)
    }
}

impl Serialize for HalfVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for HalfVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<f32>::deserialize(deserializer)?;
        Ok(Self::from_f32(&values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_preserved() {
        for len in [0usize, 1, 3, 512] {
            let input = vec![0.125f32; len];
            let v = HalfVector::from_f32(&input);
            assert_eq!(v.len(), len);
            assert_eq!(v.to_f32().len(), len);
        }
        assert!(HalfVector::from_f32(&[]).is_empty());
    }

    #[test]
    fn test_precision_loss_equality() {
        let a = HalfVector::from_f32(&[1.0000001]);
        let b = HalfVector::from_f32(&[1.0]);
        assert_eq!(a, b);
        // the same holds when comparing against raw f32 input
        assert!(a.equals_f32(&[1.0]));
        assert!(b == vec![1.0000001f32]);
    }

    #[test]
    fn test_inequality() {
        let a = HalfVector::from_f32(&[1.0, 2.0]);
        assert_ne!(a, HalfVector::from_f32(&[1.0, 2.5]));
        assert_ne!(a, HalfVector::from_f32(&[1.0]));
        assert!(!a.equals_f32(&[1.0, 2.0, 3.0]));
        // 0.1 is not representable; the widened value differs from the input
        let tenth = HalfVector::from_f32(&[0.1]);
        assert_ne!(tenth.to_f32()[0], 0.1);
        assert!(tenth.equals_f32(&[0.1]));
    }

    #[test]
    fn test_nan_and_signed_zero() {
        let a = HalfVector::from_f32(&[f32::NAN, -0.0]);
        let b = HalfVector::from_f32(&[f32::NAN, 0.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_512_halves_scenario() {
        let v = HalfVector::from_f32(&vec![0.5; 512]);
        let bytes = v.encode_binary().unwrap();
        assert_eq!(bytes.len(), 1030);
        assert_eq!(v.encoded_len(), 1030);
        assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), 512);
        assert_eq!(&bytes[2..6], &[0, 0, 0, 0]);
        assert!(bytes[6..].chunks(2).all(|c| c == [0x38, 0x00]));
    }

    #[test]
    fn test_reserved_field_rejected() {
        let mut bytes = HalfVector::from_f32(&[1.0]).encode_binary().unwrap();
        bytes[3] = 1;
        assert!(matches!(
            HalfVector::decode_binary(&bytes),
            Err(PgvecError::MalformedWireData(_))
        ));
    }

    #[test]
    fn test_header_claims_more_than_present() {
        // header only, declaring 2 elements
        let buf = [0x00, 0x02, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            HalfVector::decode_binary(&buf),
            Err(PgvecError::MalformedWireData(_))
        ));
    }

    #[test]
    fn test_display_and_parse() {
        let v: HalfVector = "[0.5, 2, -1.5]".parse().unwrap();
        assert_eq!(v.to_string(), "[0.5,2,-1.5]");
        assert_eq!(format!("{:?}", v), "HalfVector(dims=3, [0.5,2,-1.5])");
        assert!("[0.5;2]".parse::<HalfVector>().is_err());
    }

    #[test]
    fn test_accessors() {
        let v = HalfVector::from(vec![1.0f32, 2.0, 3.0]);
        assert_eq!(v.dimensions(), 3);
        assert_eq!(v.get(1), Some(2.0));
        assert_eq!(v.get(3), None);
        assert_eq!(v.iter().sum::<f32>(), 6.0);
        assert_eq!(v.as_halves()[0], Half::ONE);
        let back: Vec<f32> = v.into();
        assert_eq!(back, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_serde_as_sequence() {
        let v = HalfVector::from_f32(&[1.0, 0.5]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,0.5]");
        let back: HalfVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
