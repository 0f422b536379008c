//! The `(OID, codec)` registration pair
//!
//! `sqlx` looks custom types up by name on its own, but parameters bound
//! through [`HalfVecType::bind`] carry the OID resolved for this database
//! instead, which skips the per-connection name lookup and fails loudly if
//! the pair is used against a different database.

use pgvec_core::{HalfVector, TypeOid, VectorCodec};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, Postgres};
use sqlx::{Encode, Type};

/// `halfvec` type registration for one database.
///
/// Built once after the OID has been resolved and handed to whatever
/// connection setup needs it. Cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfVecType {
    oid: TypeOid,
    codec: VectorCodec,
}

impl HalfVecType {
    pub fn new(oid: TypeOid) -> Self {
        Self::with_codec(oid, VectorCodec::new())
    }

    pub fn with_codec(oid: TypeOid, codec: VectorCodec) -> Self {
        Self { oid, codec }
    }

    pub fn oid(&self) -> TypeOid {
        self.oid
    }

    pub fn codec(&self) -> &VectorCodec {
        &self.codec
    }

    /// Type info pinned to the resolved OID.
    pub fn pg_type_info(&self) -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(self.oid.get()))
    }

    /// Whether a column or parameter of type `ty` is handled by this pair.
    pub fn accepts(&self, ty: &PgTypeInfo) -> bool {
        ty.oid() == Some(Oid(self.oid.get())) || <HalfVector as Type<Postgres>>::compatible(ty)
    }

    /// Wrap `value` so it is sent as a parameter of exactly this OID.
    pub fn bind<'a>(&self, value: &'a HalfVector) -> BoundHalfVector<'a> {
        BoundHalfVector {
            value,
            registration: *self,
        }
    }
}

/// A [`HalfVector`] parameter tied to a resolved [`HalfVecType`].
#[derive(Debug, Clone, Copy)]
pub struct BoundHalfVector<'a> {
    value: &'a HalfVector,
    registration: HalfVecType,
}

impl BoundHalfVector<'_> {
    pub fn value(&self) -> &HalfVector {
        self.value
    }

    pub fn oid(&self) -> TypeOid {
        self.registration.oid
    }
}

impl Type<Postgres> for BoundHalfVector<'_> {
    fn type_info() -> PgTypeInfo {
        <HalfVector as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <HalfVector as Type<Postgres>>::compatible(ty)
    }
}

impl Encode<'_, Postgres> for BoundHalfVector<'_> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        let bytes = self.registration.codec.encode_binary(self.value)?;
        buf.extend_from_slice(&bytes);
        Ok(IsNull::No)
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(self.registration.pg_type_info())
    }

    fn size_hint(&self) -> usize {
        self.value.encoded_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_type_info() {
        let reg = HalfVecType::new(TypeOid::new(16_385));
        assert_eq!(reg.oid().get(), 16_385);
        assert_eq!(reg.pg_type_info().oid(), Some(Oid(16_385)));
        assert!(reg.accepts(&reg.pg_type_info()));
        assert!(reg.accepts(&PgTypeInfo::with_name("halfvec")));
        assert!(!reg.accepts(&PgTypeInfo::with_oid(Oid(16_386))));
    }

    #[test]
    fn test_bound_value_produces_oid() {
        let reg = HalfVecType::new(TypeOid::new(20_001));
        let v = HalfVector::from_f32(&[0.5; 4]);
        let bound = reg.bind(&v);
        assert_eq!(bound.oid(), reg.oid());
        assert_eq!(bound.value(), &v);
        assert_eq!(
            <BoundHalfVector<'_> as Encode<'_, Postgres>>::produces(&bound),
            Some(PgTypeInfo::with_oid(Oid(20_001)))
        );
        assert_eq!(
            <BoundHalfVector<'_> as Encode<'_, Postgres>>::size_hint(&bound),
            14
        );
    }

    #[test]
    fn test_bound_and_plain_encode_identically() {
        let v = HalfVector::from_f32(&[1.0, -1.0, 0.25]);
        let reg = HalfVecType::new(TypeOid::new(1));

        let mut plain = PgArgumentBuffer::default();
        <HalfVector as Encode<'_, Postgres>>::encode_by_ref(&v, &mut plain).unwrap();

        let mut bound = PgArgumentBuffer::default();
        let is_null =
            <BoundHalfVector<'_> as Encode<'_, Postgres>>::encode_by_ref(&reg.bind(&v), &mut bound)
                .unwrap();
        assert!(matches!(is_null, IsNull::No));

        let expected = v.encode_binary().unwrap();
        assert_eq!(plain.as_slice(), expected.as_slice());
        assert_eq!(bound.as_slice(), expected.as_slice());
    }
}
