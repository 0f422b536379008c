//! `sqlx` type-system impls for [`HalfVector`]
//!
//! Parameters are always sent in binary form. Result values are decoded
//! from whichever form the server used: binary for prepared statements,
//! text for the simple query protocol.

use crate::codec::{VectorCodec, WireFormat, TYPE_NAME};
use crate::vector::HalfVector;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{
    PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat, PgValueRef, Postgres,
};
use sqlx::{Decode, Encode, Type, TypeInfo};

const CODEC: VectorCodec = VectorCodec::new();

fn wire_format(format: PgValueFormat) -> WireFormat {
    match format {
        PgValueFormat::Binary => WireFormat::Binary,
        PgValueFormat::Text => WireFormat::Text,
    }
}

/// Decode a result value that arrived in `format`.
fn decode_value(format: PgValueFormat, bytes: &[u8]) -> Result<HalfVector, BoxDynError> {
    Ok(CODEC.decode(bytes, wire_format(format))?)
}

impl Type<Postgres> for HalfVector {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name(TYPE_NAME)
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        ty.name() == TYPE_NAME || *ty == PgTypeInfo::with_name(TYPE_NAME)
    }
}

impl PgHasArrayType for HalfVector {
    fn array_type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("_halfvec")
    }
}

impl Encode<'_, Postgres> for HalfVector {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        let bytes = CODEC.encode_binary(self)?;
        buf.extend_from_slice(&bytes);
        Ok(IsNull::No)
    }

    fn size_hint(&self) -> usize {
        self.encoded_len()
    }
}

impl<'r> Decode<'r, Postgres> for HalfVector {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        decode_value(value.format(), value.as_bytes()?)
    }
}
