//! Catalog identifiers

use serde::{Deserialize, Serialize};

/// A PostgreSQL type OID.
///
/// Assigned by the server when the extension is installed, so it differs
/// between database instances and has to be looked up at runtime. A value
/// is only meaningful for the database it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeOid(u32);

impl TypeOid {
    pub const fn new(oid: u32) -> Self {
        Self(oid)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TypeOid {
    fn from(oid: u32) -> Self {
        Self(oid)
    }
}

impl From<TypeOid> for u32 {
    fn from(oid: TypeOid) -> Self {
        oid.0
    }
}

impl std::fmt::Display for TypeOid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
