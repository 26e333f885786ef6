//! State fingerprints: domain-separated SHA-256 digests of grids.
//!
//! Hashed bytes: `domain || side_le || value_le*`.
//! Displayed as `"sha256:<hex_digest>"`.

use std::fmt;

use sha2::{Digest, Sha256};

/// Domain prefix for grid state hashing. Null-terminated.
pub const DOMAIN_GRID_STATE: &[u8] = b"SLIDETILE::GRID_STATE::V1\0";

/// SHA-256 digest of a grid's side and cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateFingerprint([u8; 32]);

impl StateFingerprint {
    #[must_use]
    pub const fn digest(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for StateFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha256:{}", hex::encode(self.0))
    }
}

/// Fingerprint a row-major cell slice of a `side`×`side` grid.
#[must_use]
pub fn fingerprint_cells(side: usize, cells: &[u32]) -> StateFingerprint {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_GRID_STATE);
    hasher.update(u32::try_from(side).unwrap_or(u32::MAX).to_le_bytes());
    for value in cells {
        hasher.update(value.to_le_bytes());
    }
    StateFingerprint(hasher.finalize().into())
}
