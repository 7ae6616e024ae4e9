//! On-disk save format.
//!
//! Layout: 4-byte magic, little-endian format version, SHA-256 of the
//! compressed payload, then the payload itself (MessagePack serialized,
//! LZ4 compressed). The checksum is verified before any deserialization
//! is attempted.

use super::error::SaveError;
use crate::economy::{EconomyConfig, EconomyState};
use crate::models::MatchRecord;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const SAVE_VERSION: u32 = 1;

const MAGIC: &[u8; 4] = b"NXL1";
const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = 4 + 4 + CHECKSUM_LEN;

/// Serializable snapshot of a full campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSave {
    pub version: u32,
    /// Unix timestamp of the save.
    pub timestamp: i64,
    pub economy: EconomyState,
    pub config: EconomyConfig,
    pub match_history: Vec<MatchRecord>,
}

pub fn serialize_and_compress(save: &GameSave) -> Result<Vec<u8>, SaveError> {
    let encoded = rmp_serde::to_vec_named(save)?;
    let compressed = lz4_flex::compress_prepend_size(&encoded);

    let mut out = Vec::with_capacity(HEADER_LEN + compressed.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&SAVE_VERSION.to_le_bytes());
    out.extend_from_slice(&checksum(&compressed));
    out.extend_from_slice(&compressed);
    Ok(out)
}

pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<GameSave, SaveError> {
    if bytes.len() < HEADER_LEN || &bytes[0..4] != MAGIC {
        return Err(SaveError::Corrupted);
    }

    let mut version_bytes = [0u8; 4];
    version_bytes.copy_from_slice(&bytes[4..8]);
    let version = u32::from_le_bytes(version_bytes);
    if version != SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: version, expected: SAVE_VERSION });
    }

    let stored_checksum = &bytes[8..HEADER_LEN];
    let payload = &bytes[HEADER_LEN..];
    if stored_checksum != checksum(payload).as_slice() {
        return Err(SaveError::ChecksumMismatch);
    }

    let decoded =
        lz4_flex::decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;
    Ok(rmp_serde::from_slice(&decoded)?)
}

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(payload);
    hasher.finalize().into()
}
