#![cfg(feature = "std")]
//! Binary snapshots of generated puzzles, so a puzzle can be stored and
//! replayed later without regenerating it.

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Encode a puzzle with bincode.
pub fn encode<T: Serialize>(puzzle: &T) -> anyhow::Result<Vec<u8>> {
    bincode::serialize(puzzle).map_err(|e| anyhow::anyhow!("snapshot encode failed: {}", e))
}

/// Decode a puzzle produced by [`encode`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> anyhow::Result<T> {
    bincode::deserialize(bytes).map_err(|e| anyhow::anyhow!("snapshot decode failed: {}", e))
}

/// Write a snapshot to `path`.
pub fn save<T: Serialize, P: AsRef<Path>>(puzzle: &T, path: P) -> anyhow::Result<()> {
    let bytes = encode(puzzle)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Read a snapshot from `path`.
pub fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> anyhow::Result<T> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes)
}
