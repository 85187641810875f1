//! Signing-key bootstrap.

use anyhow::{bail, Context, Result};
use rand::RngCore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Loads the 32-byte token-signing seed from `path`, generating and
/// persisting a fresh one on first run.
pub fn load_or_generate_seed(path: &Path) -> Result<[u8; 32]> {
    if path.exists() {
        info!("Loading token signing key from {:?}", path);
        let bytes = fs::read(path).context("Failed to read signing key file")?;
        let Ok(seed) = <[u8; 32]>::try_from(bytes.as_slice()) else {
            bail!(
                "signing key file {:?} must contain exactly 32 bytes, found {}",
                path,
                bytes.len()
            );
        };
        Ok(seed)
    } else {
        info!("Generating new token signing key at {:?}", path);
        let mut seed = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        fs::write(path, seed).context("Failed to write signing key file")?;
        Ok(seed)
    }
}
