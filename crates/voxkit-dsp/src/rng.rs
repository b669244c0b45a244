//! Seeded RNG construction using PCG32 with BLAKE3 seed derivation.
//!
//! The only random component in the engine is the rasp effect's noise
//! stream. Seeds for it flow through this module so that a caller-supplied
//! seed reproduces output exactly, while independent components of the same
//! session draw from independent streams.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named component from the base seed.
///
/// Hashes the base seed concatenated with the component key via BLAKE3 so
/// different components (e.g. the rasp noise stream) get independent seeds
/// from one user-facing seed value.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().expect("hash has 32 bytes");
    u32::from_le_bytes(bytes)
}
