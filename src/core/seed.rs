// src/core/seed.rs
//! Seed-derived ordering. Stands in for a PRNG so that identical inputs always
//! produce the same sequence.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over the UTF-8 bytes of `input`.
pub fn fnv1a32(input: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in input.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Sort key for `core_key` under `seed` and `salt`; the key itself breaks hash ties.
pub fn seeded_key(seed: &str, salt: &str, core_key: &str) -> (u32, String) {
    (fnv1a32(&format!("{seed}:{salt}:{core_key}")), core_key.to_string())
}
