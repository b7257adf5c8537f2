//! Seeded random streams.
//!
//! Each table draws from its own stream derived from the run seed and the
//! table name, so a stage's output depends only on the seed and its inputs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use retailgen_core::TableName;

/// FNV-1a mix of the run seed with a stream label.
pub fn derive_seed(seed: u64, stream: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in stream.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Random stream for generating `table`.
pub fn table_rng(seed: u64, table: TableName) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_seed(seed, table.as_str()))
}
