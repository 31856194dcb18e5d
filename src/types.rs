//! Core types shared across the hashing modules.

/// Digest: 256-bit BLAKE3 output
pub type Digest = [u8; 32];

/// LeafDigest: Digest of a single canonical quad line
pub type LeafDigest = Digest;

/// RootDigest: Merkle root over the leaf digests of a dataset
pub type RootDigest = Digest;
