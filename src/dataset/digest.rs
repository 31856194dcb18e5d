//! Dataset digests and signing messages
//!
//! Each canonical statement is hashed with BLAKE3 into a leaf; the leaves,
//! in canonical statement order, form a Merkle tree whose root identifies
//! the dataset. Blank node labels are hashed as given.

use super::Dataset;
use crate::cache::DigestCache;
use crate::types::{Digest, LeafDigest, RootDigest};
use rs_merkle::{MerkleProof, MerkleTree};
use tracing::{debug, info};

/// BLAKE3 node hash for `rs_merkle`
#[derive(Clone)]
pub struct Blake3Algorithm;

impl rs_merkle::Hasher for Blake3Algorithm {
    type Hash = Digest;

    fn hash(data: &[u8]) -> Digest {
        *blake3::hash(data).as_bytes()
    }
}

/// Leaf of a dataset digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestLeaf {
    pub statement: String,
    pub digest: LeafDigest,
}

/// Leaves plus Merkle root of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetDigest {
    pub leaves: Vec<DigestLeaf>,
    pub root: RootDigest,
}

impl DatasetDigest {
    pub fn root_hex(&self) -> String {
        hex::encode(self.root)
    }

    /// Merkle inclusion proof for a canonical statement, if present
    pub fn inclusion_proof(&self, statement: &str) -> Option<InclusionProof> {
        let index = self
            .leaves
            .binary_search_by(|leaf| leaf.statement.as_str().cmp(statement))
            .ok()?;
        let hashes: Vec<Digest> = self.leaves.iter().map(|l| l.digest).collect();
        let tree = MerkleTree::<Blake3Algorithm>::from_leaves(&hashes);
        let proof = tree.proof(&[index]);
        Some(InclusionProof {
            index,
            total: self.leaves.len(),
            proof_hashes: proof.proof_hashes().to_vec(),
        })
    }
}

/// Proof that one statement is a leaf under a dataset root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionProof {
    pub index: usize,
    pub total: usize,
    pub proof_hashes: Vec<Digest>,
}

impl InclusionProof {
    pub fn verify(&self, root: &RootDigest, statement: &str) -> bool {
        let leaf = leaf_digest(statement);
        // A one-leaf tree has the leaf as its root and an empty proof
        if self.total == 1 {
            return self.index == 0 && self.proof_hashes.is_empty() && leaf == *root;
        }
        MerkleProof::<Blake3Algorithm>::new(self.proof_hashes.clone()).verify(
            *root,
            &[self.index],
            &[leaf],
            self.total,
        )
    }
}

fn leaf_digest(statement: &str) -> LeafDigest {
    *blake3::hash(statement.as_bytes()).as_bytes()
}

/// Digest a dataset
///
/// The root depends only on the set of statements, not on insertion order.
/// An empty dataset has the BLAKE3 digest of empty input as its root.
pub fn digest_dataset(dataset: &Dataset, cache: Option<&DigestCache<Digest>>) -> DatasetDigest {
    let leaves: Vec<DigestLeaf> = dataset
        .statements()
        .map(|statement| {
            let digest = match cache {
                Some(cache) => cache.get_or_compute(statement, || leaf_digest(statement)),
                None => leaf_digest(statement),
            };
            DigestLeaf {
                statement: statement.to_string(),
                digest,
            }
        })
        .collect();

    let hashes: Vec<Digest> = leaves.iter().map(|l| l.digest).collect();
    let root = MerkleTree::<Blake3Algorithm>::from_leaves(&hashes)
        .root()
        .unwrap_or_else(|| *blake3::hash(&[]).as_bytes());

    info!(
        quads = leaves.len(),
        root = %hex::encode(root),
        "Computed dataset digest"
    );

    DatasetDigest { leaves, root }
}

/// One message per canonical statement, in canonical order
///
/// Suitable as the ordered message list of a multi-message signature scheme
/// where each statement can be disclosed independently.
pub fn signing_messages(dataset: &Dataset) -> Vec<Vec<u8>> {
    let messages: Vec<Vec<u8>> = dataset
        .statements()
        .map(|s| s.as_bytes().to_vec())
        .collect();
    debug!(messages = messages.len(), "Prepared signing messages");
    messages
}
