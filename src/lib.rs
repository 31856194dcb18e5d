//! termhash: Deterministic RDF Term Hashing
//!
//! Hash-like identifiers for RDF terms and datasets. By default a term's
//! identifier is its lexical value; a configured [`hasher::HashConfig`] turns
//! that into a real digest over the value or the canonical N-Triples form.

pub mod cache;
pub mod config;
pub mod dataset;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod term;
pub mod tooling;
pub mod types;

pub use dataset::{Dataset, Quad};
pub use hasher::{hash_term, HashAlgorithm, HashConfig, HashInput, TermHasher};
pub use term::{term_hash, Term, TermKind};
