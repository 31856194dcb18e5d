//! Integration tests for term and dataset hashing

mod config_hashing;
mod dataset_digest;
mod term_hash_law;
