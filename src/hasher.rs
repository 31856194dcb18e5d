//! Term Hashing
//!
//! A [`TermHasher`] maps a string to a string. [`HashConfig`] selects the
//! hasher and which string of a term it is applied to: the bare lexical
//! value, or the canonical N-Triples form that also covers kind, datatype,
//! and language tag.
//!
//! The default configuration is the identity over the value, which matches
//! [`crate::term::term_hash`].

use crate::cache::DigestCache;
use crate::dataset::Quad;
use crate::error::HashError;
use crate::term::{to_canonical, Term};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// String-to-string hash function applied to a term's input string
pub trait TermHasher: Send + Sync {
    fn hash(&self, input: &str) -> String;
}

/// Returns the input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityHasher;

impl TermHasher for IdentityHasher {
    fn hash(&self, input: &str) -> String {
        input.to_string()
    }
}

/// Lowercase hex BLAKE3-256, optionally keyed
#[derive(Debug, Clone, Default)]
pub struct Blake3Hasher {
    key: Option<[u8; 32]>,
}

impl Blake3Hasher {
    pub fn new() -> Self {
        Self { key: None }
    }

    pub fn keyed(key: [u8; 32]) -> Self {
        Self { key: Some(key) }
    }

    /// Parse a 64-character hex key
    pub fn from_hex_key(key: &str) -> Result<Self, HashError> {
        let bytes = hex::decode(key.trim())
            .map_err(|e| HashError::InvalidKey(format!("not valid hex: {}", e)))?;
        let key: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
            HashError::InvalidKey(format!("expected 32 bytes, got {}", b.len()))
        })?;
        Ok(Self::keyed(key))
    }
}

impl TermHasher for Blake3Hasher {
    fn hash(&self, input: &str) -> String {
        let digest = match &self.key {
            Some(key) => blake3::keyed_hash(key, input.as_bytes()),
            None => blake3::hash(input.as_bytes()),
        };
        digest.to_hex().to_string()
    }
}

/// Adapts a plain function or closure into a [`TermHasher`]
pub struct FnHasher<F>(pub F);

impl<F> TermHasher for FnHasher<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn hash(&self, input: &str) -> String {
        (self.0)(input)
    }
}

/// Hash algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Identity,
    Blake3,
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(HashAlgorithm::Identity),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(format!(
                "unknown algorithm '{}' (expected 'identity' or 'blake3')",
                other
            )),
        }
    }
}

/// Which string of a term is hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashInput {
    /// The lexical value only
    #[default]
    Value,
    /// The canonical N-Triples form
    Canonical,
}

impl std::str::FromStr for HashInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(HashInput::Value),
            "canonical" => Ok(HashInput::Canonical),
            other => Err(format!(
                "unknown input '{}' (expected 'value' or 'canonical')",
                other
            )),
        }
    }
}

/// Hash configuration (`[hash]` table)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    #[serde(default)]
    pub input: HashInput,

    /// 64 hex chars; enables keyed BLAKE3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl HashConfig {
    pub fn build(&self) -> Result<Box<dyn TermHasher>, HashError> {
        match (self.algorithm, &self.key) {
            (HashAlgorithm::Identity, None) => Ok(Box::new(IdentityHasher)),
            (HashAlgorithm::Identity, Some(_)) => Err(HashError::KeyWithoutDigest),
            (HashAlgorithm::Blake3, None) => Ok(Box::new(Blake3Hasher::new())),
            (HashAlgorithm::Blake3, Some(key)) => Ok(Box::new(Blake3Hasher::from_hex_key(key)?)),
        }
    }

    pub fn digester(&self) -> Result<TermDigester, HashError> {
        Ok(TermDigester::new(self.build()?, self.input).with_cache_scope(self.cache_scope()))
    }

    /// Identifies the hash function for cache keys; the key is fingerprinted,
    /// never stored.
    fn cache_scope(&self) -> String {
        match (self.algorithm, &self.key) {
            (HashAlgorithm::Identity, _) => "identity".to_string(),
            (HashAlgorithm::Blake3, None) => "blake3".to_string(),
            (HashAlgorithm::Blake3, Some(key)) => {
                let fingerprint = blake3::hash(key.trim().to_ascii_lowercase().as_bytes());
                format!("blake3-keyed:{}", &fingerprint.to_hex()[..16])
            }
        }
    }
}

/// A built hasher bound to its input mode
///
/// Cache entries are keyed by the digester's cache scope plus the hashed
/// string, so one [`DigestCache`] can be shared by digesters built from
/// different [`HashConfig`]s. Digesters made with [`TermDigester::new`] share
/// the empty scope; give custom hashers distinct scopes before sharing a
/// cache between them.
pub struct TermDigester {
    hasher: Box<dyn TermHasher>,
    input: HashInput,
    cache: Option<DigestCache>,
    scope: String,
}

impl TermDigester {
    pub fn new(hasher: Box<dyn TermHasher>, input: HashInput) -> Self {
        Self {
            hasher,
            input,
            cache: None,
            scope: String::new(),
        }
    }

    pub fn with_cache(mut self, cache: DigestCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_cache_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn cache_scope(&self) -> &str {
        &self.scope
    }

    pub fn input(&self) -> HashInput {
        self.input
    }

    pub fn hash_term(&self, term: &Term) -> String {
        let hashed = match self.input {
            HashInput::Value => self.hash_str(term.value()),
            HashInput::Canonical => self.hash_str(&to_canonical(term)),
        };
        debug!(kind = %term.kind(), input = ?self.input, "Hashed term");
        hashed
    }

    /// Hash a quad's canonical statement, regardless of input mode
    pub fn hash_quad(&self, quad: &Quad) -> String {
        self.hash_str(&quad.to_canonical())
    }

    fn hash_str(&self, input: &str) -> String {
        match &self.cache {
            Some(cache) => {
                let key = format!("{}\u{0}{}", self.scope, input);
                cache.get_or_compute(&key, || self.hasher.hash(input))
            }
            None => self.hasher.hash(input),
        }
    }
}

/// Hash one term under a configuration
pub fn hash_term(config: &HashConfig, term: &Term) -> Result<String, HashError> {
    Ok(config.digester()?.hash_term(term))
}
