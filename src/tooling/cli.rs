//! CLI Tooling
//!
//! Command-line interface for term and dataset hashing. Every command is a
//! pure function of its input and the loaded configuration and returns its
//! output as a string for the binary to print.

use crate::cache::DigestCache;
use crate::config::{ConfigLoader, TermHashConfig};
use crate::dataset::{digest_dataset, signing_messages};
use crate::error::ApiError;
use crate::hasher::{HashAlgorithm, HashConfig, HashInput};
use crate::logging::LoggingConfig;
use crate::term::{parse_nquads, parse_term, term_hash, to_canonical};
use crate::types::Digest;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// termhash CLI - Deterministic hashing of RDF terms and datasets
#[derive(Parser)]
#[command(name = "termhash")]
#[command(about = "Deterministic hashing of RDF terms and datasets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory searched for termhash.toml
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging config with command-line flags applied over `base`
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hash a single term given in N-Triples syntax
    Term {
        /// Term, e.g. '<http://ex.org/a>', '"chat"@fr', '_:b0'
        term: String,
        /// Hash algorithm (identity, blake3)
        #[arg(long)]
        algorithm: Option<HashAlgorithm>,
        /// Hashed string (value, canonical)
        #[arg(long)]
        input: Option<HashInput>,
        /// BLAKE3 key as 64 hex characters
        #[arg(long)]
        key: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Digest an N-Quads document: per-statement leaves and Merkle root
    Nquads {
        /// N-Quads file, or '-' for stdin
        path: PathBuf,
        /// Print an inclusion proof for this canonical statement
        #[arg(long)]
        prove: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the signing messages of an N-Quads document
    Messages {
        /// N-Quads file, or '-' for stdin
        path: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the effective configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Term { .. } => "term",
        Commands::Nquads { .. } => "nquads",
        Commands::Messages { .. } => "messages",
        Commands::Config { .. } => "config",
    }
}

/// CLI context: loaded configuration plus shared digest caches
pub struct CliContext {
    config: TermHashConfig,
    term_cache: DigestCache,
    leaf_cache: DigestCache<Digest>,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(dir: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&dir)?
        };
        Ok(Self::with_config(config))
    }

    /// Create a context from an already-loaded configuration
    pub fn with_config(config: TermHashConfig) -> Self {
        let capacity = config.cache.capacity;
        Self {
            config,
            term_cache: DigestCache::new(capacity),
            leaf_cache: DigestCache::new(capacity),
        }
    }

    pub fn config(&self) -> &TermHashConfig {
        &self.config
    }

    /// Execute a command and return its output
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Term {
                term,
                algorithm,
                input,
                key,
                format,
            } => {
                let hash_config = HashConfig {
                    algorithm: algorithm.unwrap_or(self.config.hash.algorithm),
                    input: input.unwrap_or(self.config.hash.input),
                    key: key.clone().or_else(|| self.config.hash.key.clone()),
                };
                self.hash_term_command(term, &hash_config, format)
            }
            Commands::Nquads {
                path,
                prove,
                format,
            } => self.nquads_command(path, prove.as_deref(), format),
            Commands::Messages { path, format } => {
                let dataset = parse_nquads(&read_input(path)?)?;
                let messages: Vec<String> = signing_messages(&dataset)
                    .into_iter()
                    .map(|m| String::from_utf8_lossy(&m).into_owned())
                    .collect();
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&messages)?),
                    "text" => Ok(messages.join("\n")),
                    other => Err(invalid_format(other, "text or json")),
                }
            }
            Commands::Config { format } => match format.as_str() {
                "toml" => Ok(toml::to_string_pretty(&self.config)?),
                "json" => Ok(serde_json::to_string_pretty(&self.config)?),
                other => Err(invalid_format(other, "toml or json")),
            },
        }
    }

    fn hash_term_command(
        &self,
        input: &str,
        hash_config: &HashConfig,
        format: &str,
    ) -> Result<String, ApiError> {
        let term = parse_term(input)?;
        let digester = hash_config
            .digester()?
            .with_cache(self.term_cache.clone());
        let hash = digester.hash_term(&term);
        let canonical = to_canonical(&term);

        match format {
            "json" => Ok(serde_json::to_string_pretty(&json!({
                "kind": term.kind().as_str(),
                "value": term.value(),
                "canonical": canonical,
                "term_hash": term_hash(&term),
                "algorithm": hash_config.algorithm,
                "input": hash_config.input,
                "hash": hash,
            }))?),
            "text" => Ok(format!(
                "Kind: {}\nValue: {}\nCanonical: {}\nHash: {}",
                term.kind(),
                term.value(),
                canonical,
                hash
            )),
            other => Err(invalid_format(other, "text or json")),
        }
    }

    fn nquads_command(
        &self,
        path: &Path,
        prove: Option<&str>,
        format: &str,
    ) -> Result<String, ApiError> {
        let dataset = parse_nquads(&read_input(path)?)?;
        let digest = digest_dataset(&dataset, Some(&self.leaf_cache));

        let proof = match prove {
            Some(statement) => {
                let statement = statement.trim();
                Some(digest.inclusion_proof(statement).ok_or_else(|| {
                    ApiError::NotFound(format!(
                        "Statement not in dataset: {}",
                        statement
                    ))
                })?)
            }
            None => None,
        };

        match format {
            "json" => {
                let leaves: Vec<_> = digest
                    .leaves
                    .iter()
                    .map(|leaf| {
                        json!({
                            "statement": leaf.statement,
                            "digest": hex::encode(leaf.digest),
                        })
                    })
                    .collect();
                let mut out = json!({
                    "root": digest.root_hex(),
                    "quads": digest.leaves.len(),
                    "leaves": leaves,
                });
                if let Some(proof) = &proof {
                    out["proof"] = json!({
                        "index": proof.index,
                        "total": proof.total,
                        "hashes": proof.proof_hashes.iter().map(hex::encode).collect::<Vec<_>>(),
                    });
                }
                Ok(serde_json::to_string_pretty(&out)?)
            }
            "text" => {
                let mut out = String::new();
                let mut table = Table::new();
                table.load_preset(UTF8_BORDERS_ONLY);
                table.set_header(vec!["Statement", "Leaf"]);
                for leaf in &digest.leaves {
                    let leaf_hex = hex::encode(leaf.digest);
                    table.add_row(vec![leaf.statement.clone(), leaf_hex[..16].to_string()]);
                }
                if !digest.leaves.is_empty() {
                    out.push_str(&format!("{}\n", table));
                }
                out.push_str(&format!("Quads: {}\n", digest.leaves.len()));
                out.push_str(&format!("Root: {}", digest.root_hex()));
                if let Some(proof) = &proof {
                    out.push_str(&format!(
                        "\nProof: leaf {} of {}\n",
                        proof.index, proof.total
                    ));
                    let hashes: Vec<String> = proof.proof_hashes.iter().map(hex::encode).collect();
                    out.push_str(&hashes.join("\n"));
                }
                Ok(out)
            }
            other => Err(invalid_format(other, "text or json")),
        }
    }
}

fn invalid_format(format: &str, expected: &str) -> ApiError {
    ApiError::InvalidArgument(format!(
        "Invalid output format: {} (must be {})",
        format, expected
    ))
}

fn read_input(path: &Path) -> Result<String, ApiError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}
