use std::fs;
use tempfile::TempDir;
use termhash::config::ConfigLoader;
use termhash::term::parse_term;
use termhash::{hash_term, term_hash};

#[test]
fn default_config_hash_matches_term_hash() {
    let temp = TempDir::new().unwrap();
    let config = ConfigLoader::load(temp.path()).unwrap();
    let term = parse_term("\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>").unwrap();
    assert_eq!(hash_term(&config.hash, &term).unwrap(), term_hash(&term));
}

#[test]
fn configured_blake3_canonical_hash() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("termhash.toml"),
        "[hash]\nalgorithm = \"blake3\"\ninput = \"canonical\"\n",
    )
    .unwrap();
    let config = ConfigLoader::load(temp.path()).unwrap();
    let term = parse_term("\"chat\"@fr").unwrap();
    assert_eq!(
        hash_term(&config.hash, &term).unwrap(),
        blake3::hash(b"\"chat\"@fr").to_hex().to_string()
    );
}

#[test]
fn configured_bad_key_fails_at_build() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("keyed.toml");
    fs::write(&path, "[hash]\nalgorithm = \"blake3\"\nkey = \"00ff\"\n").unwrap();
    let config = ConfigLoader::load_from_file(&path).unwrap();
    let term = parse_term("<http://ex.org/a>").unwrap();
    assert!(hash_term(&config.hash, &term).is_err());
}
