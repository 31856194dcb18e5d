use std::fs;

use tempfile::TempDir;
use termhash::config::TermHashConfig;
use termhash::error::ApiError;
use termhash::tooling::cli::{CliContext, Commands};
use termhash::HashAlgorithm;

const DOC: &str = "<http://ex.org/s> <http://ex.org/p> \"o\" .\n_:b <http://ex.org/p> <http://ex.org/s> <http://ex.org/g> .\n";

fn write_doc(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("data.nq");
    fs::write(&path, DOC).unwrap();
    path
}

#[test]
fn nquads_json_contract_has_required_fields() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);
    let cli = CliContext::with_config(TermHashConfig::default());

    let output = cli
        .execute(&Commands::Nquads {
            path,
            prove: Some("<http://ex.org/s> <http://ex.org/p> \"o\" .".to_string()),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.get("root").and_then(|v| v.as_str()).map(str::len), Some(64));
    assert_eq!(parsed.get("quads").and_then(|v| v.as_u64()), Some(2));
    let leaves = parsed.get("leaves").and_then(|v| v.as_array()).unwrap();
    assert_eq!(leaves.len(), 2);
    for leaf in leaves {
        assert!(leaf.get("statement").and_then(|v| v.as_str()).is_some());
        assert!(leaf.get("digest").and_then(|v| v.as_str()).is_some());
    }
    let proof = parsed.get("proof").unwrap();
    assert_eq!(proof.get("total").and_then(|v| v.as_u64()), Some(2));
    assert!(proof.get("hashes").and_then(|v| v.as_array()).is_some());
}

#[test]
fn nquads_text_shows_root() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);
    let cli = CliContext::with_config(TermHashConfig::default());

    let output = cli
        .execute(&Commands::Nquads {
            path,
            prove: None,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("Quads: 2"));
    assert!(output.contains("Root: "));
}

#[test]
fn nquads_unknown_proof_statement_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);
    let cli = CliContext::with_config(TermHashConfig::default());

    let result = cli.execute(&Commands::Nquads {
        path,
        prove: Some("<urn:a> <urn:b> <urn:c> .".to_string()),
        format: "text".to_string(),
    });
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[test]
fn unknown_output_format_is_invalid_argument() {
    let cli = CliContext::with_config(TermHashConfig::default());
    let result = cli.execute(&Commands::Config {
        format: "yaml".to_string(),
    });
    assert!(matches!(result, Err(ApiError::InvalidArgument(_))));
}

fn term_command(algorithm: HashAlgorithm, key: Option<&str>) -> Commands {
    Commands::Term {
        term: "<http://ex.org/a>".to_string(),
        algorithm: Some(algorithm),
        input: None,
        key: key.map(str::to_string),
        format: "text".to_string(),
    }
}

#[test]
fn term_hashes_do_not_leak_across_algorithms_in_one_context() {
    let cli = CliContext::with_config(TermHashConfig::default());
    let key = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    let identity = cli.execute(&term_command(HashAlgorithm::Identity, None)).unwrap();
    assert!(identity.ends_with("Hash: http://ex.org/a"));

    let plain = cli.execute(&term_command(HashAlgorithm::Blake3, None)).unwrap();
    let expected = blake3::hash(b"http://ex.org/a").to_hex().to_string();
    assert!(plain.ends_with(&format!("Hash: {}", expected)));

    let keyed = cli.execute(&term_command(HashAlgorithm::Blake3, Some(key))).unwrap();
    assert!(!keyed.ends_with(&expected));
    assert!(!keyed.ends_with("http://ex.org/a"));

    let again = cli.execute(&term_command(HashAlgorithm::Identity, None)).unwrap();
    assert_eq!(again, identity);
}

#[test]
fn messages_text_is_one_statement_per_line() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);
    let cli = CliContext::with_config(TermHashConfig::default());

    let output = cli
        .execute(&Commands::Messages {
            path,
            format: "text".to_string(),
        })
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.ends_with(" .")));
}

#[test]
fn context_loads_directory_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("termhash.toml"),
        "[hash]\nalgorithm = \"blake3\"\n",
    )
    .unwrap();
    let cli = CliContext::new(temp.path().to_path_buf(), None).unwrap();

    let output = cli
        .execute(&Commands::Term {
            term: "<http://ex.org/a>".to_string(),
            algorithm: None,
            input: None,
            key: None,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.ends_with(&blake3::hash(b"http://ex.org/a").to_hex().to_string()));
}

#[test]
fn missing_input_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let cli = CliContext::with_config(TermHashConfig::default());
    let result = cli.execute(&Commands::Messages {
        path: temp.path().join("missing.nq"),
        format: "text".to_string(),
    });
    assert!(matches!(result, Err(ApiError::Io(_))));
}
