use clap::{CommandFactory, Parser};
use termhash::tooling::cli::{Cli, Commands};
use termhash::HashAlgorithm;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["termhash", "term", "<http://ex.org/a>"],
        vec!["termhash", "term", "\"x\"@en", "--algorithm", "blake3"],
        vec![
            "termhash",
            "term",
            "_:b0",
            "--algorithm",
            "blake3",
            "--input",
            "canonical",
            "--format",
            "json",
        ],
        vec!["termhash", "nquads", "data.nq"],
        vec!["termhash", "nquads", "-", "--format", "json"],
        vec!["termhash", "messages", "data.nq"],
        vec!["termhash", "config", "--format", "json"],
        vec!["termhash", "--dir", "/tmp", "--log-level", "debug", "config"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_algorithm_and_input() {
    assert!(Cli::try_parse_from(["termhash", "term", "?x", "--algorithm", "sha1"]).is_err());
    assert!(Cli::try_parse_from(["termhash", "term", "?x", "--input", "graph"]).is_err());
    assert!(Cli::try_parse_from(["termhash", "nquads"]).is_err());
}

#[test]
fn parse_typed_algorithm() {
    let cli = Cli::try_parse_from(["termhash", "term", "?x", "--algorithm", "blake3"]).unwrap();
    match cli.command {
        Commands::Term { algorithm, .. } => assert_eq!(algorithm, Some(HashAlgorithm::Blake3)),
        _ => panic!("expected term command"),
    }
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
