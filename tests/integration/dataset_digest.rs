use termhash::cache::DigestCache;
use termhash::dataset::{digest_dataset, signing_messages};
use termhash::term::parse_nquads;

const DOC: &str = r#"
<http://ex.org/alice> <http://ex.org/name> "Alice" .
<http://ex.org/alice> <http://ex.org/knows> <http://ex.org/bob> .
<http://ex.org/bob> <http://ex.org/name> "Bob"@en <http://ex.org/people> .
"#;

#[test]
fn root_is_independent_of_statement_order() {
    let reversed: String = DOC.lines().rev().collect::<Vec<_>>().join("\n");
    let a = digest_dataset(&parse_nquads(DOC).unwrap(), None);
    let b = digest_dataset(&parse_nquads(&reversed).unwrap(), None);
    assert_eq!(a.root, b.root);
    assert_eq!(a.leaves, b.leaves);
}

#[test]
fn duplicate_statements_do_not_change_root() {
    let doubled = format!("{DOC}\n{DOC}");
    let a = digest_dataset(&parse_nquads(DOC).unwrap(), None);
    let b = digest_dataset(&parse_nquads(&doubled).unwrap(), None);
    assert_eq!(a.root, b.root);
    assert_eq!(b.leaves.len(), 3);
}

#[test]
fn non_canonical_spelling_digests_like_canonical() {
    let loose = "<http://ex.org/s>   <http://ex.org/p>\t\"caf\\u00E9\"^^<http://www.w3.org/2001/XMLSchema#string> .";
    let canonical = "<http://ex.org/s> <http://ex.org/p> \"café\" .";
    let a = digest_dataset(&parse_nquads(loose).unwrap(), None);
    let b = digest_dataset(&parse_nquads(canonical).unwrap(), None);
    assert_eq!(a.root, b.root);
    assert_eq!(a.leaves[0].statement, canonical);
}

#[test]
fn blank_node_labels_are_hashed_as_given() {
    let a = digest_dataset(
        &parse_nquads("_:a <http://ex.org/p> \"x\" .").unwrap(),
        None,
    );
    let b = digest_dataset(
        &parse_nquads("_:b <http://ex.org/p> \"x\" .").unwrap(),
        None,
    );
    assert_ne!(a.root, b.root);
}

#[test]
fn every_leaf_has_a_verifying_proof() {
    let digest = digest_dataset(&parse_nquads(DOC).unwrap(), Some(&DigestCache::new(8)));
    for leaf in &digest.leaves {
        let proof = digest.inclusion_proof(&leaf.statement).unwrap();
        assert!(proof.verify(&digest.root, &leaf.statement));
    }
}

#[test]
fn messages_are_canonical_statements() {
    let dataset = parse_nquads(DOC).unwrap();
    let messages = signing_messages(&dataset);
    assert_eq!(messages.len(), 3);
    let digest = digest_dataset(&dataset, None);
    for (message, leaf) in messages.iter().zip(&digest.leaves) {
        assert_eq!(message.as_slice(), leaf.statement.as_bytes());
    }
}
