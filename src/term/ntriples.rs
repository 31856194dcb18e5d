//! Canonical N-Triples / N-Quads serialization
//!
//! The canonical form is the input to every non-identity hash and the key of
//! a dataset, so it must be injective over the terms a quad can hold: two
//! terms serialize identically only if they are equal. IRIs and literals are
//! escaped; blank node labels are restricted to `BLANK_NODE_LABEL` when the
//! term is built.

use super::{vocab, Literal, Term};
use crate::dataset::Quad;
use std::fmt::Write;

/// Serialize a term in canonical N-Triples syntax
///
/// The default graph serializes to the empty string.
pub fn to_canonical(term: &Term) -> String {
    let mut out = String::new();
    write_term(&mut out, term);
    out
}

/// Serialize a quad as a single canonical N-Quads statement
///
/// The graph is omitted for the default graph. No trailing newline.
pub fn quad_to_canonical(quad: &Quad) -> String {
    let mut out = String::new();
    write_term(&mut out, quad.subject());
    out.push(' ');
    write_term(&mut out, quad.predicate());
    out.push(' ');
    write_term(&mut out, quad.object());
    if !matches!(quad.graph(), Term::DefaultGraph) {
        out.push(' ');
        write_term(&mut out, quad.graph());
    }
    out.push_str(" .");
    out
}

fn write_term(out: &mut String, term: &Term) {
    match term {
        Term::NamedNode(iri) => write_iri(out, iri),
        Term::BlankNode(id) => {
            out.push_str("_:");
            out.push_str(id.as_str());
        }
        Term::Literal(lit) => write_literal(out, lit),
        Term::Variable(name) => {
            out.push('?');
            out.push_str(name);
        }
        Term::DefaultGraph => {}
    }
}

fn write_iri(out: &mut String, iri: &str) {
    out.push('<');
    for c in iri.chars() {
        match c {
            '\u{0}'..='\u{20}' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                write_uchar(out, c)
            }
            _ => out.push(c),
        }
    }
    out.push('>');
}

fn write_literal(out: &mut String, lit: &Literal) {
    out.push('"');
    for c in lit.value().chars() {
        match c {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0}'..='\u{7}' | '\u{b}' | '\u{e}'..='\u{1f}' | '\u{7f}' => write_uchar(out, c),
            _ => out.push(c),
        }
    }
    out.push('"');

    if let Some(lang) = lit.language() {
        out.push('@');
        out.push_str(lang);
    } else if lit.datatype() != vocab::XSD_STRING {
        out.push_str("^^");
        write_iri(out, lit.datatype());
    }
}

fn write_uchar(out: &mut String, c: char) {
    // Writing to a String cannot fail
    let _ = write!(out, "\\u{:04X}", c as u32);
}
