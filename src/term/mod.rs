//! RDF Terms
//!
//! The term model mirrors the RDF/JS term kinds: named nodes, blank nodes,
//! literals, variables, and the default graph. Every term exposes a lexical
//! `value`; literals additionally carry an explicit datatype and an optional
//! language tag.

pub mod ntriples;
pub mod parse;
pub mod vocab;

use crate::error::TermError;
use std::fmt;
use std::sync::Arc;

pub use ntriples::{quad_to_canonical, to_canonical};
pub use parse::{parse_nquads, parse_term};

/// Term kind, displayed as the RDF/JS `termType` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    NamedNode,
    BlankNode,
    Literal,
    Variable,
    DefaultGraph,
}

impl TermKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermKind::NamedNode => "NamedNode",
            TermKind::BlankNode => "BlankNode",
            TermKind::Literal => "Literal",
            TermKind::Variable => "Variable",
            TermKind::DefaultGraph => "DefaultGraph",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blank node label, stored without the `_:` prefix
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlankId(Arc<str>);

impl BlankId {
    pub fn new(label: impl AsRef<str>) -> Result<Self, TermError> {
        let label = label.as_ref();
        if label.is_empty() {
            return Err(TermError::EmptyBlankLabel);
        }
        if !is_valid_blank_label(label) {
            return Err(TermError::InvalidBlankLabel(label.to_string()));
        }
        Ok(Self(Arc::from(label)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Literal with explicit datatype
///
/// A literal carrying a language tag always has datatype `rdf:langString`,
/// and an `rdf:langString` literal always carries a tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    value: Arc<str>,
    datatype: Arc<str>,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Plain string literal (`xsd:string`)
    pub fn string(value: impl AsRef<str>) -> Self {
        Self {
            value: Arc::from(value.as_ref()),
            datatype: Arc::from(vocab::XSD_STRING),
            language: None,
        }
    }

    /// Language-tagged string literal (`rdf:langString`)
    pub fn lang_string(value: impl AsRef<str>, language: impl AsRef<str>) -> Result<Self, TermError> {
        let language = language.as_ref();
        if !is_valid_language_tag(language) {
            return Err(TermError::InvalidLanguage(language.to_string()));
        }
        Ok(Self {
            value: Arc::from(value.as_ref()),
            datatype: Arc::from(vocab::RDF_LANG_STRING),
            language: Some(Arc::from(language)),
        })
    }

    /// Literal with an explicit datatype IRI
    ///
    /// `rdf:langString` is rejected here; use [`Literal::lang_string`].
    pub fn typed(value: impl AsRef<str>, datatype: impl AsRef<str>) -> Result<Self, TermError> {
        let datatype = datatype.as_ref();
        if datatype == vocab::RDF_LANG_STRING {
            return Err(TermError::MissingLanguage);
        }
        Ok(Self {
            value: Arc::from(value.as_ref()),
            datatype: Arc::from(datatype),
            language: None,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// An RDF term
///
/// Equality follows RDF/JS `Term.equals`: same kind and value, and for
/// literals the same datatype and language tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// Absolute IRI
    NamedNode(Arc<str>),
    BlankNode(BlankId),
    Literal(Literal),
    /// Query variable, stored without the `?` prefix
    Variable(Arc<str>),
    DefaultGraph,
}

impl Term {
    pub fn named_node(iri: impl AsRef<str>) -> Self {
        Term::NamedNode(Arc::from(iri.as_ref()))
    }

    pub fn blank_node(label: impl AsRef<str>) -> Result<Self, TermError> {
        Ok(Term::BlankNode(BlankId::new(label)?))
    }

    pub fn literal(value: impl AsRef<str>) -> Self {
        Term::Literal(Literal::string(value))
    }

    pub fn lang_literal(value: impl AsRef<str>, language: impl AsRef<str>) -> Result<Self, TermError> {
        Ok(Term::Literal(Literal::lang_string(value, language)?))
    }

    pub fn typed_literal(value: impl AsRef<str>, datatype: impl AsRef<str>) -> Result<Self, TermError> {
        Ok(Term::Literal(Literal::typed(value, datatype)?))
    }

    /// `xsd:integer` literal
    pub fn integer(value: i64) -> Self {
        Term::Literal(Literal {
            value: Arc::from(value.to_string()),
            datatype: Arc::from(vocab::XSD_INTEGER),
            language: None,
        })
    }

    /// `xsd:boolean` literal
    pub fn boolean(value: bool) -> Self {
        Term::Literal(Literal {
            value: Arc::from(if value { "true" } else { "false" }),
            datatype: Arc::from(vocab::XSD_BOOLEAN),
            language: None,
        })
    }

    pub fn variable(name: impl AsRef<str>) -> Self {
        Term::Variable(Arc::from(name.as_ref()))
    }

    pub fn default_graph() -> Self {
        Term::DefaultGraph
    }

    pub fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
            Term::DefaultGraph => TermKind::DefaultGraph,
        }
    }

    /// Lexical value: IRI, blank label, literal lexical form, variable name,
    /// or the empty string for the default graph
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(iri) => iri,
            Term::BlankNode(id) => id.as_str(),
            Term::Literal(lit) => lit.value(),
            Term::Variable(name) => name,
            Term::DefaultGraph => "",
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// RDF/JS-style equality check
    pub fn equals(&self, other: &Term) -> bool {
        self == other
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_canonical(self))
    }
}

/// Hash-like identifier of a term: its lexical value, unchanged
///
/// Datatype, language tag, and kind are not part of the result. Use
/// [`crate::hasher::hash_term`] for a digest that includes them.
pub fn term_hash(term: &Term) -> String {
    term.value().to_string()
}

/// `[a-zA-Z]+(-[a-zA-Z0-9]+)*`
/// Characters allowed inside blank node labels and variable names
pub(crate) fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '\u{b7}')
}

/// N-Triples `BLANK_NODE_LABEL`: starts with a letter, `_` or digit; `.`
/// may appear only between label characters.
pub(crate) fn is_valid_blank_label(label: &str) -> bool {
    let mut chars = label.chars();
    let first_ok = chars
        .next()
        .map(|c| c.is_alphabetic() || c == '_' || c.is_ascii_digit())
        .unwrap_or(false);
    first_ok
        && label.chars().all(|c| is_label_char(c) || c == '.')
        && !label.ends_with('.')
}

pub(crate) fn is_valid_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .map(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false);
    primary_ok && subtags.all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
}
