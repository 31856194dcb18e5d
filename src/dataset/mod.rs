//! Quads and Datasets
//!
//! An in-memory RDF dataset with the `DatasetCore` surface: add, delete,
//! membership, and pattern matching. Quads are kept ordered by their
//! canonical N-Quads form so iteration order is deterministic.

pub mod digest;

use crate::error::TermError;
use crate::term::{quad_to_canonical, Term, TermKind};
use std::collections::BTreeMap;

pub use digest::{digest_dataset, signing_messages, DatasetDigest, DigestLeaf, InclusionProof};

/// A statement: subject, predicate, object, and graph name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Quad {
    /// Build a quad, checking that each term kind is allowed in its position
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Term) -> Result<Self, TermError> {
        check_position("subject", &subject, &[TermKind::NamedNode, TermKind::BlankNode])?;
        check_position("predicate", &predicate, &[TermKind::NamedNode])?;
        check_position(
            "object",
            &object,
            &[TermKind::NamedNode, TermKind::BlankNode, TermKind::Literal],
        )?;
        check_position(
            "graph",
            &graph,
            &[TermKind::NamedNode, TermKind::BlankNode, TermKind::DefaultGraph],
        )?;
        Ok(Self {
            subject,
            predicate,
            object,
            graph,
        })
    }

    /// Build a quad in the default graph
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Result<Self, TermError> {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    pub fn graph(&self) -> &Term {
        &self.graph
    }

    pub fn to_canonical(&self) -> String {
        quad_to_canonical(self)
    }

    fn matches(&self, s: Option<&Term>, p: Option<&Term>, o: Option<&Term>, g: Option<&Term>) -> bool {
        s.map_or(true, |t| t == &self.subject)
            && p.map_or(true, |t| t == &self.predicate)
            && o.map_or(true, |t| t == &self.object)
            && g.map_or(true, |t| t == &self.graph)
    }
}

fn check_position(position: &'static str, term: &Term, allowed: &[TermKind]) -> Result<(), TermError> {
    let kind = term.kind();
    if allowed.contains(&kind) {
        Ok(())
    } else {
        Err(TermError::InvalidPosition {
            position,
            kind: kind.as_str(),
        })
    }
}

/// Set of quads keyed by canonical statement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    quads: BTreeMap<String, Quad>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Insert a quad; returns false if it was already present
    pub fn add(&mut self, quad: Quad) -> bool {
        let key = quad.to_canonical();
        if self.quads.contains_key(&key) {
            return false;
        }
        self.quads.insert(key, quad);
        true
    }

    /// Remove a quad; returns false if it was not present
    pub fn delete(&mut self, quad: &Quad) -> bool {
        self.quads.remove(&quad.to_canonical()).is_some()
    }

    pub fn has(&self, quad: &Quad) -> bool {
        self.quads.contains_key(&quad.to_canonical())
    }

    /// Quads matching the pattern; `None` matches any term
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> Dataset {
        self.quads
            .iter()
            .filter(|(_, q)| q.matches(subject, predicate, object, graph))
            .map(|(k, q)| (k.clone(), q.clone()))
            .collect::<BTreeMap<_, _>>()
            .into()
    }

    /// Quads in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.values()
    }

    /// Canonical statements in order
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.quads.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, Quad>> for Dataset {
    fn from(quads: BTreeMap<String, Quad>) -> Self {
        Self { quads }
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<I: IntoIterator<Item = Quad>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        dataset.extend(iter);
        dataset
    }
}

impl Extend<Quad> for Dataset {
    fn extend<I: IntoIterator<Item = Quad>>(&mut self, iter: I) {
        for quad in iter {
            self.add(quad);
        }
    }
}
