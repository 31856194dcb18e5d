//! N-Triples / N-Quads parsing
//!
//! A small hand-written scanner over the line-based syntax. It accepts the
//! canonical form produced by [`super::ntriples`] and the common
//! non-canonical spellings (any ECHAR/UCHAR escape, extra whitespace,
//! comments).

use super::{is_label_char, vocab, Term};
use crate::dataset::{Dataset, Quad};
use crate::error::ParseError;
use std::iter::Peekable;
use std::str::Chars;

/// Parse a single term
pub fn parse_term(input: &str) -> Result<Term, ParseError> {
    let mut scanner = Scanner::new(input, 1);
    scanner.skip_ws();
    let term = scanner.term()?;
    scanner.skip_ws();
    if scanner.peek().is_some() {
        return Err(scanner.error("unexpected trailing input after term"));
    }
    Ok(term)
}

/// Parse an N-Quads document into a dataset
///
/// Blank lines and `#` comment lines are skipped. Duplicate statements
/// collapse into one quad.
pub fn parse_nquads(input: &str) -> Result<Dataset, ParseError> {
    let mut dataset = Dataset::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let quad = parse_statement(trimmed, line_no)?;
        dataset.add(quad);
    }
    tracing::debug!(quads = dataset.size(), "Parsed N-Quads document");
    Ok(dataset)
}

fn parse_statement(line: &str, line_no: usize) -> Result<Quad, ParseError> {
    let mut scanner = Scanner::new(line, line_no);
    let mut terms = Vec::with_capacity(4);
    loop {
        scanner.skip_ws();
        match scanner.peek() {
            Some('.') => {
                scanner.next();
                break;
            }
            Some(_) => {
                if terms.len() == 4 {
                    return Err(scanner.error("expected '.' after graph term"));
                }
                terms.push(scanner.term()?);
            }
            None => return Err(scanner.error("statement is missing terminating '.'")),
        }
    }
    scanner.skip_ws();
    match scanner.peek() {
        None | Some('#') => {}
        Some(_) => return Err(scanner.error("unexpected input after '.'")),
    }

    let mut terms = terms.into_iter();
    let (subject, predicate, object) = match (terms.next(), terms.next(), terms.next()) {
        (Some(s), Some(p), Some(o)) => (s, p, o),
        _ => return Err(scanner.error("statement needs subject, predicate and object")),
    };
    let graph = terms.next().unwrap_or(Term::DefaultGraph);
    Quad::new(subject, predicate, object, graph)
        .map_err(|source| ParseError::Term { line: line_no, source })
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, line: usize) -> Self {
        Self {
            chars: input.chars().peekable(),
            line,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::syntax(self.line, message)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.next();
        }
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        match self.peek() {
            Some('<') => Ok(Term::named_node(self.iri()?)),
            Some('_') => self.blank_node(),
            Some('"') => self.literal(),
            Some('?') => {
                self.next();
                let name = self.take_name();
                if name.is_empty() {
                    return Err(self.error("empty variable name"));
                }
                Ok(Term::variable(name))
            }
            Some(c) => Err(self.error(format!("unexpected character {c:?}"))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn iri(&mut self) -> Result<String, ParseError> {
        self.next();
        let mut iri = String::new();
        loop {
            match self.next() {
                Some('>') => return Ok(iri),
                Some('\\') => match self.next() {
                    Some('u') => iri.push(self.uchar(4)?),
                    Some('U') => iri.push(self.uchar(8)?),
                    _ => return Err(self.error("only \\u and \\U escapes are allowed in IRIs")),
                },
                Some(c) if c <= ' ' || matches!(c, '<' | '"' | '{' | '}' | '|' | '^' | '`') => {
                    return Err(self.error(format!("invalid character {c:?} in IRI")));
                }
                Some(c) => iri.push(c),
                None => return Err(self.error("unterminated IRI")),
            }
        }
    }

    fn blank_node(&mut self) -> Result<Term, ParseError> {
        self.next();
        if self.next() != Some(':') {
            return Err(self.error("expected ':' after '_'"));
        }
        let label = self.take_name();
        Term::blank_node(label).map_err(|source| ParseError::Term {
            line: self.line,
            source,
        })
    }

    /// Label characters for blank nodes and variables; a '.' not followed by
    /// another label character is left for the statement terminator.
    fn take_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_label_char(c) {
                name.push(c);
                self.next();
            } else if c == '.' {
                let mut lookahead = self.chars.clone();
                lookahead.next();
                match lookahead.peek() {
                    Some(&n) if is_label_char(n) || n == '.' => {
                        name.push(c);
                        self.next();
                    }
                    _ => break,
                }
            } else {
                break;
            }
        }
        name
    }

    fn literal(&mut self) -> Result<Term, ParseError> {
        self.next();
        let mut value = String::new();
        loop {
            match self.next() {
                Some('"') => break,
                Some('\\') => value.push(self.echar()?),
                Some('\n') | Some('\r') => return Err(self.error("raw line break in literal")),
                Some(c) => value.push(c),
                None => return Err(self.error("unterminated literal")),
            }
        }

        let term = match self.peek() {
            Some('@') => {
                self.next();
                let mut lang = String::new();
                while let Some(c) = self.peek() {
                    if c.is_ascii_alphanumeric() || c == '-' {
                        lang.push(c);
                        self.next();
                    } else {
                        break;
                    }
                }
                Term::lang_literal(value, lang)
            }
            Some('^') => {
                self.next();
                if self.next() != Some('^') {
                    return Err(self.error("expected '^^' before datatype"));
                }
                if self.peek() != Some('<') {
                    return Err(self.error("datatype must be an IRI"));
                }
                let datatype = self.iri()?;
                if datatype == vocab::XSD_STRING {
                    Ok(Term::literal(value))
                } else {
                    Term::typed_literal(value, datatype)
                }
            }
            _ => Ok(Term::literal(value)),
        };
        term.map_err(|source| ParseError::Term {
            line: self.line,
            source,
        })
    }

    fn echar(&mut self) -> Result<char, ParseError> {
        match self.next() {
            Some('t') => Ok('\t'),
            Some('b') => Ok('\u{8}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('f') => Ok('\u{c}'),
            Some('"') => Ok('"'),
            Some('\'') => Ok('\''),
            Some('\\') => Ok('\\'),
            Some('u') => self.uchar(4),
            Some('U') => self.uchar(8),
            Some(c) => Err(self.error(format!("invalid escape '\\{c}'"))),
            None => Err(self.error("unterminated escape")),
        }
    }

    fn uchar(&mut self, digits: usize) -> Result<char, ParseError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let digit = self
                .next()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid hex digit in \\u escape"))?;
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error(format!("invalid code point U+{code:X}")))
    }
}
