// src/input.rs
//! Edge records and the two input shapes: the built-in table and query streams.

use crate::error::{Result, ShortpathError};
use crate::tokenize::{tokenize, DelimiterSet};

/// The demo graph, one `source:weight:destination` triple per entry.
pub const BUILTIN_EDGES: [&str; 9] = [
    "node0:10:node1",
    "node0:5:node2",
    "node1:1:node3",
    "node2:3:node1",
    "node2:8:node3",
    "node2:2:node4",
    "node3:4:node5",
    "node3:4:node4",
    "node4:6:node5",
];

pub const BUILTIN_DELIMITERS: &str = ":";
pub const BUILTIN_SOURCE: &str = "node0";
pub const BUILTIN_DESTINATION: &str = "node5";

/// One directed, weighted edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub weight: u64,
    pub destination: String,
}

impl EdgeRecord {
    /// Builds a record from exactly three fields.
    ///
    /// # Errors
    /// Returns `MalformedInput` on a wrong field count, an empty label, or a
    /// weight that is not a non-negative integer.
    pub fn from_fields(record: usize, fields: &[&str]) -> Result<Self> {
        let [source, weight, destination] = fields else {
            return Err(ShortpathError::malformed(
                record,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        };

        if source.is_empty() || destination.is_empty() {
            return Err(ShortpathError::malformed(record, "empty node label"));
        }

        let weight = weight.parse::<u64>().map_err(|_| {
            ShortpathError::malformed(
                record,
                format!("weight `{weight}` is not a non-negative integer"),
            )
        })?;

        Ok(Self {
            source: (*source).to_string(),
            weight,
            destination: (*destination).to_string(),
        })
    }

    /// Tokenizes a single line and parses it as one record.
    ///
    /// # Errors
    /// Returns `MalformedInput` if the line is not a valid record.
    pub fn parse_line(record: usize, line: &str, delimiters: &DelimiterSet) -> Result<Self> {
        Self::from_fields(record, &tokenize(line, delimiters))
    }
}

/// Parses every line of an edge table.
///
/// # Errors
/// Fails on the first malformed record.
pub fn parse_lines<'a, I>(lines: I, delimiters: &DelimiterSet) -> Result<Vec<EdgeRecord>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| EdgeRecord::parse_line(i, line, delimiters))
        .collect()
}

/// The built-in demo edges, parsed.
///
/// # Errors
/// Only fails if the table itself is malformed.
pub fn builtin_records() -> Result<Vec<EdgeRecord>> {
    parse_lines(BUILTIN_EDGES, &DelimiterSet::with_chars(BUILTIN_DELIMITERS))
}

/// A source/destination query followed by the edges to search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub source: String,
    pub destination: String,
    pub edges: Vec<EdgeRecord>,
}

impl Query {
    /// Parses `source destination (src weight dst)*` from a token stream.
    ///
    /// Errors number the header as record 0 and the edge triples from 1.
    ///
    /// # Errors
    /// Returns `MalformedInput` when the header is missing, the trailing
    /// tokens do not form whole triples, or any triple is malformed.
    pub fn parse(text: &str, delimiters: &DelimiterSet) -> Result<Self> {
        let tokens = tokenize(text, delimiters);
        let [source, destination, rest @ ..] = tokens.as_slice() else {
            return Err(ShortpathError::malformed(
                0,
                "missing source and destination query labels",
            ));
        };

        if rest.len() % 3 != 0 {
            return Err(ShortpathError::malformed(
                rest.len() / 3 + 1,
                format!("{} trailing field(s) after the last edge", rest.len() % 3),
            ));
        }

        let edges = rest
            .chunks(3)
            .enumerate()
            .map(|(i, fields)| EdgeRecord::from_fields(i + 1, fields))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            source = *source,
            destination = *destination,
            edges = edges.len(),
            "parsed query stream"
        );

        Ok(Self {
            source: (*source).to_string(),
            destination: (*destination).to_string(),
            edges,
        })
    }
}
