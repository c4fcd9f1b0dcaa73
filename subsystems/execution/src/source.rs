//! # Process List Source
//!
//! Parser for process lists in their text form:
//!
//! ```text
//! Process Arrival Burst Priority
//! P 1 0 5 2
//! P2 1 3 1
//! ```
//!
//! The first line is a header and is skipped. Every other non-blank line is
//! a marker token followed by `id arrival burst priority`; the marker may be
//! fused with the id. Values are not range-checked here, the registry does
//! that when the specs are registered.

use crate::process::ProcessSpec;
use alloc::vec::Vec;
use core::fmt;
use core::str::SplitWhitespace;

/// Result type for source parsing
pub type SourceResult<T> = Result<T, SourceError>;

/// Process list parse errors
///
/// Line numbers are 1-based and count the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The text has no header line
    MissingHeader,
    /// A record does not start with a marker token
    MissingMarker {
        /// Offending line
        line: usize,
    },
    /// A record ends before all fields were read
    MissingField {
        /// Offending line
        line: usize,
        /// Field that was expected
        field: &'static str,
    },
    /// A field is not an integer
    InvalidNumber {
        /// Offending line
        line: usize,
        /// Field that failed to parse
        field: &'static str,
    },
    /// A record has tokens after the priority
    TrailingData {
        /// Offending line
        line: usize,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "Process list is empty (no header line)"),
            Self::MissingMarker { line } => write!(f, "Line {}: missing process marker", line),
            Self::MissingField { line, field } => write!(f, "Line {}: missing {}", line, field),
            Self::InvalidNumber { line, field } => {
                write!(f, "Line {}: {} is not an integer", line, field)
            }
            Self::TrailingData { line } => write!(f, "Line {}: unexpected trailing data", line),
        }
    }
}

/// Parse a process list
pub fn parse_process_list(text: &str) -> SourceResult<Vec<ProcessSpec>> {
    let mut lines = text.lines().enumerate();
    lines.next().ok_or(SourceError::MissingHeader)?;

    let mut specs = Vec::new();
    for (index, content) in lines {
        if content.trim().is_empty() {
            continue;
        }
        specs.push(parse_record(index + 1, content)?);
    }

    log::debug!("Parsed {} process records", specs.len());
    Ok(specs)
}

/// Parse one `marker id arrival burst priority` record
fn parse_record(line: usize, content: &str) -> SourceResult<ProcessSpec> {
    let mut tokens = content.split_whitespace();

    let marker = tokens.next().ok_or(SourceError::MissingMarker { line })?;
    let mut chars = marker.chars();
    match chars.next() {
        Some(c) if !c.is_ascii_digit() && c != '-' && c != '+' => {}
        _ => return Err(SourceError::MissingMarker { line }),
    }

    // "P1" carries the id inside the marker token
    let fused = chars.as_str();
    let id = if fused.is_empty() {
        next_field(&mut tokens, line, "id")?
    } else {
        parse_field(fused, line, "id")?
    };
    let arrival = next_field(&mut tokens, line, "arrival")?;
    let burst = next_field(&mut tokens, line, "burst")?;
    let priority = next_field(&mut tokens, line, "priority")?;

    if tokens.next().is_some() {
        return Err(SourceError::TrailingData { line });
    }

    Ok(ProcessSpec::new(id, arrival, burst, priority))
}

fn next_field<T: core::str::FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    line: usize,
    field: &'static str,
) -> SourceResult<T> {
    let token = tokens.next().ok_or(SourceError::MissingField { line, field })?;
    parse_field(token, line, field)
}

fn parse_field<T: core::str::FromStr>(
    token: &str,
    line: usize,
    field: &'static str,
) -> SourceResult<T> {
    token.parse().map_err(|_| SourceError::InvalidNumber { line, field })
}
