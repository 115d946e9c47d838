//! `<prefix>-NNNNNN` index identifiers

use crate::utils::error::{MaintenanceError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in the numeric part
pub const SEQUENCE_WIDTH: usize = 6;

/// Largest sequence number that fits the fixed width
pub const MAX_SEQUENCE: u32 = 999_999;

// ASCII classes only: `\d` would also accept non-ASCII digits.
static IDENTIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+)-([0-9]{6})$").unwrap_or_else(|e| {
        tracing::error!("Failed to compile index identifier regex: {}", e);
        Regex::new(r"[^\s\S]").unwrap()
    })
});

/// A validated index name such as `fg-009783`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexIdentifier {
    prefix: String,
    sequence: u32,
}

impl IndexIdentifier {
    /// Parse a raw string, rejecting anything outside `^[A-Za-z]+-[0-9]{6}$`
    pub fn parse(raw: &str) -> Result<Self> {
        let captures = IDENTIFIER_PATTERN.captures(raw).ok_or_else(|| {
            MaintenanceError::invalid_format(format!(
                "'{}' must look like 'prefix-NNNNNN' (letters, a hyphen, six digits)",
                raw
            ))
        })?;

        let sequence = captures[2].parse::<u32>().map_err(|e| {
            MaintenanceError::invalid_format(format!("'{}' has a bad sequence: {}", raw, e))
        })?;

        Ok(Self {
            prefix: captures[1].to_string(),
            sequence,
        })
    }

    /// Build from parts; the prefix must be letters and the sequence must fit six digits
    pub fn new(prefix: impl Into<String>, sequence: u32) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MaintenanceError::invalid_format(format!(
                "prefix '{}' must be one or more ASCII letters",
                prefix
            )));
        }
        if sequence > MAX_SEQUENCE {
            return Err(MaintenanceError::invalid_format(format!(
                "sequence {} does not fit in {} digits",
                sequence, SEQUENCE_WIDTH
            )));
        }
        Ok(Self { prefix, sequence })
    }

    /// Whether `raw` is a well-formed identifier
    pub fn is_valid(raw: &str) -> bool {
        IDENTIFIER_PATTERN.is_match(raw)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Same prefix, different sequence
    pub(crate) fn with_sequence(&self, sequence: u32) -> Self {
        Self {
            prefix: self.prefix.clone(),
            sequence,
        }
    }
}

impl fmt::Display for IndexIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:0width$}",
            self.prefix,
            self.sequence,
            width = SEQUENCE_WIDTH
        )
    }
}

impl FromStr for IndexIdentifier {
    type Err = MaintenanceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for IndexIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
