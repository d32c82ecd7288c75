//! Column selection by header name or 1-based position.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};

/// How the caller identified the code column.
///
/// A purely numeric argument is taken as a 1-based position; anything else
/// is matched case-insensitively against the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

impl ColumnSelector {
    /// Resolve to a 0-based column index against the actual headers.
    ///
    /// Failure here is fatal to the batch, so the message lists what the
    /// file does contain.
    pub fn resolve(&self, headers: &[String]) -> Result<usize> {
        match self {
            ColumnSelector::Index(position) => {
                if (1..=headers.len()).contains(position) {
                    Ok(position - 1)
                } else {
                    bail!(
                        "column {position} is out of range; the file has {} columns",
                        headers.len()
                    )
                }
            }
            ColumnSelector::Name(name) => headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    anyhow!(
                        "column '{name}' not found; available columns: {}",
                        headers.join(", ")
                    )
                }),
        }
    }
}

impl FromStr for ColumnSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("column selector is empty".to_string());
        }
        if trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            let position: usize = trimmed
                .parse()
                .map_err(|_| format!("column number too large: {trimmed}"))?;
            if position == 0 {
                return Err("column numbers are 1-based".to_string());
            }
            Ok(ColumnSelector::Index(position))
        } else {
            Ok(ColumnSelector::Name(trimmed.to_string()))
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Index(position) => write!(f, "#{position}"),
            ColumnSelector::Name(name) => f.write_str(name),
        }
    }
}
