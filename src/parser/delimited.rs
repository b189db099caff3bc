//! Delimited text parser for travel-time records.
//!
//! One record per line, three fields: `<from><d><to><d><time>`. Blank lines
//! are skipped, and so is any line starting with the header token.

use tracing::debug;

use crate::error::{Result, RouteError};
use crate::graph::TravelTime;

pub const DEFAULT_DELIMITER: char = ';';
pub const DEFAULT_HEADER_PREFIX: &str = "loc_start";

const EXPECTED_FIELD_COUNT: usize = 3;

/// Parse `content` with the default `;` delimiter and `loc_start` header.
pub fn parse_travel_times(content: &str) -> Result<Vec<TravelTime>> {
    EdgeParser::default().parse(content)
}

/// Line format of a travel-time file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeParser {
    delimiter: char,
    /// Lines starting with this token are headers. Empty disables detection.
    header_prefix: String,
}

impl EdgeParser {
    pub fn new(delimiter: char, header_prefix: impl Into<String>) -> Self {
        Self {
            delimiter,
            header_prefix: header_prefix.into(),
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn header_prefix(&self) -> &str {
        &self.header_prefix
    }

    /// Parse every data line. Stops at the first invalid line.
    pub fn parse(&self, content: &str) -> Result<Vec<TravelTime>> {
        let mut travel_times = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || self.is_header(line) {
                continue;
            }
            travel_times.push(self.parse_line(line)?);
        }

        debug!(records = travel_times.len(), "parsed travel times");
        Ok(travel_times)
    }

    fn is_header(&self, line: &str) -> bool {
        !self.header_prefix.is_empty() && line.starts_with(&self.header_prefix)
    }

    fn parse_line(&self, line: &str) -> Result<TravelTime> {
        let fields: Vec<&str> = line.split(self.delimiter).map(str::trim).collect();
        if fields.len() != EXPECTED_FIELD_COUNT {
            return Err(RouteError::InvalidFormat {
                line: line.to_string(),
                fields: fields.len(),
                delimiter: self.delimiter,
            });
        }

        let (from, to, time) = (fields[0], fields[1], fields[2]);
        if from.is_empty() || to.is_empty() || time.is_empty() {
            return Err(RouteError::EmptyField {
                line: line.to_string(),
            });
        }

        let time: i64 = time.parse().map_err(|_| RouteError::InvalidTime {
            value: time.to_string(),
        })?;

        TravelTime::new(from, to, time)
    }
}

impl Default for EdgeParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, DEFAULT_HEADER_PREFIX)
    }
}
