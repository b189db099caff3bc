//! Core types for the route graph.
//!
//! Defines the travel-time record loaded from text, the weighted arc stored
//! in the graph, and the path result handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RouteError};

/// A directed travel time between two locations, as loaded from the data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TravelTime {
    from: String,
    to: String,
    time: u32,
}

impl TravelTime {
    /// Validate and build a record. `time` must be strictly positive.
    pub fn new(from: impl Into<String>, to: impl Into<String>, time: i64) -> Result<Self> {
        let from = from.into();
        let to = to.into();
        if from.is_empty() {
            return Err(RouteError::InvalidRecord(
                "From location cannot be null or empty".to_string(),
            ));
        }
        if to.is_empty() {
            return Err(RouteError::InvalidRecord(
                "To location cannot be null or empty".to_string(),
            ));
        }
        let time = positive_weight(time, "Time")?;
        Ok(Self { from, to, time })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    /// Render the record back into its delimited line form.
    pub fn to_line(&self, delimiter: char) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.from,
            self.to,
            self.time,
            d = delimiter
        )
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.time)
    }
}

/// An outgoing arc of a location: where it goes and what it costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    destination: String,
    weight: u32,
}

impl Edge {
    pub fn new(destination: impl Into<String>, weight: i64) -> Result<Self> {
        let destination = destination.into();
        if destination.is_empty() {
            return Err(RouteError::InvalidRecord(
                "Destination cannot be null or empty".to_string(),
            ));
        }
        let weight = positive_weight(weight, "Weight")?;
        Ok(Self {
            destination,
            weight,
        })
    }

    /// Arc from an already validated record.
    pub(crate) fn arc(destination: String, weight: u32) -> Self {
        Self {
            destination,
            weight,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

fn positive_weight(value: i64, field: &str) -> Result<u32> {
    if value <= 0 {
        return Err(RouteError::InvalidRecord(format!(
            "{} must be positive",
            field
        )));
    }
    u32::try_from(value)
        .map_err(|_| RouteError::InvalidRecord(format!("{} is too large: {}", field, value)))
}

/// Outcome of a shortest-path query.
///
/// `path_found` is derived from the path, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathResult {
    path: Vec<String>,
    total_time: u64,
    path_found: bool,
}

impl PathResult {
    /// No route between the requested locations.
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn found(path: Vec<String>, total_time: u64) -> Self {
        let path_found = !path.is_empty();
        Self {
            path,
            total_time,
            path_found,
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    pub fn is_path_found(&self) -> bool {
        self.path_found
    }

    pub fn is_empty(&self) -> bool {
        !self.path_found
    }

    pub fn into_path(self) -> Vec<String> {
        self.path
    }
}

/// Wire form of a found route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(rename = "ruta")]
    pub path: Vec<String>,
    #[serde(rename = "tiempoTotal")]
    pub total_time: u64,
}

impl RouteResponse {
    /// `None` when the result carries no route.
    pub fn from_path(result: &PathResult) -> Option<Self> {
        if !result.is_path_found() {
            return None;
        }
        Some(Self {
            path: result.path().to_vec(),
            total_time: result.total_time(),
        })
    }
}

impl fmt::Display for RouteResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (total: {})", self.path.join(" -> "), self.total_time)
    }
}

/// Message reported when no route connects two locations.
pub fn no_route_message(from: &str, to: &str) -> String {
    format!("No route found between {} and {}", from, to)
}
