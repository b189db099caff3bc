//! Travel-time parsing.
//!
//! Reads the delimited `from;to;time` text format into validated
//! [`TravelTime`](crate::graph::TravelTime) records.

pub mod delimited;

pub use delimited::{parse_travel_times, EdgeParser, DEFAULT_DELIMITER, DEFAULT_HEADER_PREFIX};
