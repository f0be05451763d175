//! # fixtures-rs
//!
//! Analytical queries over a set of football match results.
//!
//! A delimited source file is loaded once into an immutable collection of
//! [`MatchRecord`]s. Each query then borrows that collection and derives a
//! single value from it: a count, a home/away partition, an outcome
//! grouping, an average, an extremal game, a list of distinct kickoff
//! times, an existence check, or a group-then-flatten round trip.
//!
//! ## Example
//!
//! ```
//! use fixtures_rs::{MatchRecord, Outcome, query};
//!
//! let games = vec![
//!     MatchRecord::parse_line(2, "16.08.2019,20:30,FC Bayern Muenchen,Hertha BSC,2,2,BUNDESLIGA", ',').unwrap(),
//!     MatchRecord::parse_line(3, "24.08.2019,18:30,FC Schalke 04,FC Bayern Muenchen,0,3,BUNDESLIGA", ',').unwrap(),
//!     MatchRecord::parse_line(4, "12.08.2019,20:45,Energie Cottbus,FC Bayern Muenchen,1,3,DFB_POKAL", ',').unwrap(),
//! ];
//!
//! assert_eq!(query::count_by_tag(&games, "BUNDESLIGA"), 2);
//!
//! let outcomes = query::classify_outcome(&games, "FC Bayern Muenchen");
//! assert_eq!(outcomes.get(&Outcome::Won).len(), 2);
//! assert!(outcomes.get(&Outcome::Lost).is_empty());
//!
//! let times = query::distinct_start_times(&games);
//! assert_eq!(query::join_times(&times), "20:30, 18:30, 20:45");
//! ```

pub mod config;
pub mod error;
pub mod grouping;
pub mod outcome;
pub mod query;
pub mod record;
pub mod report;
pub mod source;

pub use config::ReportConfig;
pub use error::{ConfigError, LoadError, QueryError, RecordError};
pub use grouping::{Grouping, group_by};
pub use outcome::Outcome;
pub use query::{GroupedFlatten, Partition};
pub use record::{FIELD_COUNT, MatchRecord};
pub use report::{Section, build_sections, render, run_report};
pub use source::{CsvSource, LoadStats, MalformedPolicy, RawRow, load_path, load_records};
