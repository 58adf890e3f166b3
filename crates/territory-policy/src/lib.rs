//! # Territory Policy Evaluation
//!
//! Decides whether a distributor policy grants access to a location.
//!
//! ## Algorithm
//!
//! Evaluation is exclude-first and first-match-wins:
//!
//! 1. The first `exclude` pattern matching the query denies access.
//! 2. Otherwise the first `include` pattern matching the query grants access.
//! 3. Otherwise access is denied.
//!
//! A pattern matches when its country equals the query's country and, only
//! where the pattern specifies them, its province and then its city match
//! too. Empty pattern fields are wildcards.
//!
//! ## Example
//!
//! ```rust
//! use territory_policy::{evaluate, Decision};
//! use territory_types::{DistributorName, LocationCode, Policy};
//!
//! let policy = Policy {
//!     name: DistributorName::new("acme"),
//!     include: vec![LocationCode::country("IN")],
//!     exclude: vec![LocationCode::province("KA", "IN")],
//!     parent_name: None,
//! };
//!
//! let chennai = LocationCode::parse("CENAI:TN:IN");
//! let bengaluru = LocationCode::parse("BLR:KA:IN");
//!
//! assert_eq!(evaluate(&policy, &chennai), Decision::Granted);
//! assert_eq!(evaluate(&policy, &bengaluru), Decision::Denied);
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod decision;
pub mod evaluator;
pub mod matcher;

// Re-exports
pub use decision::{Decision, Evaluation, MatchSource};
pub use evaluator::{evaluate, explain};
pub use matcher::matches;
