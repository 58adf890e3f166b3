//! Territory Types - Core types for distributor location access
//!
//! A distributor is granted or denied access to a location based on its
//! policy: an ordered list of location patterns to include, an ordered list
//! to exclude, and an optional parent the policy was derived from.
//!
//! ## Key Concepts
//!
//! - **LocationCode**: `city:province:country`, most specific segment first.
//!   Leading segments may be omitted; empty fields act as wildcards.
//! - **Policy**: Immutable include/exclude lists stored under a distributor name
//! - **CreatePolicyRequest**: Input for creating a policy, optionally inheriting
//!   from a parent distributor

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod ids;
pub mod location;
pub mod policy;

// Re-export main types
pub use ids::{DistributorName, EmptyNameError};
pub use location::{LocationCode, LocationError};
pub use policy::{CreatePolicyRequest, Policy};
