//! Territory Registry - Policy storage and inheritance
//!
//! This crate owns the mapping from distributor name to policy:
//!
//! - **PolicyRegistry**: Injectable store exposing `get` and `create`
//! - **InMemoryPolicyRegistry**: Process-local store behind a reader/writer lock
//! - **Inheritance**: Derives a child policy from a parent at creation time
//!
//! ## Inheritance
//!
//! A derived policy keeps only the requested include patterns the parent
//! already grants, and its exclude list is the parent's exclude list followed
//! by the requested one. The parent is read once, when the child is created;
//! policies are never updated afterwards.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod error;
pub mod inherit;
pub mod memory;
pub mod registry;

// Re-exports
pub use error::{RegistryError, Result};
pub use inherit::{derive_policy, fresh_policy, Creation};
pub use memory::InMemoryPolicyRegistry;
pub use registry::PolicyRegistry;
