//! Registry error types

use std::sync::Arc;
use territory_types::{DistributorName, Policy};
use thiserror::Error;

/// Registry errors
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("Distributor does not exist: {0}")]
    UnknownActor(DistributorName),

    /// The existing policy is returned untouched
    #[error("Distributor already exists: {}", .existing.name)]
    AlreadyExists { existing: Arc<Policy> },

    #[error("Parent distributor {parent} of {name} does not exist")]
    ParentNotFound {
        name: DistributorName,
        parent: DistributorName,
    },
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
