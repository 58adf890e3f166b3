//! Registry trait

use crate::error::Result;
use crate::inherit::Creation;
use std::sync::Arc;
use territory_types::{CreatePolicyRequest, DistributorName, Policy};

/// Store of distributor policies.
///
/// Implementations must make `create` atomic: the existence check, the
/// parent lookup and the insert happen as one transaction, so concurrent
/// creates of the same name yield exactly one success.
pub trait PolicyRegistry: Send + Sync {
    /// Look up a policy by distributor name
    fn get(&self, name: &DistributorName) -> Result<Arc<Policy>>;

    /// Create and store a policy, deriving it from its parent if one is named
    fn create(&self, request: CreatePolicyRequest) -> Result<Creation>;

    /// Number of stored policies
    fn len(&self) -> usize;

    /// Names of all stored policies, sorted
    fn names(&self) -> Vec<DistributorName>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
