//! Distributor identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Name of a distributor; the primary key of a policy
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistributorName(String);

/// Rejected attempt to build a distributor name from an empty string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("distributor name must not be empty")]
pub struct EmptyNameError;

impl DistributorName {
    /// Wrap a name without checking it.
    ///
    /// Empty names are only rejected on deserialization and by
    /// [`DistributorName::parse`].
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build a name, rejecting the empty string
    pub fn parse(name: impl Into<String>) -> Result<Self, EmptyNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EmptyNameError);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DistributorName {
    type Error = EmptyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DistributorName> for String {
    fn from(name: DistributorName) -> Self {
        name.0
    }
}

/// Unchecked, like [`DistributorName::new`]
impl From<&str> for DistributorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for DistributorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
