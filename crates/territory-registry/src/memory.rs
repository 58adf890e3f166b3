//! In-memory policy registry
//!
//! Policies live for the lifetime of the registry. Reads share the lock;
//! `create` holds the write lock across the existence check, the parent
//! lookup and the insert.

use crate::error::{RegistryError, Result};
use crate::inherit::{derive_policy, fresh_policy, Creation};
use crate::registry::PolicyRegistry;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use territory_types::{CreatePolicyRequest, DistributorName, Policy};

/// In-memory policy registry
#[derive(Debug, Default)]
pub struct InMemoryPolicyRegistry {
    policies: RwLock<HashMap<DistributorName, Arc<Policy>>>,
}

impl InMemoryPolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolicyRegistry for InMemoryPolicyRegistry {
    fn get(&self, name: &DistributorName) -> Result<Arc<Policy>> {
        self.policies
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownActor(name.clone()))
    }

    fn create(&self, request: CreatePolicyRequest) -> Result<Creation> {
        let mut policies = self.policies.write();

        if let Some(existing) = policies.get(&request.name) {
            return Err(RegistryError::AlreadyExists {
                existing: Arc::clone(existing),
            });
        }

        let creation = match request.parent_name.clone() {
            None => fresh_policy(request),
            Some(parent_name) => {
                let parent = policies.get(&parent_name).cloned().ok_or_else(|| {
                    RegistryError::ParentNotFound {
                        name: request.name.clone(),
                        parent: parent_name,
                    }
                })?;
                derive_policy(&parent, request)
            }
        };

        policies.insert(creation.policy.name.clone(), Arc::clone(&creation.policy));
        Ok(creation)
    }

    fn len(&self) -> usize {
        self.policies.read().len()
    }

    fn names(&self) -> Vec<DistributorName> {
        let mut names: Vec<_> = self.policies.read().keys().cloned().collect();
        names.sort();
        names
    }
}
