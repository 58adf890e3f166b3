//! Policy construction and inheritance
//!
//! A fresh policy copies the request verbatim. A derived policy is narrowed
//! by its parent: requested includes the parent does not grant are dropped,
//! and the parent's excludes are prepended to the requested ones.

use std::sync::Arc;
use territory_policy::evaluate;
use territory_types::{CreatePolicyRequest, LocationCode, Policy};

/// Result of a successful create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creation {
    /// The policy as stored
    pub policy: Arc<Policy>,

    /// Requested includes the parent does not grant, in request order
    pub dropped_includes: Vec<LocationCode>,
}

/// Build a policy with no parent from `request`
pub fn fresh_policy(request: CreatePolicyRequest) -> Creation {
    Creation {
        policy: Arc::new(Policy {
            name: request.name,
            include: request.include,
            exclude: request.exclude,
            parent_name: request.parent_name,
        }),
        dropped_includes: Vec::new(),
    }
}

/// Derive a policy from `parent`.
///
/// Includes are validated against the parent alone, not against the child's
/// accumulated excludes. Duplicate excludes are kept. The stored parent name
/// is always `parent.name`, whatever the request names.
pub fn derive_policy(parent: &Policy, request: CreatePolicyRequest) -> Creation {
    let (include, dropped_includes): (Vec<_>, Vec<_>) = request
        .include
        .into_iter()
        .partition(|code| evaluate(parent, code).is_granted());

    let mut exclude = Vec::with_capacity(parent.exclude.len() + request.exclude.len());
    exclude.extend(parent.exclude.iter().cloned());
    exclude.extend(request.exclude);

    Creation {
        policy: Arc::new(Policy {
            name: request.name,
            include,
            exclude,
            parent_name: Some(parent.name.clone()),
        }),
        dropped_includes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use territory_types::DistributorName;

    fn loc(code: &str) -> LocationCode {
        LocationCode::parse(code)
    }

    fn parent() -> Policy {
        Policy {
            name: DistributorName::new("parent-distributor"),
            include: vec![loc("parentCountry")],
            exclude: vec![loc("excludeCountry")],
            parent_name: None,
        }
    }

    #[test]
    fn test_fresh_policy_copies_request() {
        let request = CreatePolicyRequest::new("test-distributor")
            .include(loc("city:province:country"))
            .exclude(loc("city:province:anotherCountry"));

        let creation = fresh_policy(request);
        assert_eq!(creation.policy.name.as_str(), "test-distributor");
        assert_eq!(creation.policy.include, vec![loc("city:province:country")]);
        assert_eq!(
            creation.policy.exclude,
            vec![loc("city:province:anotherCountry")]
        );
        assert!(creation.policy.parent_name.is_none());
        assert!(creation.dropped_includes.is_empty());
    }

    #[test]
    fn test_derived_policy_narrows_and_extends() {
        let request = CreatePolicyRequest::new("child-distributor")
            .include(loc("city:province:parentCountry"))
            .exclude(loc("city:province:excludeCountry"))
            .inherits("parent-distributor");

        let creation = derive_policy(&parent(), request);
        let policy = &creation.policy;

        assert_eq!(policy.include, vec![loc("city:province:parentCountry")]);
        assert_eq!(
            policy.exclude,
            vec![loc("excludeCountry"), loc("city:province:excludeCountry")]
        );
        assert_eq!(
            policy.parent_name,
            Some(DistributorName::new("parent-distributor"))
        );
    }

    #[test]
    fn test_ungranted_includes_are_dropped_and_reported() {
        let request = CreatePolicyRequest::new("child")
            .include(loc("z:y:unrelated"))
            .include(loc("a:b:parentCountry"))
            .include(loc("a:b:excludeCountry"))
            .inherits("parent-distributor");

        let creation = derive_policy(&parent(), request);
        assert_eq!(creation.policy.include, vec![loc("a:b:parentCountry")]);
        assert_eq!(
            creation.dropped_includes,
            vec![loc("z:y:unrelated"), loc("a:b:excludeCountry")]
        );
    }

    #[test]
    fn test_duplicate_excludes_are_kept() {
        let request = CreatePolicyRequest::new("child")
            .exclude(loc("excludeCountry"))
            .inherits("parent-distributor");

        let creation = derive_policy(&parent(), request);
        assert_eq!(
            creation.policy.exclude,
            vec![loc("excludeCountry"), loc("excludeCountry")]
        );
    }

    #[test]
    fn test_records_the_parent_actually_used() {
        let unnamed = derive_policy(&parent(), CreatePolicyRequest::new("child"));
        assert_eq!(unnamed.policy.parent_name, Some(DistributorName::new("parent-distributor")));

        let mismatched = derive_policy(
            &parent(),
            CreatePolicyRequest::new("child").inherits("someone-else"),
        );
        assert_eq!(mismatched.policy.parent_name, Some(DistributorName::new("parent-distributor")));
    }

    #[test]
    fn test_child_excludes_do_not_affect_include_validation() {
        // The child's own exclude does not veto includes at creation time
        let request = CreatePolicyRequest::new("child")
            .include(loc("a:b:parentCountry"))
            .exclude(loc("parentCountry"))
            .inherits("parent-distributor");

        let creation = derive_policy(&parent(), request);
        assert_eq!(creation.policy.include, vec![loc("a:b:parentCountry")]);
    }
}
