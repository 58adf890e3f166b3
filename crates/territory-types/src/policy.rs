//! Distributor policies and creation requests
//!
//! Both serialize with the field names `name`, `include`, `exclude` and
//! `inherits`. An absent or empty `inherits` means the policy has no parent.

use crate::ids::DistributorName;
use crate::location::LocationCode;
use serde::{Deserialize, Deserializer, Serialize};

/// Stored access policy of one distributor.
///
/// Created once by the registry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub name: DistributorName,

    /// Patterns granting access, in evaluation order
    #[serde(default)]
    pub include: Vec<LocationCode>,

    /// Patterns denying access, checked before `include`
    #[serde(default)]
    pub exclude: Vec<LocationCode>,

    /// Distributor this policy was derived from
    #[serde(
        default,
        rename = "inherits",
        alias = "parent_name",
        deserialize_with = "empty_name_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_name: Option<DistributorName>,
}

impl Policy {
    pub fn is_derived(&self) -> bool {
        self.parent_name.is_some()
    }
}

/// Request to create a policy, optionally derived from a parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePolicyRequest {
    pub name: DistributorName,

    #[serde(default)]
    pub include: Vec<LocationCode>,

    #[serde(default)]
    pub exclude: Vec<LocationCode>,

    #[serde(
        default,
        rename = "inherits",
        alias = "parent_name",
        deserialize_with = "empty_name_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_name: Option<DistributorName>,
}

impl CreatePolicyRequest {
    pub fn new(name: impl Into<DistributorName>) -> Self {
        Self {
            name: name.into(),
            include: Vec::new(),
            exclude: Vec::new(),
            parent_name: None,
        }
    }

    /// Append an include pattern
    pub fn include(mut self, code: LocationCode) -> Self {
        self.include.push(code);
        self
    }

    /// Append an exclude pattern
    pub fn exclude(mut self, code: LocationCode) -> Self {
        self.exclude.push(code);
        self
    }

    /// Derive the new policy from `parent`
    pub fn inherits(mut self, parent: impl Into<DistributorName>) -> Self {
        self.parent_name = Some(parent.into());
        self
    }
}

fn empty_name_as_none<'de, D>(deserializer: D) -> Result<Option<DistributorName>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|name| !name.is_empty()).map(DistributorName::new))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = CreatePolicyRequest::new("child")
            .include(LocationCode::parse("a:b:c"))
            .exclude(LocationCode::parse("b:c"))
            .inherits("parent");

        assert_eq!(request.name.as_str(), "child");
        assert_eq!(request.include.len(), 1);
        assert_eq!(request.exclude.len(), 1);
        assert_eq!(request.parent_name, Some(DistributorName::new("parent")));
    }

    #[test]
    fn test_request_deserialize_wire_format() {
        let json = r#"{
            "name": "child",
            "include": ["city:province:country", "country"],
            "exclude": [],
            "inherits": "parent"
        }"#;
        let request: CreatePolicyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.include[1], LocationCode::country("country"));
        assert_eq!(request.parent_name.unwrap().as_str(), "parent");
    }

    #[test]
    fn test_empty_inherits_means_no_parent() {
        let json = r#"{"name": "solo", "include": ["c"], "exclude": [], "inherits": ""}"#;
        let request: CreatePolicyRequest = serde_json::from_str(json).unwrap();
        assert!(request.parent_name.is_none());
    }

    #[test]
    fn test_parent_name_alias_and_missing_lists() {
        let json = r#"{"name": "child", "parent_name": "parent"}"#;
        let request: CreatePolicyRequest = serde_json::from_str(json).unwrap();
        assert!(request.include.is_empty());
        assert!(request.exclude.is_empty());
        assert_eq!(request.parent_name.unwrap().as_str(), "parent");
    }

    #[test]
    fn test_request_rejects_malformed_code() {
        let json = r#"{"name": "bad", "include": ["a:b:c:d"]}"#;
        assert!(serde_json::from_str::<CreatePolicyRequest>(json).is_err());
    }

    #[test]
    fn test_policy_serialization_omits_absent_parent() {
        let policy = Policy {
            name: DistributorName::new("root"),
            include: vec![LocationCode::country("IN")],
            exclude: vec![LocationCode::new("CENAI", "TN", "IN")],
            parent_name: None,
        };
        let value = serde_json::to_value(&policy).unwrap();
        assert_eq!(value["name"], "root");
        assert_eq!(value["include"][0], "IN");
        assert_eq!(value["exclude"][0], "CENAI:TN:IN");
        assert!(value.get("inherits").is_none());
        assert!(!policy.is_derived());
    }
}
