//! Seed loading
//!
//! A seed file holds either a JSON array of create requests or a single
//! request object. Requests are applied in file order, so a parent must
//! appear before the policies deriving from it.

use crate::error::{DaemonError, DaemonResult};
use serde::Deserialize;
use std::path::Path;
use territory_registry::PolicyRegistry;
use territory_types::CreatePolicyRequest;

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    Many(Vec<CreatePolicyRequest>),
    One(CreatePolicyRequest),
}

/// Outcome of applying a seed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// Parse seed file contents
pub fn parse_seed(raw: &str) -> serde_json::Result<Vec<CreatePolicyRequest>> {
    Ok(match serde_json::from_str(raw)? {
        SeedDocument::Many(requests) => requests,
        SeedDocument::One(request) => vec![request],
    })
}

/// Read and parse a seed file
pub fn load_seed_file(path: &Path) -> DaemonResult<Vec<CreatePolicyRequest>> {
    let seed_error = |reason: String| DaemonError::Seed {
        path: path.to_path_buf(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
    parse_seed(&raw).map_err(|e| seed_error(e.to_string()))
}

/// Create each request in order. Failures are logged and skipped.
pub fn apply_seed(registry: &dyn PolicyRegistry, requests: Vec<CreatePolicyRequest>) -> SeedReport {
    let mut report = SeedReport::default();

    for request in requests {
        let name = request.name.clone();
        match registry.create(request) {
            Ok(creation) => {
                if !creation.dropped_includes.is_empty() {
                    tracing::warn!(
                        distributor = %name,
                        dropped = creation.dropped_includes.len(),
                        "Seeded policy dropped includes not granted by parent"
                    );
                }
                tracing::debug!(distributor = %name, "Seeded policy");
                report.created += 1;
            }
            Err(err) => {
                tracing::warn!(distributor = %name, error = %err, "Skipped seed entry");
                report.skipped += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use territory_registry::InMemoryPolicyRegistry;
    use territory_types::DistributorName;

    const SEED: &str = r#"[
        {"name": "root", "include": ["IN", "US"], "exclude": ["KA:IN"]},
        {"name": "south", "include": ["TN:IN", "CA:US", "BLR:KA:IN"], "inherits": "root"},
        {"name": "root", "include": ["UK"]},
        {"name": "orphan", "inherits": "ghost"}
    ]"#;

    #[test]
    fn test_parse_array_and_single() {
        assert_eq!(parse_seed(SEED).unwrap().len(), 4);

        let single = parse_seed(r#"{"name": "solo", "include": ["IN"]}"#).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].name.as_str(), "solo");
    }

    #[test]
    fn test_parse_rejects_malformed_code() {
        assert!(parse_seed(r#"[{"name": "bad", "include": ["a:b:c:d"]}]"#).is_err());
    }

    #[test]
    fn test_apply_seed_in_order() {
        let registry = InMemoryPolicyRegistry::new();
        let report = apply_seed(&registry, parse_seed(SEED).unwrap());

        assert_eq!(report, SeedReport { created: 2, skipped: 2 });

        let south = registry.get(&DistributorName::new("south")).unwrap();
        assert_eq!(south.include.len(), 2);
        assert_eq!(south.exclude.len(), 1);
    }
}
