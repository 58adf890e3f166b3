//! Hierarchical location matching

use territory_types::LocationCode;

/// Check whether `pattern` covers `query`.
///
/// Country must be equal. A province in the pattern must equal the query's
/// province, and a city in the pattern is only compared once the province
/// matched. Empty pattern fields match anything at that level and below.
pub fn matches(pattern: &LocationCode, query: &LocationCode) -> bool {
    if pattern.country_name() != query.country_name() {
        return false;
    }
    if pattern.province_name().is_empty() {
        return true;
    }
    pattern.province_name() == query.province_name()
        && (pattern.city_name().is_empty() || pattern.city_name() == query.city_name())
}
