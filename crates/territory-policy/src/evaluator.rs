//! Policy evaluator
//!
//! Evaluation walks the exclude list, then the include list, and stops at
//! the first matching pattern. List order is significant and patterns are
//! never deduplicated.

use crate::decision::{Decision, Evaluation};
use crate::matcher::matches;
use territory_types::{LocationCode, Policy};

/// Decide whether `policy` grants access to `query`
pub fn evaluate(policy: &Policy, query: &LocationCode) -> Decision {
    explain(policy, query).decision
}

/// Evaluate `query` and report which pattern decided
pub fn explain(policy: &Policy, query: &LocationCode) -> Evaluation {
    if let Some((index, pattern)) = first_match(&policy.exclude, query) {
        return Evaluation::excluded(index, pattern);
    }

    if let Some((index, pattern)) = first_match(&policy.include, query) {
        return Evaluation::included(index, pattern);
    }

    Evaluation::default_deny()
}

fn first_match<'a>(
    patterns: &'a [LocationCode],
    query: &LocationCode,
) -> Option<(usize, &'a LocationCode)> {
    patterns
        .iter()
        .enumerate()
        .find(|(_, pattern)| matches(pattern, query))
}
