//! Fully-qualified metric name (FQN) derivation.
//!
//! Metric identities arrive as hierarchical paths scoped by job, container,
//! source, group, and metric name, full of characters the scrape endpoint's
//! name grammar forbids (dots, slashes, dashes, colons). This module
//! flattens them deterministically:
//!
//! 1. `job_name + "_" + job_id + "_" + container_name`
//! 2. `+ "_" + source` only when `source != container_name`, so
//!    container-level rollups keep a stable shorter name
//! 3. `+ "_" + group + "_" + name`
//! 4. every char outside `[A-Za-z0-9_]` becomes exactly one `_`
//!
//! Replacement is per-character, never collapsed, so inputs of equal length
//! that differ only in forbidden positions stay distinct. The substitution
//! is stateless: restarts reproduce the same names.

use crate::report::ReportHeader;

/// Join header, group, and name into the raw (unsanitized) metric path.
pub fn raw_path(header: &ReportHeader, group: &str, name: &str) -> String {
    let mut path = format!(
        "{}_{}_{}",
        header.job_name, header.job_id, header.container_name
    );
    if header.source != header.container_name {
        path.push('_');
        path.push_str(&header.source);
    }
    path.push('_');
    path.push_str(group);
    path.push('_');
    path.push_str(name);
    path
}

/// Map every character outside `[A-Za-z0-9_]` to a single `_`.
///
/// Total per-character map, so there is no failure path to handle.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive the scrape-safe fully-qualified name for one metric.
pub fn qualified_name(header: &ReportHeader, group: &str, name: &str) -> String {
    sanitize(&raw_path(header, group, name))
}
