//! Whole-network metrics.
use super::{ConnectionMap, UserSet};
use crate::error::{ArgResult, invalid_argument};

/// Ratio of realized to possible directed edges among `users`.
///
/// Possible edges are `n * (n - 1)`; edges leaving the set and self-loops
/// are not counted. A single user has density `0.0`.
pub fn calculate_network_density(users: &UserSet, connections: &ConnectionMap) -> ArgResult<f64> {
    if users.is_empty() {
        return Err(invalid_argument("User set cannot be empty"));
    }
    let n = users.len();
    let possible = n * (n - 1);
    if possible == 0 {
        return Ok(0.0);
    }
    let actual: usize = users
        .iter()
        .filter_map(|u| connections.get(u).map(|peers| (u, peers)))
        .map(|(u, peers)| peers.iter().filter(|p| *p != u && users.contains(*p)).count())
        .sum();
    Ok(actual as f64 / possible as f64)
}

/// Users with no outgoing connections who are nobody's connection either.
pub fn find_isolated_users(users: &UserSet, connections: &ConnectionMap) -> UserSet {
    users
        .iter()
        .filter(|u| connections.get(*u).is_none_or(|peers| peers.is_empty()))
        .filter(|u| !connections.values().any(|peers| peers.contains(*u)))
        .cloned()
        .collect()
}
