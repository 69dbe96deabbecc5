//! Set algebra over a social connection graph.
//!
//! The graph is a mapping from a user to the set of users they are directly
//! connected to. It is undirected by convention but stored per node, and
//! nothing enforces symmetry: a user can appear as somebody's connection
//! without having an entry of their own.
//!
//! Queries that name a user require that user to be a key of the map.
pub mod groups;
pub mod metrics;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::{ArgResult, invalid_argument};

pub use groups::{
    find_common_group_members, find_users_in_any_group, format_users_for_display,
    identify_bridge_users,
};
pub use metrics::{calculate_network_density, find_isolated_users};

pub type UserSet = BTreeSet<String>;
pub type ConnectionMap = BTreeMap<String, UserSet>;
/// Community name to its members.
pub type Communities = BTreeMap<String, UserSet>;

/// Default hop bound for [`recommend_connections`].
pub const DEFAULT_RECOMMENDATION_DEPTH: usize = 2;

fn connections_of<'a>(user: &str, connections: &'a ConnectionMap) -> ArgResult<&'a UserSet> {
    connections
        .get(user)
        .ok_or_else(|| invalid_argument(format!("User {user} not found in connections")))
}

/// Users directly connected to both `user_a` and `user_b`.
pub fn find_mutual_connections(
    user_a: &str,
    user_b: &str,
    connections: &ConnectionMap,
) -> ArgResult<UserSet> {
    let a = connections_of(user_a, connections)?;
    let b = connections_of(user_b, connections)?;
    Ok(a.intersection(b).cloned().collect())
}

/// Users directly connected to exactly one of `user_a` and `user_b`.
pub fn find_exclusive_connections(
    user_a: &str,
    user_b: &str,
    connections: &ConnectionMap,
) -> ArgResult<UserSet> {
    let a = connections_of(user_a, connections)?;
    let b = connections_of(user_b, connections)?;
    Ok(a.symmetric_difference(b).cloned().collect())
}

/// Every user reachable from `user` within `depth` hops, `user` excluded.
///
/// `depth == 1` is the direct connection set. Users without an entry in
/// the map are reachable but have no outgoing edges.
pub fn find_all_connections(
    user: &str,
    connections: &ConnectionMap,
    depth: usize,
) -> ArgResult<UserSet> {
    connections_of(user, connections)?;
    if depth < 1 {
        return Err(invalid_argument("Depth must be at least 1"));
    }

    let mut seen = UserSet::new();
    seen.insert(user.to_string());
    let mut queue = VecDeque::from([(user, 0usize)]);
    let mut reached = UserSet::new();

    while let Some((current, hops)) = queue.pop_front() {
        if hops == depth {
            continue;
        }
        let Some(peers) = connections.get(current) else {
            continue;
        };
        for peer in peers {
            if seen.insert(peer.clone()) {
                reached.insert(peer.clone());
                queue.push_back((peer.as_str(), hops + 1));
            }
        }
    }
    Ok(reached)
}

/// Whether `user_b` is in `user_a`'s connection set. Only `user_a` must exist.
pub fn is_direct_connection(
    user_a: &str,
    user_b: &str,
    connections: &ConnectionMap,
) -> ArgResult<bool> {
    Ok(connections_of(user_a, connections)?.contains(user_b))
}

/// Whether the two users are not directly connected but share a go-between.
///
/// A connection of `user_a` links to `user_b` when either of them lists
/// the other.
pub fn is_second_degree_connection(
    user_a: &str,
    user_b: &str,
    connections: &ConnectionMap,
) -> ArgResult<bool> {
    let a = connections_of(user_a, connections)?;
    let b = connections_of(user_b, connections)?;
    if user_a == user_b || a.contains(user_b) {
        return Ok(false);
    }
    Ok(a.iter().any(|friend| {
        b.contains(friend)
            || connections
                .get(friend)
                .is_some_and(|peers| peers.contains(user_b))
    }))
}

/// Users within `depth` hops that `user` is not yet connected to.
pub fn recommend_connections(
    user: &str,
    connections: &ConnectionMap,
    depth: usize,
) -> ArgResult<UserSet> {
    let direct = connections_of(user, connections)?;
    let reachable = find_all_connections(user, connections, depth)?;
    Ok(reachable
        .into_iter()
        .filter(|u| u != user && !direct.contains(u))
        .collect())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn set(items: &[&str]) -> UserSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn graph(edges: &[(&str, &[&str])]) -> ConnectionMap {
        edges.iter().map(|(u, peers)| (u.to_string(), set(peers))).collect()
    }

    /// The connection sample used by the demo network.
    pub fn sample() -> ConnectionMap {
        graph(&[
            ("user1", &["user2", "user3", "user5"]),
            ("user2", &["user1", "user4", "user6"]),
            ("user3", &["user1", "user5", "user7"]),
            ("user4", &["user2", "user6"]),
            ("user5", &["user1", "user3", "user7", "user8"]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{graph, sample, set};
    use super::*;

    #[test]
    fn mutual_and_exclusive() {
        let c = sample();
        assert_eq!(find_mutual_connections("user1", "user5", &c).unwrap(), set(&["user3"]));
        assert!(find_mutual_connections("user1", "user2", &c).unwrap().is_empty());
        assert_eq!(
            find_exclusive_connections("user1", "user5", &c).unwrap(),
            set(&["user1", "user2", "user5", "user7", "user8"])
        );
        let err = find_mutual_connections("user1", "user9", &c).unwrap_err();
        assert_eq!(err.message(), "User user9 not found in connections");
    }

    #[test]
    fn closure_by_depth() {
        let c = sample();
        assert_eq!(find_all_connections("user1", &c, 1).unwrap(), set(&["user2", "user3", "user5"]));
        assert_eq!(
            find_all_connections("user1", &c, 2).unwrap(),
            set(&["user2", "user3", "user4", "user5", "user6", "user7", "user8"])
        );
        assert_eq!(
            find_all_connections("user1", &c, 10).unwrap(),
            find_all_connections("user1", &c, 2).unwrap()
        );
        assert!(find_all_connections("user1", &c, 0).is_err());
        assert!(find_all_connections("ghost", &c, 1).is_err());
    }

    #[test]
    fn closure_excludes_origin_on_cycles() {
        let c = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
        assert_eq!(find_all_connections("a", &c, 3).unwrap(), set(&["b", "c"]));
    }

    #[test]
    fn adjacency_tests() {
        let c = sample();
        assert!(is_direct_connection("user1", "user2", &c).unwrap());
        assert!(!is_direct_connection("user1", "user4", &c).unwrap());
        assert!(is_direct_connection("user1", "ghost", &c).is_ok());
        assert!(is_direct_connection("ghost", "user1", &c).is_err());

        assert!(is_second_degree_connection("user1", "user4", &c).unwrap());
        assert!(!is_second_degree_connection("user1", "user2", &c).unwrap());
        assert!(!is_second_degree_connection("user1", "user1", &c).unwrap());
        assert!(is_second_degree_connection("user4", "user3", &c).is_ok());
        assert!(is_second_degree_connection("user1", "user8", &c).is_err());
    }

    #[test]
    fn second_degree_follows_either_direction() {
        let c = graph(&[("a", &["m"]), ("b", &["m"]), ("m", &[])]);
        assert!(is_second_degree_connection("a", "b", &c).unwrap());
    }

    #[test]
    fn recommendations_skip_direct_ties_and_self() {
        let c = sample();
        assert_eq!(
            recommend_connections("user1", &c, DEFAULT_RECOMMENDATION_DEPTH).unwrap(),
            set(&["user4", "user6", "user7", "user8"])
        );
        assert!(recommend_connections("user1", &c, 1).unwrap().is_empty());
        assert!(recommend_connections("nobody", &c, 2).is_err());
    }
}
