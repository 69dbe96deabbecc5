//! Group membership queries.
use std::collections::BTreeMap;

use super::{Communities, UserSet};

pub fn find_common_group_members(group_a: &UserSet, group_b: &UserSet) -> UserSet {
    group_a.intersection(group_b).cloned().collect()
}

pub fn find_users_in_any_group(group_a: &UserSet, group_b: &UserSet) -> UserSet {
    group_a.union(group_b).cloned().collect()
}

/// Users that belong to more than one community, with the names of those communities.
pub fn identify_bridge_users(communities: &Communities) -> BTreeMap<String, UserSet> {
    let mut memberships: BTreeMap<String, UserSet> = BTreeMap::new();
    for (name, members) in communities {
        for user in members {
            memberships
                .entry(user.clone())
                .or_default()
                .insert(name.clone());
        }
    }
    memberships.retain(|_, names| names.len() > 1);
    memberships
}

/// One-line summary such as `Tech Group (2): user1, user3`.
pub fn format_users_for_display(group_name: &str, users: &UserSet) -> String {
    if users.is_empty() {
        return format!("{group_name} (0): (none)");
    }
    let joined = users.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!("{group_name} ({}): {joined}", users.len())
}
