//! Built-in sample data and loaders for user-supplied data files.
//!
//! The Text tab starts from eleven canned texts and the Network tab from a
//! small canned social network. Both can be extended from files:
//! - group files use one `name:member,member` entry per line,
//! - connection files use one `user:peer,peer` entry per line,
//! - any text file can be added as an extra sample.
use crate::network::{Communities, ConnectionMap, UserSet};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSample {
    pub key: usize,
    pub name: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedGroup {
    pub name: String,
    pub members: UserSet,
}

#[derive(Clone, Debug, Default)]
pub struct NetworkData {
    pub groups: Vec<NamedGroup>,
    pub connections: ConnectionMap,
    pub new_users: UserSet,
    pub influencers: UserSet,
}

impl NetworkData {
    /// Every user named by a group or by either end of a connection.
    pub fn all_users(&self) -> UserSet {
        let mut all = UserSet::new();
        for g in &self.groups {
            all.extend(g.members.iter().cloned());
        }
        for (user, peers) in &self.connections {
            all.insert(user.clone());
            all.extend(peers.iter().cloned());
        }
        all
    }

    pub fn communities(&self) -> Communities {
        self.groups
            .iter()
            .map(|g| (g.name.clone(), g.members.clone()))
            .collect()
    }

    pub fn group(&self, name: &str) -> Option<&NamedGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

fn sample(key: usize, name: &str, text: &str) -> TextSample {
    TextSample { key, name: name.to_string(), text: text.to_string() }
}

pub fn text_samples() -> Vec<TextSample> {
    vec![
        sample(1, "Plain Text", "The quick brown fox jumps over the lazy dog."),
        sample(2, "Formatted Text", "Name: John Doe\nAge: 30\nOccupation: Software Engineer"),
        sample(3, "Code Snippet", "def hello_world():\n    print('Hello, World!')\n\nhello_world()"),
        sample(
            4,
            "CSV Data",
            "id,name,email,department\n1,Alice,alice@example.com,Engineering\n2,Bob,bob@example.com,Marketing\n3,Carol,carol@example.com,Finance",
        ),
        sample(
            5,
            "JSON Data",
            r#"{"users": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}, {"id": 3, "name": "Carol"}]}"#,
        ),
        sample(6, "Log Entry", "[2023-03-15 08:45:32] INFO: User login successful - username=admin"),
        sample(7, "Palindrome", "A man, a plan, a canal: Panama"),
        sample(8, "Whitespace Text", "    This text has    irregular spacing    "),
        sample(9, "Mixed Case", "ThIs TeXt HaS mIxEd CaSe"),
        sample(10, "Text with Numbers", "There are 3 apples, 5 oranges, and 10 bananas"),
        sample(11, "URL", "https://www.example.com/path/to/resource?param1=value1&param2=value2"),
    ]
}

fn users(names: &[&str]) -> UserSet {
    names.iter().map(|s| s.to_string()).collect()
}

fn group(name: &str, members: &[&str]) -> NamedGroup {
    NamedGroup { name: name.to_string(), members: users(members) }
}

pub fn sample_network() -> NetworkData {
    let groups = vec![
        group("Network A", &["user1", "user2", "user3", "user4", "user5", "user6", "user7"]),
        group("Network B", &["user5", "user6", "user7", "user8", "user9", "user10"]),
        group("Tech Group", &["user1", "user3", "user5", "user8", "user10"]),
        group("Gaming Group", &["user2", "user4", "user6", "user8", "user9"]),
        group("Arts Group", &["user3", "user5", "user7", "user10"]),
    ];
    let connections = [
        ("user1", users(&["user2", "user3", "user5"])),
        ("user2", users(&["user1", "user4", "user6"])),
        ("user3", users(&["user1", "user5", "user7"])),
        ("user4", users(&["user2", "user6"])),
        ("user5", users(&["user1", "user3", "user7", "user8"])),
    ]
    .into_iter()
    .map(|(u, peers)| (u.to_string(), peers))
    .collect();
    NetworkData {
        groups,
        connections,
        new_users: users(&["user11", "user12", "user13"]),
        influencers: users(&["user3", "user5", "user8", "user11"]),
    }
}

/// Parse `name:member,member` lines, skipping blanks and `#` comments.
fn parse_entries(contents: &str) -> Vec<(String, UserSet)> {
    let mut entries = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((name, rest)) = line.split_once(':') else { continue };
        let name = name.trim();
        if name.is_empty() { continue; }
        let members = rest
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        entries.push((name.to_string(), members));
    }
    entries
}

/// Repeated group names are merged into the first entry with that name.
pub fn parse_group_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<NamedGroup>> {
    let contents = fs::read_to_string(path)?;
    let mut groups: Vec<NamedGroup> = Vec::new();
    for (name, members) in parse_entries(&contents) {
        match groups.iter_mut().find(|g| g.name == name) {
            Some(existing) => existing.members.extend(members),
            None => groups.push(NamedGroup { name, members }),
        }
    }
    Ok(groups)
}

/// Repeated users are merged into one connection set.
pub fn parse_connections_file<P: AsRef<Path>>(path: P) -> io::Result<ConnectionMap> {
    let contents = fs::read_to_string(path)?;
    let mut map = ConnectionMap::new();
    for (user, peers) in parse_entries(&contents) {
        map.entry(user).or_default().extend(peers);
    }
    Ok(map)
}

/// Read a file as a text sample named after the file.
pub fn load_text_sample<P: AsRef<Path>>(path: P, key: usize) -> io::Result<TextSample> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Custom".to_string());
    Ok(TextSample { key, name, text })
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{fs, path::PathBuf, time::{SystemTime, UNIX_EPOCH}};

	fn tmp_path(tag: &str) -> PathBuf {
		let mut p = std::env::temp_dir();
		let n = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
		p.push(format!("textnet_{tag}_{}_{}", std::process::id(), n));
		p
	}

	#[test]
	fn canned_samples_match_menu_keys() {
		let samples = text_samples();
		assert_eq!(samples.len(), 11);
		assert!(samples.iter().enumerate().all(|(i, s)| s.key == i + 1));
		assert!(samples[0].text.contains("quick brown fox"));
		assert!(samples[3].text.contains("id,name,email"));
		assert!(samples[5].text.contains("INFO") && samples[5].text.contains("login"));
	}

	#[test]
	fn canned_network_totals() {
		let net = sample_network();
		assert_eq!(net.groups.len(), 5);
		assert_eq!(net.all_users().len(), 10);
		assert_eq!(net.communities()["Arts Group"].len(), 4);
		assert!(net.group("Tech Group").is_some());
		assert!(net.group("Nope").is_none());
		assert_eq!(net.connections["user5"].len(), 4);
	}

	#[test]
	fn parse_group_file_basic() {
		let path = tmp_path("groups");
		let data = "\
# communities
tech: alice, bob
arts:bob,carol,

broken line
empty:
";
		fs::write(&path, data).unwrap();

		let groups = parse_group_file(&path).unwrap();
		fs::remove_file(&path).ok();

		assert_eq!(groups.len(), 3);
		assert_eq!(groups[0].name, "tech");
		assert_eq!(groups[0].members, users(&["alice", "bob"]));
		assert_eq!(groups[1].members, users(&["bob", "carol"]));
		assert!(groups[2].members.is_empty());
	}

	#[test]
	fn parse_group_file_merges_repeated_names() {
		let path = tmp_path("groups_repeat");
		fs::write(&path, "tech: alice\narts: alice, bob\ntech: bob\n").unwrap();

		let groups = parse_group_file(&path).unwrap();
		fs::remove_file(&path).ok();

		assert_eq!(groups.len(), 2);
		assert_eq!(groups[0].name, "tech");
		assert_eq!(groups[0].members, users(&["alice", "bob"]));

		let net = NetworkData { groups, ..NetworkData::default() };
		let bridges = crate::network::identify_bridge_users(&net.communities());
		assert_eq!(bridges.len(), 2);
		assert_eq!(bridges["alice"], users(&["arts", "tech"]));
		assert_eq!(bridges["bob"], users(&["arts", "tech"]));
	}

	#[test]
	fn parse_connections_file_merges_repeats() {
		let path = tmp_path("connections");
		fs::write(&path, "alice:bob\nalice:carol\nbob:alice\n").unwrap();

		let map = parse_connections_file(&path).unwrap();
		fs::remove_file(&path).ok();

		assert_eq!(map.len(), 2);
		assert_eq!(map["alice"], users(&["bob", "carol"]));
	}

	#[test]
	fn load_text_sample_uses_file_name() {
		let path = tmp_path("note.txt");
		fs::write(&path, "hello there").unwrap();

		let s = load_text_sample(&path, 12).unwrap();
		fs::remove_file(&path).ok();

		assert_eq!(s.key, 12);
		assert_eq!(s.text, "hello there");
		assert!(s.name.starts_with("textnet_note.txt"));
	}

	#[test]
	fn missing_file_is_an_error() {
		assert!(parse_group_file(tmp_path("missing")).is_err());
	}
}
