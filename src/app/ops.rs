//! Operation catalogue for the action menus.
//!
//! Each menu entry knows its label, the extra arguments it prompts for, and
//! how to run itself against the selected sample or group. Running returns
//! the text shown in the result dialog; argument problems come back as
//! [`crate::error::InvalidArgument`] so the caller can show them without leaving the loop.
use std::collections::HashMap;

use crate::error::{ArgResult, invalid_argument};
use crate::network::{self, UserSet};
use crate::samples::{NamedGroup, NetworkData};
use crate::text;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextOp {
    CharacterCount,
    WordCount,
    Palindrome,
    VowelsConsonants,
    Uppercase,
    Lowercase,
    Capitalize,
    Strip,
    Replace,
    Substring,
    FindAll,
    Split,
    Emails,
    Dates,
    ParseCsvLine,
    Join,
    Template,
    Table,
}

impl TextOp {
    pub const ALL: [TextOp; 18] = [
        TextOp::CharacterCount,
        TextOp::WordCount,
        TextOp::Palindrome,
        TextOp::VowelsConsonants,
        TextOp::Uppercase,
        TextOp::Lowercase,
        TextOp::Capitalize,
        TextOp::Strip,
        TextOp::Replace,
        TextOp::Substring,
        TextOp::FindAll,
        TextOp::Split,
        TextOp::Emails,
        TextOp::Dates,
        TextOp::ParseCsvLine,
        TextOp::Join,
        TextOp::Template,
        TextOp::Table,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextOp::CharacterCount => "Character count",
            TextOp::WordCount => "Word count",
            TextOp::Palindrome => "Check palindrome",
            TextOp::VowelsConsonants => "Vowels and consonants",
            TextOp::Uppercase => "Convert to uppercase",
            TextOp::Lowercase => "Convert to lowercase",
            TextOp::Capitalize => "Capitalize words",
            TextOp::Strip => "Strip whitespace",
            TextOp::Replace => "Replace substring",
            TextOp::Substring => "Extract substring",
            TextOp::FindAll => "Find all occurrences",
            TextOp::Split => "Split text",
            TextOp::Emails => "Extract email addresses",
            TextOp::Dates => "Extract dates",
            TextOp::ParseCsvLine => "Parse CSV line",
            TextOp::Join => "Join text parts",
            TextOp::Template => "Format with variables",
            TextOp::Table => "Create text table",
        }
    }

    /// Labels of the extra arguments, in prompt order.
    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            TextOp::Replace => &["Substring to replace", "Replacement"],
            TextOp::Substring => &["Start index", "End index"],
            TextOp::FindAll => &["Substring to find"],
            TextOp::Split => &["Delimiter (empty for whitespace)"],
            TextOp::ParseCsvLine => &["Line number"],
            TextOp::Join => &["Parts (comma separated)", "Join delimiter"],
            TextOp::Template => &["Template with {placeholders}", "Variables (name=value; ...)"],
            TextOp::Table => &["Headers (comma separated)", "Rows (cells by ',', rows by ';')"],
            _ => &[],
        }
    }

    /// Run against `text` with the prompted `inputs`.
    pub fn run(self, text: &str, inputs: &[String]) -> ArgResult<String> {
        let arg = |i: usize| inputs.get(i).map(String::as_str).unwrap_or("");
        let out = match self {
            TextOp::CharacterCount => format!("{} characters", text::count_characters(text)),
            TextOp::WordCount => format!("{} words", text::count_words(text)),
            TextOp::Palindrome => {
                if text::is_palindrome(text) { "Yes".to_string() } else { "No".to_string() }
            }
            TextOp::VowelsConsonants => {
                let (vowels, consonants) = text::count_vowels_and_consonants(text);
                format!("Vowels: {vowels}, Consonants: {consonants}")
            }
            TextOp::Uppercase => text::to_uppercase(text),
            TextOp::Lowercase => text::to_lowercase(text),
            TextOp::Capitalize => text::capitalize_text(text),
            TextOp::Strip => format!("'{}'", text::strip_whitespace(text)),
            TextOp::Replace => text::replace_substring(text, arg(0), arg(1))?,
            TextOp::Substring => {
                let start = parse_index(arg(0), "Start index")?;
                let end = parse_index(arg(1), "End index")?;
                format!("[{start}:{end}] '{}'", text::extract_substring(text, start, end)?)
            }
            TextOp::FindAll => {
                let positions = text::find_all_occurrences(text, arg(0))?;
                if positions.is_empty() {
                    "Not found".to_string()
                } else {
                    format!("Found at positions: {positions:?}")
                }
            }
            TextOp::Split => {
                let delimiter = Some(arg(0)).filter(|d| !d.is_empty());
                format!("{:?}", text::split_text(text, delimiter)?)
            }
            TextOp::Emails => list_or(text::extract_email_addresses(text), "No emails found"),
            TextOp::Dates => list_or(text::extract_dates(text), "No dates found"),
            TextOp::ParseCsvLine => {
                let idx = parse_index(arg(0), "Line number")?;
                let lines: Vec<&str> = text.lines().collect();
                let line = lines.get(idx).ok_or_else(|| {
                    invalid_argument(format!(
                        "Line number {idx} out of range (0-{})",
                        lines.len().saturating_sub(1)
                    ))
                })?;
                format!("{:?}", text::parse_csv_line(line))
            }
            TextOp::Join => {
                let parts: Vec<&str> = arg(0).split(',').map(str::trim).collect();
                text::join_text(&parts, arg(1))
            }
            TextOp::Template => {
                let variables = parse_variables(arg(1))?;
                text::format_text_with_variables(arg(0), &variables)?
            }
            TextOp::Table => {
                let headers = split_cells(arg(0));
                let rows: Vec<Vec<String>> = arg(1)
                    .split(';')
                    .filter(|r| !r.trim().is_empty())
                    .map(split_cells)
                    .collect();
                if rows.is_empty() {
                    return Err(invalid_argument("No rows provided"));
                }
                text::format_text_table(&headers, &rows)?
            }
        };
        Ok(out)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NetworkOp {
    Members,
    Mutual,
    Exclusive,
    WithinDepth,
    DirectCheck,
    SecondDegree,
    CommonWithGroup,
    UnionWithGroup,
    BridgeUsers,
    Density,
    Isolated,
    Recommend,
}

impl NetworkOp {
    pub const ALL: [NetworkOp; 12] = [
        NetworkOp::Members,
        NetworkOp::Mutual,
        NetworkOp::Exclusive,
        NetworkOp::WithinDepth,
        NetworkOp::DirectCheck,
        NetworkOp::SecondDegree,
        NetworkOp::CommonWithGroup,
        NetworkOp::UnionWithGroup,
        NetworkOp::BridgeUsers,
        NetworkOp::Density,
        NetworkOp::Isolated,
        NetworkOp::Recommend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NetworkOp::Members => "Show members",
            NetworkOp::Mutual => "Mutual connections",
            NetworkOp::Exclusive => "Exclusive connections",
            NetworkOp::WithinDepth => "Connections within depth",
            NetworkOp::DirectCheck => "Direct connection?",
            NetworkOp::SecondDegree => "Second-degree connection?",
            NetworkOp::CommonWithGroup => "Common members with group",
            NetworkOp::UnionWithGroup => "Members in either group",
            NetworkOp::BridgeUsers => "Bridge users",
            NetworkOp::Density => "Network density",
            NetworkOp::Isolated => "Isolated users",
            NetworkOp::Recommend => "Recommend connections",
        }
    }

    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            NetworkOp::Mutual
            | NetworkOp::Exclusive
            | NetworkOp::DirectCheck
            | NetworkOp::SecondDegree => &["First user", "Second user"],
            NetworkOp::WithinDepth => &["User", "Depth"],
            NetworkOp::Recommend => &["User", "Depth (empty for 2)"],
            _ => &[],
        }
    }

    /// Whether a second group has to be picked before running.
    pub fn needs_other_group(self) -> bool {
        matches!(self, NetworkOp::CommonWithGroup | NetworkOp::UnionWithGroup)
    }

    pub fn run(
        self,
        net: &NetworkData,
        group: &NamedGroup,
        other: Option<&NamedGroup>,
        inputs: &[String],
    ) -> ArgResult<String> {
        let arg = |i: usize| inputs.get(i).map(|s| s.trim()).unwrap_or("");
        let conns = &net.connections;
        let out = match self {
            NetworkOp::Members => network::format_users_for_display(&group.name, &group.members),
            NetworkOp::Mutual => {
                let (a, b) = (require_user(arg(0))?, require_user(arg(1))?);
                let set = network::find_mutual_connections(a, b, conns)?;
                network::format_users_for_display(&format!("Mutual connections of {a} and {b}"), &set)
            }
            NetworkOp::Exclusive => {
                let (a, b) = (require_user(arg(0))?, require_user(arg(1))?);
                let set = network::find_exclusive_connections(a, b, conns)?;
                network::format_users_for_display(&format!("Exclusive connections of {a} and {b}"), &set)
            }
            NetworkOp::WithinDepth => {
                let user = require_user(arg(0))?;
                let depth = parse_index(arg(1), "Depth")?;
                let set = network::find_all_connections(user, conns, depth)?;
                network::format_users_for_display(&format!("Within {depth} hops of {user}"), &set)
            }
            NetworkOp::DirectCheck => {
                let (a, b) = (require_user(arg(0))?, require_user(arg(1))?);
                yes_no(network::is_direct_connection(a, b, conns)?, &format!("{a} is directly connected to {b}"))
            }
            NetworkOp::SecondDegree => {
                let (a, b) = (require_user(arg(0))?, require_user(arg(1))?);
                yes_no(
                    network::is_second_degree_connection(a, b, conns)?,
                    &format!("{a} reaches {b} through a mutual friend"),
                )
            }
            NetworkOp::CommonWithGroup | NetworkOp::UnionWithGroup => {
                let other = other.ok_or_else(|| invalid_argument("Second group is required"))?;
                let (title, set) = if self == NetworkOp::CommonWithGroup {
                    (
                        format!("{} & {}", group.name, other.name),
                        network::find_common_group_members(&group.members, &other.members),
                    )
                } else {
                    (
                        format!("{} | {}", group.name, other.name),
                        network::find_users_in_any_group(&group.members, &other.members),
                    )
                };
                network::format_users_for_display(&title, &set)
            }
            NetworkOp::BridgeUsers => {
                let bridges = network::identify_bridge_users(&net.communities());
                if bridges.is_empty() {
                    "No bridge users".to_string()
                } else {
                    bridges
                        .iter()
                        .map(|(user, names)| {
                            format!("{user}: {}", names.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            NetworkOp::Density => {
                let density = network::calculate_network_density(&group.members, conns)?;
                format!("Density of {}: {density:.3}", group.name)
            }
            NetworkOp::Isolated => {
                let isolated = network::find_isolated_users(&group.members, conns);
                network::format_users_for_display(&format!("Isolated in {}", group.name), &isolated)
            }
            NetworkOp::Recommend => {
                let user = require_user(arg(0))?;
                let depth = if arg(1).is_empty() {
                    network::DEFAULT_RECOMMENDATION_DEPTH
                } else {
                    parse_index(arg(1), "Depth")?
                };
                let set: UserSet = network::recommend_connections(user, conns, depth)?;
                network::format_users_for_display(&format!("Recommended for {user}"), &set)
            }
        };
        Ok(out)
    }
}

fn parse_index(raw: &str, what: &str) -> ArgResult<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| invalid_argument(format!("{what} must be a non-negative integer, got '{raw}'")))
}

fn require_user(raw: &str) -> ArgResult<&str> {
    if raw.is_empty() {
        Err(invalid_argument("User name cannot be empty"))
    } else {
        Ok(raw)
    }
}

fn yes_no(flag: bool, statement: &str) -> String {
    format!("{}: {statement}", if flag { "Yes" } else { "No" })
}

fn list_or(items: Vec<String>, empty: &str) -> String {
    if items.is_empty() { empty.to_string() } else { items.join(", ") }
}

fn split_cells(raw: &str) -> Vec<String> {
    raw.split(',').map(|c| c.trim().to_string()).collect()
}

/// Parse `name=value; other=value` pairs.
fn parse_variables(raw: &str) -> ArgResult<HashMap<String, String>> {
    let mut vars = HashMap::new();
    for pair in raw.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| invalid_argument(format!("Variable '{pair}' must be written as name=value")))?;
        vars.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(vars)
}
