//! CSV splitting, template substitution and fixed-width tables.
use std::collections::HashMap;

use crate::error::{ArgResult, invalid_argument};

/// Split a CSV line on commas. Quoting is not interpreted.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Substitute `{name}` placeholders from `variables`.
///
/// `{{` and `}}` produce literal braces. A placeholder naming a missing
/// variable, an empty `{}` or an unbalanced brace is rejected.
pub fn format_text_with_variables(
    template: &str,
    variables: &HashMap<String, String>,
) -> ArgResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    if n == '{' {
                        return Err(invalid_argument("Unexpected '{' inside placeholder"));
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(invalid_argument("Unclosed '{' in template"));
                }
                let key = name.trim();
                if key.is_empty() {
                    return Err(invalid_argument("Empty placeholder '{}' in template"));
                }
                match variables.get(key) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(invalid_argument(format!("Missing required variable: '{key}'")));
                    }
                }
            }
            '}' => return Err(invalid_argument("Single '}' encountered in template")),
            other => out.push(other),
        }
    }
    Ok(out)
}

/// Render `headers` and `rows` as a left-justified text table.
///
/// ```text
/// Name  | Age
/// ------+----
/// John  | 30
/// ```
///
/// Every row must have exactly as many cells as there are headers.
pub fn format_text_table<H, C>(headers: &[H], rows: &[Vec<C>]) -> ArgResult<String>
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    for row in rows {
        if row.len() != headers.len() {
            return Err(invalid_argument(format!(
                "Row length {} doesn't match header length {}",
                row.len(),
                headers.len()
            )));
        }
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.as_ref().chars().count());
        }
    }

    let header_line = render_row(headers.iter().map(|h| h.as_ref()), &widths);
    let separator = widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join("-+-");
    let data_lines = rows
        .iter()
        .map(|row| render_row(row.iter().map(|c| c.as_ref()), &widths))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("{header_line}\n{separator}\n{data_lines}"))
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
