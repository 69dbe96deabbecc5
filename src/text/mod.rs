//! Stateless text operations.
//!
//! Every function borrows its input and returns a freshly built value.
//! Positions and lengths are counted in `char`s so that slicing never
//! lands inside a multi-byte character.
//!
//! - Counting, slicing, searching and replacing live here.
//! - Token scanning for emails and dates lives in [`extract`].
//! - CSV splitting, templates and tables live in [`format`].
pub mod extract;
pub mod format;

use crate::error::{ArgResult, invalid_argument};

pub use extract::{extract_dates, extract_email_addresses};
pub use format::{format_text_table, format_text_with_variables, parse_csv_line};

/// Number of characters in `text`.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Number of whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Characters in `[start, end)`.
///
/// Fails unless `start <= end <= count_characters(text)`.
pub fn extract_substring(text: &str, start: usize, end: usize) -> ArgResult<String> {
    let len = count_characters(text);
    if start > len {
        return Err(invalid_argument(format!(
            "Start index {start} out of range (length {len})"
        )));
    }
    if end > len {
        return Err(invalid_argument(format!(
            "End index {end} out of range (length {len})"
        )));
    }
    if start > end {
        return Err(invalid_argument(
            "Start index must be less than or equal to end index",
        ));
    }
    Ok(text.chars().skip(start).take(end - start).collect())
}

/// Start positions of every occurrence of `pattern`, overlapping ones included.
pub fn find_all_occurrences(text: &str, pattern: &str) -> ArgResult<Vec<usize>> {
    if pattern.is_empty() {
        return Err(invalid_argument("Substring cannot be empty"));
    }
    let mut positions = Vec::new();
    let mut byte_start = 0;
    let mut char_pos = 0;
    while let Some(found) = text[byte_start..].find(pattern) {
        let at = byte_start + found;
        char_pos += text[byte_start..at].chars().count();
        positions.push(char_pos);
        // resume one char past the match start
        let step = text[at..].chars().next().map_or(1, char::len_utf8);
        byte_start = at + step;
        char_pos += 1;
    }
    Ok(positions)
}

/// Replace every occurrence of `old` with `new`.
pub fn replace_substring(text: &str, old: &str, new: &str) -> ArgResult<String> {
    if old.is_empty() {
        return Err(invalid_argument("Old substring cannot be empty"));
    }
    Ok(text.replace(old, new))
}

/// Split on runs of whitespace (`None`) or on an exact delimiter.
///
/// With an explicit delimiter empty fields are kept, so splitting `""`
/// yields a single empty part.
pub fn split_text(text: &str, delimiter: Option<&str>) -> ArgResult<Vec<String>> {
    match delimiter {
        None => Ok(text.split_whitespace().map(str::to_string).collect()),
        Some("") => Err(invalid_argument("Delimiter cannot be empty")),
        Some(d) => Ok(text.split(d).map(str::to_string).collect()),
    }
}

pub fn join_text<S: AsRef<str>>(parts: &[S], delimiter: &str) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(part.as_ref());
    }
    out
}

pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Title case: the first letter of each run of letters is uppercased, the rest lowercased.
pub fn capitalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub fn strip_whitespace(text: &str) -> String {
    text.trim().to_string()
}

/// Whether `text` reads the same both ways, ignoring case and non-alphanumerics.
///
/// Empty input is a palindrome; input made only of punctuation is not.
pub fn is_palindrome(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if cleaned.is_empty() {
        return false;
    }
    cleaned.iter().eq(cleaned.iter().rev())
}

/// `(vowels, consonants)` among the alphabetic characters of `text`.
pub fn count_vowels_and_consonants(text: &str) -> (usize, usize) {
    let mut vowels = 0;
    let mut consonants = 0;
    for c in text.chars().flat_map(char::to_lowercase).filter(|c| c.is_alphabetic()) {
        if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') {
            vowels += 1;
        } else {
            consonants += 1;
        }
    }
    (vowels, consonants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chars_and_words() {
        let sample = "Hello, World! How are you today?";
        assert_eq!(count_characters(sample), 32);
        assert_eq!(count_words(sample), 6);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("  word  another\t\tword\nyet\r\nanother"), 5);
        assert_eq!(count_characters("héllo"), 5);
    }

    #[test]
    fn substring_bounds() {
        assert_eq!(extract_substring("Hello, World!", 7, 12).unwrap(), "World");
        assert_eq!(extract_substring("boundary", 7, 8).unwrap(), "y");
        assert_eq!(extract_substring("test", 2, 2).unwrap(), "");
        assert_eq!(extract_substring("test", 4, 4).unwrap(), "");
        assert!(extract_substring("test", 0, 10).is_err());
        assert!(extract_substring("test", 3, 1).is_err());
        assert!(extract_substring("hello", 10, 15).is_err());
    }

    #[test]
    fn substring_length_matches_bounds() {
        let text = "naïve café déjà vu";
        let len = count_characters(text);
        for i in 0..=len {
            for j in i..=len {
                let s = extract_substring(text, i, j).unwrap();
                assert_eq!(count_characters(&s), j - i);
            }
        }
    }

    #[test]
    fn finds_overlapping_occurrences() {
        assert_eq!(find_all_occurrences("banana", "a").unwrap(), vec![1, 3, 5]);
        assert_eq!(find_all_occurrences("aaa", "a").unwrap(), vec![0, 1, 2]);
        assert_eq!(find_all_occurrences("aaaa", "aa").unwrap(), vec![0, 1, 2]);
        assert_eq!(find_all_occurrences("héhé", "é").unwrap(), vec![1, 3]);
        assert!(find_all_occurrences("hello", "x").unwrap().is_empty());
        assert!(find_all_occurrences("test", "").is_err());
    }

    #[test]
    fn replace_rejects_empty_pattern() {
        assert_eq!(replace_substring("apple apple", "apple", "orange").unwrap(), "orange orange");
        assert_eq!(replace_substring("hello", "hello", "").unwrap(), "");
        assert!(replace_substring("test", "", "x").is_err());
    }

    #[test]
    fn split_and_join() {
        assert_eq!(split_text("a,b,c", Some(",")).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(split_text("hello world", None).unwrap().len(), 2);
        assert_eq!(split_text("", Some(",")).unwrap(), vec![""]);
        assert!(split_text("", None).unwrap().is_empty());
        assert!(split_text("abc", Some("")).is_err());

        assert_eq!(join_text(&["a", "b", "c"], ","), "a,b,c");
        assert_eq!(join_text(&["hello", "world"], ""), "helloworld");
        assert_eq!(join_text::<&str>(&[], ","), "");
        assert_eq!(join_text(&["single"], ","), "single");
    }

    #[test]
    fn case_transforms() {
        let original = String::from("hello world");
        assert_eq!(to_uppercase(&original), "HELLO WORLD");
        assert_eq!(original, "hello world");
        assert_eq!(to_lowercase("HELLO"), "hello");
        assert_eq!(to_uppercase(&to_uppercase("MiXeD")), to_uppercase("MiXeD"));
        assert_eq!(capitalize_text("hello world"), "Hello World");
        assert_eq!(capitalize_text("ThIs TeXt"), "This Text");
        assert_eq!(capitalize_text("abc123def"), "Abc123Def");
        assert_eq!(strip_whitespace("  hello  "), "hello");
        assert_eq!(strip_whitespace("   "), "");
    }

    #[test]
    fn palindromes() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("radar"));
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome(".,"));
    }

    #[test]
    fn vowels_and_consonants() {
        assert_eq!(count_vowels_and_consonants("hello"), (2, 3));
        assert_eq!(count_vowels_and_consonants(""), (0, 0));
        assert_eq!(count_vowels_and_consonants("AEIOU xyz 123!"), (5, 3));
    }

    #[test]
    fn vowels_count_after_lowercasing() {
        // 'İ' lowercases to 'i' followed by a combining dot, which is not a letter
        assert_eq!(count_vowels_and_consonants("İ"), (1, 0));
        assert_eq!(count_vowels_and_consonants("İSTANBUL"), (3, 5));
    }
}
