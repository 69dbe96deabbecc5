//! Pattern extraction by manual token scanning.
//!
//! Text is split on whitespace and each token is trimmed of surrounding
//! punctuation before it is checked. No regular expressions are involved.

/// Punctuation stripped from both ends of a token before it is inspected.
const TOKEN_TRIM: &[char] = &[',', '.', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}'];

fn clean_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().map(|w| w.trim_matches(TOKEN_TRIM))
}

/// Email-looking tokens in order of appearance.
///
/// A token qualifies when it has exactly one `@`, a non-empty local part,
/// and a domain with at least one dot and no empty labels.
pub fn extract_email_addresses(text: &str) -> Vec<String> {
    clean_tokens(text)
        .filter(|token| is_email(token))
        .map(str::to_string)
        .collect()
}

fn is_email(token: &str) -> bool {
    let mut parts = token.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// `YYYY-MM-DD` tokens with a plausible month (1-12) and day (1-31).
///
/// There is no calendar validation: `2023-02-31` is accepted.
pub fn extract_dates(text: &str) -> Vec<String> {
    clean_tokens(text)
        .filter(|token| is_date(token))
        .map(str::to_string)
        .collect()
}

fn is_date(token: &str) -> bool {
    let b = token.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return false;
    }
    let (Some(_year), Some(month), Some(day)) = (
        parse_digits(&b[0..4]),
        parse_digits(&b[5..7]),
        parse_digits(&b[8..10]),
    ) else {
        return false;
    };
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
