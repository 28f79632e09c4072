//! Lexical predicates over raw strings.

use std::sync::OnceLock;

use regex::Regex;

pub(super) const SHORTENERS: &[&str] = &["bit.ly", "tinyurl", "goo.gl", "t.co"];

pub(super) const PHISH_KEYWORDS: &[&str] = &[
    "login", "secure", "verify", "update", "account", "bank", "free", "signin",
];

pub(super) const PATH_TLDS: &[&str] = &[".com", ".net", ".org"];

/// Hosts longer than this are flagged as random-looking.
pub(super) const RANDOM_DOMAIN_LEN: u64 = 25;

fn ipv4_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{1,3}(\.\d{1,3}){3}\b").expect("valid ipv4 regex"))
}

fn extension_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\w+$").expect("valid extension regex"))
}

/// Length in Unicode scalar values.
pub(super) fn char_len(s: &str) -> u64 {
    s.chars().count() as u64
}

/// Non-overlapping occurrences of `pat`.
pub(super) fn count(s: &str, pat: &str) -> u64 {
    s.matches(pat).count() as u64
}

pub(super) fn count_char(s: &str, c: char) -> u64 {
    s.chars().filter(|&x| x == c).count() as u64
}

/// Share of ASCII digits among all characters; 0 for the empty string.
pub(super) fn ratio_digits(s: &str) -> f64 {
    let (digits, total) = s.chars().fold((0u64, 0u64), |(d, t), c| {
        (d + u64::from(c.is_ascii_digit()), t + 1)
    });
    if total == 0 {
        0.0
    } else {
        digits as f64 / total as f64
    }
}

/// Number of positions whose character equals the next one.
pub(super) fn adjacent_repeats(s: &str) -> u64 {
    s.chars()
        .zip(s.chars().skip(1))
        .filter(|(a, b)| a == b)
        .count() as u64
}

/// Number of distinct phishing keywords present in an already lower-cased url.
pub(super) fn phish_hints(lowered: &str) -> u64 {
    PHISH_KEYWORDS
        .iter()
        .filter(|k| lowered.contains(*k))
        .count() as u64
}

pub(super) fn uses_shortener(url: &str) -> bool {
    SHORTENERS.iter().any(|s| url.contains(s))
}

pub(super) fn has_ipv4(host: &str) -> bool {
    ipv4_pattern().is_match(host)
}

pub(super) fn has_tld_in_path(path: &str) -> bool {
    PATH_TLDS.iter().any(|t| path.contains(t))
}

pub(super) fn has_extension(path: &str) -> bool {
    extension_pattern().is_match(path)
}
