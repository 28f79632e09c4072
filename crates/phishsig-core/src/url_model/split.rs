//! Top-level splitting: scheme, authority, path, params, query, fragment.

use super::authority;
use super::ParsedUrl;

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Returns `None` when the authority is structurally invalid.
pub(super) fn split(raw: &str) -> Option<ParsedUrl> {
    let cleaned = clean(raw);
    let (scheme, rest) = split_scheme(&cleaned);

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(|c: char| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            (Some(&after[..end]), &after[end..])
        }
        None => (None, rest),
    };

    let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
    let (rest, query) = rest.split_once('?').unwrap_or((rest, ""));

    let (path, params) = if PARAM_SCHEMES.contains(&scheme.as_str()) {
        split_params(rest)
    } else {
        (rest, "")
    };

    let (host, port) = match netloc {
        Some(netloc) => {
            let authority = authority::parse_authority(netloc)?;
            (authority.host, authority.port)
        }
        None => (None, None),
    };

    Some(ParsedUrl {
        scheme: (!scheme.is_empty()).then_some(scheme),
        host,
        path: path.to_string(),
        params: params.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
        port,
    })
}

/// Strips leading C0 controls and spaces, then drops every tab, CR and LF.
fn clean(raw: &str) -> String {
    raw.trim_start_matches(|c: char| c <= '\u{20}')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect()
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Splits off a lower-cased scheme; the empty string means "no scheme".
fn split_scheme(url: &str) -> (String, &str) {
    if let Some(colon) = url.find(':') {
        let candidate = &url[..colon];
        let starts_alpha = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if starts_alpha && candidate.chars().all(is_scheme_char) {
            return (candidate.to_ascii_lowercase(), &url[colon + 1..]);
        }
    }
    (String::new(), url)
}

/// Splits `;params` off the last path segment.
fn split_params(path: &str) -> (&str, &str) {
    let semi = match path.rfind('/') {
        Some(last_slash) => path[last_slash..].find(';').map(|i| last_slash + i),
        None => path.find(';'),
    };
    match semi {
        Some(i) => (&path[..i], &path[i + 1..]),
        None => (path, ""),
    }
}
