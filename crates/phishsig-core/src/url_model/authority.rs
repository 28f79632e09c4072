//! Authority (`userinfo@host:port`) handling.

use std::net::Ipv6Addr;

#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct Authority {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Extracts host and port from a netloc. Returns `None` when brackets are
/// unbalanced or the bracketed host is neither IPv6 nor IPvFuture.
pub(super) fn parse_authority(netloc: &str) -> Option<Authority> {
    let has_open = netloc.contains('[');
    let has_close = netloc.contains(']');
    if has_open != has_close {
        return None;
    }
    if has_open {
        let bracketed = partition(partition(netloc, '[').1, ']').0;
        if !is_valid_bracketed_host(bracketed) {
            return None;
        }
    }

    let hostinfo = match netloc.rfind('@') {
        Some(at) => &netloc[at + 1..],
        None => netloc,
    };

    let (raw_host, raw_port) = match hostinfo.split_once('[') {
        Some((_, bracketed)) => {
            let (host, after) = partition(bracketed, ']');
            (host, partition(after, ':').1)
        }
        None => partition(hostinfo, ':'),
    };

    Some(Authority {
        host: normalize_host(raw_host),
        port: parse_port(raw_port),
    })
}

/// Like `split_once`, but a missing separator yields `(s, "")`.
fn partition(s: &str, sep: char) -> (&str, &str) {
    s.split_once(sep).unwrap_or((s, ""))
}

/// Lower-cases everything before an IPv6 zone separator.
fn normalize_host(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    Some(match raw.split_once('%') {
        Some((addr, zone)) => format!("{}%{}", addr.to_lowercase(), zone),
        None => raw.to_lowercase(),
    })
}

fn parse_port(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn is_valid_bracketed_host(host: &str) -> bool {
    if let Some(future) = host.strip_prefix('v') {
        return match future.split_once('.') {
            Some((version, rest)) => {
                !version.is_empty()
                    && version.bytes().all(|b| b.is_ascii_hexdigit())
                    && !rest.is_empty()
            }
            None => false,
        };
    }
    let addr = partition(host, '%').0;
    addr.parse::<Ipv6Addr>().is_ok()
}
