//! URL modeling: a tolerant, purely syntactic splitter.
//!
//! Splits a raw string into scheme, host, path, params, query, fragment and
//! port the way the feature columns were defined at training time. No
//! normalisation beyond lower-casing the scheme and host, no percent
//! decoding, no IDNA mapping, and never any DNS or network access.

mod authority;
mod split;

/// Components of one URL, owned by a single extraction call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lower-cased scheme, if one was recognised.
    pub scheme: Option<String>,
    /// Lower-cased hostname without userinfo, port or IPv6 brackets.
    pub host: Option<String>,
    /// Path up to (not including) the params, query and fragment.
    pub path: String,
    /// `;`-suffix of the last path segment, for schemes that use params.
    pub params: String,
    /// Raw, undecoded query string.
    pub query: String,
    /// Raw fragment.
    pub fragment: String,
    /// Explicit port, only when the authority carries a valid `:<digits>`.
    pub port: Option<u16>,
}

impl ParsedUrl {
    /// Hostname, or the empty string when none was identified.
    pub fn hostname(&self) -> &str {
        self.host.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        *self == ParsedUrl::default()
    }
}

/// Parses `url` into its components. Total: malformed input (for example an
/// unbalanced IPv6 bracket) yields an all-empty `ParsedUrl`.
pub fn parse(url: &str) -> ParsedUrl {
    match split::split(url) {
        Some(parsed) => parsed,
        None => {
            tracing::trace!(url, "malformed url, using empty components");
            ParsedUrl::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let p = parse("https://user:pw@Example.COM:8443/a/b.html;v=1?q=1&r=2#top");
        assert_eq!(p.scheme.as_deref(), Some("https"));
        assert_eq!(p.host.as_deref(), Some("example.com"));
        assert_eq!(p.port, Some(8443));
        assert_eq!(p.path, "/a/b.html");
        assert_eq!(p.params, "v=1");
        assert_eq!(p.query, "q=1&r=2");
        assert_eq!(p.fragment, "top");
    }

    #[test]
    fn missing_scheme_is_all_path() {
        let p = parse("example.com/login");
        assert_eq!(p.scheme, None);
        assert_eq!(p.host, None);
        assert_eq!(p.hostname(), "");
        assert_eq!(p.path, "example.com/login");
    }

    #[test]
    fn scheme_relative_authority() {
        let p = parse("//cdn.example.org/x.js");
        assert_eq!(p.scheme, None);
        assert_eq!(p.host.as_deref(), Some("cdn.example.org"));
        assert_eq!(p.path, "/x.js");
    }

    #[test]
    fn host_port_without_slashes_reads_as_scheme() {
        let p = parse("localhost:8080/x");
        assert_eq!(p.scheme.as_deref(), Some("localhost"));
        assert_eq!(p.host, None);
        assert_eq!(p.port, None);
        assert_eq!(p.path, "8080/x");
    }

    #[test]
    fn empty_string() {
        let p = parse("");
        assert!(p.is_empty());
        assert_eq!(p.hostname(), "");
    }

    #[test]
    fn ipv6_literal() {
        let p = parse("http://[2001:DB8::1]:8080/path");
        assert_eq!(p.host.as_deref(), Some("2001:db8::1"));
        assert_eq!(p.port, Some(8080));
        assert_eq!(p.path, "/path");
    }

    #[test]
    fn ipv6_with_zone_keeps_zone_case() {
        let p = parse("http://[FE80::1%Eth0]/");
        assert_eq!(p.host.as_deref(), Some("fe80::1%Eth0"));
    }

    #[test]
    fn unbalanced_bracket_is_empty() {
        assert!(parse("http://[::1/path").is_empty());
        assert!(parse("http://::1]/path").is_empty());
    }

    #[test]
    fn bracketed_ipv4_is_empty() {
        assert!(parse("http://[192.168.0.1]/").is_empty());
        assert!(parse("http://[not-an-ip]/").is_empty());
    }

    #[test]
    fn ipvfuture_literal_accepted() {
        let p = parse("http://[v1.fe80::a+en1]/");
        assert_eq!(p.host.as_deref(), Some("v1.fe80::a+en1"));
    }

    #[test]
    fn invalid_ports_are_absent() {
        assert_eq!(parse("http://a.com:99999/").port, None);
        assert_eq!(parse("http://a.com:80x/").port, None);
        assert_eq!(parse("http://a.com:/").port, None);
        assert_eq!(parse("http://a.com:-1/").port, None);
        assert_eq!(parse("http://a.com:0/").port, Some(0));
    }

    #[test]
    fn port_split_at_first_colon() {
        let p = parse("http://a.com:80:90/");
        assert_eq!(p.host.as_deref(), Some("a.com"));
        assert_eq!(p.port, None);
    }

    #[test]
    fn userinfo_uses_last_at() {
        let p = parse("http://paypal.com@evil.example@attacker.net/");
        assert_eq!(p.host.as_deref(), Some("attacker.net"));
    }

    #[test]
    fn whitespace_and_controls_removed_before_split() {
        let p = parse("  \thttp://exa\nmple.com/a\r\nb");
        assert_eq!(p.scheme.as_deref(), Some("http"));
        assert_eq!(p.host.as_deref(), Some("example.com"));
        assert_eq!(p.path, "/ab");
    }

    #[test]
    fn malformed_percent_encoding_is_untouched() {
        let p = parse("http://a.com/%zz%4?x=%");
        assert_eq!(p.path, "/%zz%4");
        assert_eq!(p.query, "x=%");
    }

    #[test]
    fn duplicate_slashes_preserved() {
        let p = parse("http://a.com//x//y/");
        assert_eq!(p.path, "//x//y/");
    }

    #[test]
    fn unicode_host_lowercased_not_encoded() {
        let p = parse("http://BÜCHER.example/");
        assert_eq!(p.host.as_deref(), Some("bücher.example"));
    }

    #[test]
    fn params_only_for_param_schemes() {
        assert_eq!(parse("http://a.com/x;y").params, "y");
        let p = parse("mailto:a;b");
        assert_eq!(p.path, "a;b");
        assert_eq!(p.params, "");
    }

    #[test]
    fn params_split_in_last_segment_only() {
        let p = parse("http://a.com/a;x/b");
        assert_eq!(p.path, "/a;x/b");
        assert_eq!(p.params, "");
    }

    #[test]
    fn fragment_before_query() {
        let p = parse("http://a.com/p#frag?notquery");
        assert_eq!(p.query, "");
        assert_eq!(p.fragment, "frag?notquery");
    }
}
