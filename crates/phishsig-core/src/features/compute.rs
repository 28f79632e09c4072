//! The feature computer: one pure measurement per schema key.

use super::lexical::{
    adjacent_repeats, char_len, count, count_char, has_extension, has_ipv4, has_tld_in_path,
    phish_hints, ratio_digits, uses_shortener, RANDOM_DOMAIN_LEN,
};
use super::schema::FeatureKey;
use super::vector::{FeatureValue, FeatureVector};
use crate::url_model::ParsedUrl;

/// Computes every feature of `url`. Raw-string features read `url` as given;
/// host and path features read `parsed`.
pub fn compute(url: &str, parsed: &ParsedUrl) -> FeatureVector {
    use FeatureValue::{Count, Flag, Ratio};

    let host = parsed.hostname();
    let path = parsed.path.as_str();
    let lowered = url.to_lowercase();
    let host_len = char_len(host);

    FeatureVector::from_fn(|key| match key {
        FeatureKey::LengthUrl => Count(char_len(url)),
        FeatureKey::LengthHostname => Count(host_len),
        FeatureKey::Ip => Flag(has_ipv4(host)),
        FeatureKey::NbDots => Count(count_char(url, '.')),
        FeatureKey::NbHyphens => Count(count_char(url, '-')),
        FeatureKey::NbAt => Count(count_char(url, '@')),
        FeatureKey::NbQm => Count(count_char(url, '?')),
        FeatureKey::NbAnd => Count(count_char(url, '&')),
        FeatureKey::NbEq => Count(count_char(url, '=')),
        FeatureKey::NbUnderscore => Count(count_char(url, '_')),
        FeatureKey::NbSlash => Count(count_char(url, '/')),
        FeatureKey::NbPercent => Count(count_char(url, '%')),
        FeatureKey::NbColon => Count(count_char(url, ':')),
        FeatureKey::NbWww => Flag(lowered.contains("www")),
        FeatureKey::NbCom => Flag(lowered.contains(".com")),
        FeatureKey::NbDslash => Count(count(url, "//")),
        FeatureKey::HttpsToken => Flag(lowered.contains("https")),
        FeatureKey::RatioDigitsUrl => Ratio(ratio_digits(url)),
        FeatureKey::RatioDigitsHost => Ratio(ratio_digits(host)),
        FeatureKey::Punycode => Flag(host.contains("xn--")),
        FeatureKey::Port => Flag(parsed.port.is_some()),
        FeatureKey::TldInPath => Flag(has_tld_in_path(path)),
        FeatureKey::TldInSubdomain => Flag(count_char(host, '.') > 2),
        FeatureKey::AbnormalSubdomain => Flag(host.starts_with("http")),
        FeatureKey::NbSubdomains => Count(count_char(host, '.')),
        FeatureKey::PrefixSuffix => Flag(host.contains('-')),
        FeatureKey::RandomDomain => Flag(host_len > RANDOM_DOMAIN_LEN),
        FeatureKey::ShorteningService => Flag(uses_shortener(url)),
        FeatureKey::PathExtension => Flag(has_extension(path)),
        FeatureKey::CharRepeat => Count(adjacent_repeats(url)),
        FeatureKey::PhishHints => Count(phish_hints(&lowered)),
    })
}
