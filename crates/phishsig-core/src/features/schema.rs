//! The versioned feature schema: key names and their order.
//!
//! The order of [`FeatureKey::ALL`] is the column order the classifier was
//! trained on. Renaming, reordering, adding or removing a key requires
//! bumping [`SCHEMA_VERSION`].

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::FeatureError;

pub const SCHEMA_VERSION: u32 = 1;

/// How a feature's value is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Count,
    Flag,
    Ratio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureKey {
    LengthUrl,
    LengthHostname,
    Ip,
    NbDots,
    NbHyphens,
    NbAt,
    NbQm,
    NbAnd,
    NbEq,
    NbUnderscore,
    NbSlash,
    NbPercent,
    NbColon,
    NbWww,
    NbCom,
    NbDslash,
    HttpsToken,
    RatioDigitsUrl,
    RatioDigitsHost,
    Punycode,
    Port,
    TldInPath,
    TldInSubdomain,
    AbnormalSubdomain,
    NbSubdomains,
    PrefixSuffix,
    RandomDomain,
    ShorteningService,
    PathExtension,
    CharRepeat,
    PhishHints,
}

impl FeatureKey {
    pub const COUNT: usize = 31;

    /// Every key, in schema order.
    pub const ALL: [FeatureKey; FeatureKey::COUNT] = [
        FeatureKey::LengthUrl,
        FeatureKey::LengthHostname,
        FeatureKey::Ip,
        FeatureKey::NbDots,
        FeatureKey::NbHyphens,
        FeatureKey::NbAt,
        FeatureKey::NbQm,
        FeatureKey::NbAnd,
        FeatureKey::NbEq,
        FeatureKey::NbUnderscore,
        FeatureKey::NbSlash,
        FeatureKey::NbPercent,
        FeatureKey::NbColon,
        FeatureKey::NbWww,
        FeatureKey::NbCom,
        FeatureKey::NbDslash,
        FeatureKey::HttpsToken,
        FeatureKey::RatioDigitsUrl,
        FeatureKey::RatioDigitsHost,
        FeatureKey::Punycode,
        FeatureKey::Port,
        FeatureKey::TldInPath,
        FeatureKey::TldInSubdomain,
        FeatureKey::AbnormalSubdomain,
        FeatureKey::NbSubdomains,
        FeatureKey::PrefixSuffix,
        FeatureKey::RandomDomain,
        FeatureKey::ShorteningService,
        FeatureKey::PathExtension,
        FeatureKey::CharRepeat,
        FeatureKey::PhishHints,
    ];

    /// Column name as it appears in the training data.
    pub fn name(self) -> &'static str {
        match self {
            FeatureKey::LengthUrl => "length_url",
            FeatureKey::LengthHostname => "length_hostname",
            FeatureKey::Ip => "ip",
            FeatureKey::NbDots => "nb_dots",
            FeatureKey::NbHyphens => "nb_hyphens",
            FeatureKey::NbAt => "nb_at",
            FeatureKey::NbQm => "nb_qm",
            FeatureKey::NbAnd => "nb_and",
            FeatureKey::NbEq => "nb_eq",
            FeatureKey::NbUnderscore => "nb_underscore",
            FeatureKey::NbSlash => "nb_slash",
            FeatureKey::NbPercent => "nb_percent",
            FeatureKey::NbColon => "nb_colon",
            FeatureKey::NbWww => "nb_www",
            FeatureKey::NbCom => "nb_com",
            FeatureKey::NbDslash => "nb_dslash",
            FeatureKey::HttpsToken => "https_token",
            FeatureKey::RatioDigitsUrl => "ratio_digits_url",
            FeatureKey::RatioDigitsHost => "ratio_digits_host",
            FeatureKey::Punycode => "punycode",
            FeatureKey::Port => "port",
            FeatureKey::TldInPath => "tld_in_path",
            FeatureKey::TldInSubdomain => "tld_in_subdomain",
            FeatureKey::AbnormalSubdomain => "abnormal_subdomain",
            FeatureKey::NbSubdomains => "nb_subdomains",
            FeatureKey::PrefixSuffix => "prefix_suffix",
            FeatureKey::RandomDomain => "random_domain",
            FeatureKey::ShorteningService => "shortening_service",
            FeatureKey::PathExtension => "path_extension",
            FeatureKey::CharRepeat => "char_repeat",
            FeatureKey::PhishHints => "phish_hints",
        }
    }

    pub fn kind(self) -> FeatureKind {
        match self {
            FeatureKey::RatioDigitsUrl | FeatureKey::RatioDigitsHost => FeatureKind::Ratio,
            FeatureKey::Ip
            | FeatureKey::NbWww
            | FeatureKey::NbCom
            | FeatureKey::HttpsToken
            | FeatureKey::Punycode
            | FeatureKey::Port
            | FeatureKey::TldInPath
            | FeatureKey::TldInSubdomain
            | FeatureKey::AbnormalSubdomain
            | FeatureKey::PrefixSuffix
            | FeatureKey::RandomDomain
            | FeatureKey::ShorteningService
            | FeatureKey::PathExtension => FeatureKind::Flag,
            _ => FeatureKind::Count,
        }
    }

    /// Position of this key in schema order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<FeatureKey> {
        FeatureKey::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeatureKey {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureKey::from_name(s).ok_or_else(|| FeatureError::schema_mismatch(s))
    }
}

impl Serialize for FeatureKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Column names in schema order.
pub fn feature_names() -> Vec<&'static str> {
    FeatureKey::ALL.iter().map(|k| k.name()).collect()
}
