//! `phishsig extract <url>` – print one feature vector.

use anyhow::Result;
use phishsig_core::config::PhishsigConfig;
use phishsig_core::features::{self, feature_names, FeatureVector};

use crate::cli::VectorFormat;

pub(crate) fn render_vector(vector: &FeatureVector, format: VectorFormat) -> Result<String> {
    Ok(match format {
        VectorFormat::Json => serde_json::to_string_pretty(vector)?,
        VectorFormat::Toml => toml::to_string(vector)?,
        VectorFormat::Csv => format!("{}\n{}", feature_names().join(","), vector.to_csv_row()),
    })
}

pub fn run_extract(cfg: &PhishsigConfig, url: &str, format: VectorFormat) -> Result<()> {
    let vector = match cfg.max_url_len {
        Some(max) => features::extract_bounded(url, max)?,
        None => features::extract(url),
    };
    println!("{}", render_vector(&vector, format)?.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_row() {
        let v = features::extract("https://bit.ly/abc");
        let out = render_vector(&v, VectorFormat::Csv).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("length_url,length_hostname,ip,"));
        assert!(lines.next().unwrap().starts_with("18,6,0,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn toml_lists_every_key() {
        let v = features::extract("http://a.com");
        let out = render_vector(&v, VectorFormat::Toml).unwrap();
        assert!(out.starts_with("length_url = 12\n"), "{out}");
        for name in feature_names() {
            assert!(out.contains(&format!("{name} = ")), "{name}");
        }
    }

    #[test]
    fn json_is_pretty_map() {
        let v = features::extract("http://a.com");
        let out = render_vector(&v, VectorFormat::Json).unwrap();
        assert!(out.starts_with("{\n  \"length_url\": 12,"), "{out}");
    }
}
