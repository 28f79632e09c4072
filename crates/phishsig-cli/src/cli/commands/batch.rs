//! `phishsig batch <file>` – extract features for many urls in parallel.

use anyhow::{Context, Result};
use phishsig_core::config::PhishsigConfig;
use phishsig_core::features::{self, feature_names, FeatureVector};
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Read, Write};

use crate::cli::BatchFormat;

#[derive(Serialize)]
struct JsonlRow<'a> {
    url: &'a str,
    features: &'a FeatureVector,
}

fn read_input(path: &str) -> Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf).context("read stdin")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("read {path}"))
    }
}

/// Splits input into urls, one per line. Blank lines are skipped; invalid
/// UTF-8 or an over-long url fails the whole batch.
pub(crate) fn url_lines(data: &[u8], max_len: Option<usize>) -> Result<Vec<&str>> {
    let mut urls = Vec::new();
    for (i, line) in data.split(|&b| b == b'\n').enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let url = features::decode_url(line).with_context(|| format!("line {}", i + 1))?;
        if url.trim().is_empty() {
            continue;
        }
        if let Some(max) = max_len {
            features::check_len(url, max).with_context(|| format!("line {}", i + 1))?;
        }
        urls.push(url);
    }
    Ok(urls)
}

pub(crate) fn write_batch<W: Write>(
    out: &mut W,
    urls: &[&str],
    vectors: &[FeatureVector],
    format: BatchFormat,
) -> Result<()> {
    match format {
        BatchFormat::Csv => {
            writeln!(out, "{}", feature_names().join(","))?;
            for v in vectors {
                writeln!(out, "{}", v.to_csv_row())?;
            }
        }
        BatchFormat::Jsonl => {
            for (url, vector) in urls.iter().copied().zip(vectors) {
                let row = JsonlRow {
                    url,
                    features: vector,
                };
                serde_json::to_writer(&mut *out, &row)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

pub fn run_batch(cfg: &PhishsigConfig, path: &str, format: BatchFormat) -> Result<()> {
    let data = read_input(path)?;
    let urls = url_lines(&data, cfg.max_url_len)?;
    let vectors = features::extract_batch(&urls);
    tracing::info!(count = urls.len(), "batch extraction from {}", path);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_batch(&mut out, &urls, &vectors, format)?;
    out.flush()?;
    Ok(())
}
