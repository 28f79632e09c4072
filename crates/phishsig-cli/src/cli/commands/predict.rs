//! `phishsig predict <url>` – classify and explain one url.

use anyhow::{anyhow, Result};
use phishsig_core::config::PhishsigConfig;
use phishsig_core::features;
use phishsig_core::model::{Classifier, LinearModel, OcclusionExplainer, Predictor, Verdict};
use std::path::Path;

pub(crate) fn build_predictor(cfg: &PhishsigConfig, model_path: &Path) -> Result<Predictor> {
    let model = LinearModel::load(model_path)?;
    let background = model.background();
    let columns = model.columns().to_vec();
    let predictor = Predictor::new(
        Box::new(model),
        Box::new(OcclusionExplainer),
        background,
        columns,
    )?
    .with_thresholds(cfg.risk_thresholds())
    .with_top_n(cfg.explain_top_n, cfg.signal_top_n);
    Ok(predictor)
}

pub(crate) fn render_verdict(v: &Verdict) -> String {
    let mut out = String::new();
    out.push_str(&format!("URL:         {}\n", v.url));
    out.push_str(&format!(
        "Prediction:  {} (confidence {:.3})\n",
        v.label, v.confidence
    ));
    out.push_str(&format!("Risk level:  {}\n", v.risk));
    if !v.rationale.is_empty() {
        out.push_str("Explanation:\n");
        for line in &v.rationale {
            out.push_str(&format!("  - {line}\n"));
        }
    }
    if !v.signals.is_empty() {
        out.push_str("Top feature signals:\n");
        for s in &v.signals {
            out.push_str(&format!("  {:<20} {}\n", s.name, s.value));
        }
    }
    out
}

pub fn run_predict(
    cfg: &PhishsigConfig,
    url: &str,
    model: Option<&Path>,
    json: bool,
) -> Result<()> {
    let model_path = model
        .or(cfg.model_path.as_deref())
        .ok_or_else(|| anyhow!("no model given: pass --model or set model_path in config.toml"))?;
    if let Some(max) = cfg.max_url_len {
        features::check_len(url, max)?;
    }

    let predictor = build_predictor(cfg, model_path)?;
    let verdict = predictor.predict(url)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", render_verdict(&verdict));
    }
    Ok(())
}
