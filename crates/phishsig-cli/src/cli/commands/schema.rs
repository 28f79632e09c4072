//! `phishsig schema` – show the feature schema.

use anyhow::Result;
use phishsig_core::features::{FeatureKey, FeatureKind, SCHEMA_VERSION};
use serde::Serialize;

#[derive(Serialize)]
struct SchemaDoc {
    version: u32,
    columns: Vec<&'static str>,
}

fn kind_label(kind: FeatureKind) -> &'static str {
    match kind {
        FeatureKind::Count => "count",
        FeatureKind::Flag => "flag",
        FeatureKind::Ratio => "ratio",
    }
}

pub fn run_schema(json: bool) -> Result<()> {
    if json {
        let doc = SchemaDoc {
            version: SCHEMA_VERSION,
            columns: FeatureKey::ALL.iter().map(|k| k.name()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("feature schema v{}", SCHEMA_VERSION);
    println!("{:<4} {:<20} {}", "#", "NAME", "KIND");
    for key in FeatureKey::ALL {
        println!("{:<4} {:<20} {}", key.index(), key.name(), kind_label(key.kind()));
    }
    Ok(())
}
