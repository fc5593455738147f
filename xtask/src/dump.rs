use anyhow::{Context, Result};
use gallery::prelude::*;

use crate::Layout;

/// Display label for `key`, or the key itself for unknown categories.
pub fn label_for(key: &str) -> String {
    key.parse::<CategoryKey>()
        .ok()
        .and_then(find_entry)
        .map_or_else(|| key.to_owned(), |entry| entry.display_label.to_owned())
}

pub fn run(key: &str, page: bool, layout: &Layout) -> Result<()> {
    let theme = layout.load_theme()?;
    let label = label_for(key);
    let region = build_region_with(key, &label, &theme);
    let done = if page {
        DetailPage::new(&label, region, &theme).finalize(layout.width)
    } else {
        region.finalize(layout.width)
    }
    .with_context(|| format!("Layout of '{key}' failed"))?;

    tracing::info!(key, height = done.height(), "region finalized");
    let json = RegionSnapshot::capture(&done)
        .to_json()
        .context("Failed to serialise snapshot")?;
    println!("{json}");
    Ok(())
}
