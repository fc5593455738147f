use std::path::Path;

use anyhow::{Context, Result};
use catalogue_testing::TestScreen;
use colored::Colorize;
use gallery::prelude::*;

use crate::{dump::label_for, Layout};

pub fn run(key: &str, out: &Path, layout: &Layout) -> Result<()> {
    let theme = layout.load_theme()?;
    let label = label_for(key);
    let done = build_region_with(key, &label, &theme)
        .finalize(layout.width)
        .with_context(|| format!("Layout of '{key}' failed"))?;

    let mut screen =
        TestScreen::with_background(layout.width, done.height(), theme.palette.background);
    render(&done, &mut screen).unwrap_or_else(|never| match never {});
    for placement in placements(&done) {
        screen.register_bounds(placement.identifier, placement.kind, placement.bounds);
    }

    screen
        .screenshot(out)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "{}",
        format!(
            "  ✓ {} ({} elements, {}x{}) → {}",
            key,
            screen.component_count(),
            layout.width,
            done.height(),
            out.display()
        )
        .green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_for_known_and_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout {
            theme: None,
            width: 350,
        };
        for key in ["toolbar", "not-a-category"] {
            let out = dir.path().join(format!("{key}.png"));
            run(key, &out, &layout).unwrap();
            let written = std::fs::metadata(&out).unwrap();
            assert!(written.len() > 0);
        }
    }

    #[test]
    fn theme_file_overrides_padding() {
        let dir = tempfile::tempdir().unwrap();
        let theme = dir.path().join("theme.json");
        std::fs::write(&theme, r#"{ "metrics": { "padding": 10 } }"#).unwrap();
        let layout = Layout {
            theme: Some(theme),
            width: 350,
        };
        assert_eq!(layout.load_theme().unwrap().metrics.padding, 10);
        run("page-indicator", &dir.path().join("dots.png"), &layout).unwrap();
    }

    #[test]
    fn missing_theme_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout {
            theme: Some(dir.path().join("absent.json")),
            width: 350,
        };
        let err = run("button", &dir.path().join("b.png"), &layout).unwrap_err();
        assert!(err.to_string().contains("Failed to read theme"));
    }
}
