use std::collections::HashSet;
use std::time::Instant;

use anyhow::Result;
use colored::Colorize;
use gallery::prelude::*;

use crate::Layout;

/// Problems found in one category, empty when it is sound.
fn check(entry: &CatalogueEntry, theme: &Theme, width: u32) -> Vec<String> {
    let mut problems = Vec::new();
    let region = build_category(entry.key, entry.display_label, theme);

    let ids = region.identifiers();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    if unique.len() != ids.len() {
        problems.push("duplicate identifiers".to_owned());
    }
    if ids.is_empty() {
        problems.push("no elements".to_owned());
    }

    if let Err(err) = region.finalize(width) {
        problems.push(format!("region: {err}"));
    }
    let page = DetailPage::new(
        entry.display_label,
        build_category(entry.key, entry.display_label, theme),
        theme,
    );
    if let Err(err) = page.finalize(width.saturating_add(40)) {
        problems.push(format!("detail page: {err}"));
    }
    problems
}

pub fn run(layout: &Layout) -> Result<()> {
    let theme = layout.load_theme()?;
    println!();
    println!("{}", "Verifying catalogue regions...".cyan().bold());
    println!();

    let start = Instant::now();
    let mut failed = 0usize;
    for entry in list_categories() {
        let problems = check(entry, &theme, layout.width);
        if problems.is_empty() {
            println!("{}", format!("  ✓ {}", entry.key).green());
        } else {
            failed += 1;
            eprintln!("{}", format!("  ✗ {}", entry.key).red().bold());
            for problem in &problems {
                eprintln!("      {problem}");
            }
        }
    }

    if let Err(err) = CataloguePage::new().finalize(layout.width.saturating_add(40)) {
        failed += 1;
        eprintln!("{}", format!("  ✗ catalogue list: {err}").red().bold());
    }

    println!();
    if failed > 0 {
        anyhow::bail!("{failed} layout(s) failed");
    }
    println!(
        "{}",
        format!(
            "✓ All {} categories verified in {:.2}s",
            list_categories().len(),
            start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_passes() {
        let theme = Theme::default();
        for entry in list_categories() {
            assert_eq!(check(entry, &theme, 350), Vec::<String>::new(), "{}", entry.key);
        }
    }
}
