use anyhow::Result;
use colored::Colorize;
use gallery::prelude::list_categories;

pub fn run() -> Result<()> {
    println!();
    println!("{}", "Catalogue categories".cyan().bold());
    println!();
    for (index, entry) in list_categories().iter().enumerate() {
        println!(
            "  {:>2}  {:<22} {}",
            index,
            entry.key.as_str().green(),
            entry.display_label
        );
    }
    println!();
    Ok(())
}
