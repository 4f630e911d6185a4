//! `gradebook subjects`: list the catalog.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use gradebook::catalog::Catalog;
use gradebook::config::Config;
use gradebook::ui;

pub fn cmd_subjects(config: &Config, catalog: Option<&PathBuf>) -> Result<()> {
    let path = catalog.unwrap_or(&config.catalog);
    let catalog = Catalog::load(path)?;

    if !ui::is_quiet() {
        println!(
            "{} {}",
            format!("{} subjects in", catalog.len()).bold(),
            path.display()
        );
    }
    for (i, subject) in catalog.subjects().iter().enumerate() {
        println!("{:>3}. {}", i + 1, subject);
    }
    Ok(())
}
