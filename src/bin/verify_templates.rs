use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use stemtree::templates::{verify_templates, TemplateCatalog};

fn main() -> Result<()> {
    let dir_arg = env::args()
        .nth(1)
        .context("Usage: cargo run --bin verify_templates -- <directory>")?;
    let target_dir = PathBuf::from(dir_arg);
    let drift = verify_templates(&target_dir, TemplateCatalog::all())?;
    if drift.is_empty() {
        println!(
            "{} verified: {} template files match the catalog.",
            target_dir.display(),
            TemplateCatalog::count()
        );
        Ok(())
    } else {
        println!("Template verification failed:");
        for item in &drift {
            println!("  - {}", item.describe());
        }
        anyhow::bail!(
            "Template verification failed ({} files differ)",
            drift.len()
        )
    }
}
