use std::{env, fs};

use anyhow::{anyhow, Context, Result};
use stemtree::workspace::{AppConfig, Workspace};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let mut workspace = Workspace::open()?;
    let mut changed = config_file_missing(&workspace.config_path);

    changed |= apply_overrides(&mut workspace.config, &args);

    if changed {
        workspace.save_config()?;
        println!(
            "stemtree settings recorded at {}",
            workspace.config_path.display()
        );
    } else {
        println!("stemtree settings already configured.");
    }

    Ok(())
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    prefix_width: Option<usize>,
    separator: Option<String>,
    raw_root_label: bool,
    no_history: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::from_args(env::args().skip(1))
    }

    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--prefix-width" => {
                    let value = args
                        .next()
                        .context("Expected a digit count after --prefix-width")?;
                    let width = value
                        .parse()
                        .with_context(|| format!("Invalid prefix width '{value}'"))?;
                    parsed.prefix_width = Some(width);
                }
                "--separator" => {
                    let value = args.next().context("Expected text after --separator")?;
                    parsed.separator = Some(value);
                }
                "--raw-root-label" => parsed.raw_root_label = true,
                "--no-history" => parsed.no_history = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(parsed)
    }
}

fn print_usage() {
    println!("stemtree setup");
    println!("Records directory naming and history preferences in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --prefix-width <n>    Minimum digits of the numeric prefix (default: 2)");
    println!("  --separator <text>    Text between prefix and label (default: \" - \")");
    println!("  --raw-root-label      Use outline root labels without sanitizing them");
    println!("  --no-history          Stop recording operations in history/events.jsonl");
}

fn apply_overrides(config: &mut AppConfig, args: &CliArgs) -> bool {
    let before = config.clone();
    if let Some(width) = args.prefix_width {
        config.planning.prefix_width = width;
    }
    if let Some(separator) = &args.separator {
        config.planning.separator = separator.clone();
    }
    if args.raw_root_label {
        config.planning.sanitize_root_label = false;
    }
    if args.no_history {
        config.history.enabled = false;
    }
    *config != before
}

fn config_file_missing(path: &std::path::Path) -> bool {
    if !path.exists() {
        return true;
    }
    fs::read_to_string(path).is_err()
}
