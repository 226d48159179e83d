use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stemtree::history::{record, EventKind};
use stemtree::materialize::{
    apply_templates, apply_templates_to_subdirectories, copy_tree_to_many, create_directories,
    BatchReport, EntryStatus,
};
use stemtree::outline::parse_outline_file;
use stemtree::session::{Session, StdConsole};
use stemtree::templates::{verify_templates, TemplateCatalog};
use stemtree::{DirectoryPlan, Label, Workspace};

#[derive(Parser)]
#[command(name = "stemtree")]
#[command(about = "Create numbered directory trees and fill them with template files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Interactive,
    /// Create numbered directories below a stem directory
    Create {
        stem: PathBuf,
        /// Directory labels in order
        #[arg(required = true)]
        labels: Vec<String>,
        /// Also write the template files into each created directory
        #[arg(long)]
        templates: bool,
    },
    /// Create a stem directory and its children from a markdown outline
    Outline {
        file: PathBuf,
        /// Directory that receives the stem directory
        parent: PathBuf,
        #[arg(long)]
        templates: bool,
    },
    /// Write the template files into a directory
    Templates {
        dir: PathBuf,
        /// Target every immediate subdirectory instead of DIR itself
        #[arg(long)]
        subdirs: bool,
    },
    /// Copy a directory tree into one or more destinations
    Copy {
        source: PathBuf,
        #[arg(required = true)]
        destinations: Vec<PathBuf>,
    },
    /// Compare a directory's template files with the embedded catalog
    Verify { dir: PathBuf },
    /// Show recent operations
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Initialize tracing on stderr so prompts on stdout stay readable.
fn init_tracing(configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let workspace = Workspace::open()?;
    init_tracing(&workspace.config.logging.filter);
    tracing::debug!(root = %workspace.root().display(), "workspace opened");

    match cli.command {
        None | Some(Commands::Interactive) => {
            let mut console = StdConsole::new();
            Session::new(&mut console, &workspace).run()?;
        }
        Some(Commands::Create {
            stem,
            labels,
            templates,
        }) => {
            let labels = labels
                .iter()
                .map(|raw| Label::from_input(raw).with_context(|| format!("Invalid label '{raw}'")))
                .collect::<Result<Vec<_>>>()?;
            let plan = workspace.planner().plan(stem, &labels);
            run_plan(&workspace, &plan, templates);
        }
        Some(Commands::Outline {
            file,
            parent,
            templates,
        }) => {
            if !parent.is_dir() {
                bail!("Parent directory {} does not exist", parent.display());
            }
            let outline = parse_outline_file(&file)?;
            let plan = workspace.planner().plan_from_markdown(&outline, &parent);
            std::fs::create_dir_all(plan.stem()).with_context(|| {
                format!("Unable to create stem directory {}", plan.stem().display())
            })?;
            println!("Stem directory: {}", plan.stem().display());
            run_plan(&workspace, &plan, templates);
        }
        Some(Commands::Templates { dir, subdirs }) => {
            let batch = if subdirs {
                apply_templates_to_subdirectories(&dir, TemplateCatalog::all())?
            } else {
                apply_templates([dir.as_path()], TemplateCatalog::all())
            };
            finish_batch(&workspace, &dir, &batch);
        }
        Some(Commands::Copy {
            source,
            destinations,
        }) => {
            let reports = copy_tree_to_many(&source, &destinations);
            let mut complete = 0;
            for report in &reports {
                match &report.aborted {
                    None => {
                        complete += 1;
                        println!(
                            "Copied {} files to {}.",
                            report.files_copied,
                            report.destination.display()
                        );
                    }
                    Some(issue) => eprintln!("{issue}"),
                }
            }
            record(
                workspace.history().as_ref(),
                EventKind::TreeCopied,
                json!({
                    "source": source.display().to_string(),
                    "destinations": reports.len(),
                    "completed": complete,
                }),
            );
            println!(
                "Copied the tree into {complete} of {} destinations.",
                reports.len()
            );
        }
        Some(Commands::Verify { dir }) => {
            let drift = verify_templates(&dir, TemplateCatalog::all())?;
            if drift.is_empty() {
                println!(
                    "{} verified: {} template files match the catalog.",
                    dir.display(),
                    TemplateCatalog::count()
                );
            } else {
                println!("Template verification failed:");
                for item in &drift {
                    println!("  - {}", item.describe());
                }
                bail!("Template verification failed ({} files differ)", drift.len());
            }
        }
        Some(Commands::History { limit }) => {
            let Some(log) = workspace.history() else {
                println!("History is disabled in {}.", workspace.config_path.display());
                return Ok(());
            };
            let limit = limit.unwrap_or(workspace.config.history.display_limit);
            let events = log.recent(limit)?;
            if events.is_empty() {
                println!("No operations recorded yet.");
            }
            for event in &events {
                println!("{}", event.summary_line());
            }
        }
    }

    Ok(())
}

fn run_plan(workspace: &Workspace, plan: &DirectoryPlan, templates: bool) {
    let result = create_directories(plan);
    for outcome in &result.outcomes {
        match &outcome.status {
            EntryStatus::Created => println!("Created: {}", outcome.target_path.display()),
            EntryStatus::Failed(issue) => eprintln!("{issue}"),
        }
    }
    println!("{}", result.describe());
    record(
        workspace.history().as_ref(),
        EventKind::DirectoriesCreated,
        json!({
            "stem": plan.stem().display().to_string(),
            "attempted": result.attempted,
            "succeeded": result.succeeded,
        }),
    );

    if templates {
        let batch = apply_templates(result.created_paths(), TemplateCatalog::all());
        finish_batch(workspace, plan.stem(), &batch);
    }
}

fn finish_batch(workspace: &Workspace, stem: &Path, batch: &BatchReport) {
    for issue in batch.issues() {
        eprintln!("{issue}");
    }
    println!("{}", batch.describe());
    record(
        workspace.history().as_ref(),
        EventKind::TemplatesApplied,
        json!({
            "stem": stem.display().to_string(),
            "directories": batch.directories(),
            "completed": batch.completed(),
        }),
    );
}
