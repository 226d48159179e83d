//! Detects drift between a target directory and the embedded templates.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::TemplateFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriftKind {
    Missing,
    Modified { expected: String, found: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDrift {
    pub path: PathBuf,
    pub kind: DriftKind,
}

impl TemplateDrift {
    pub fn describe(&self) -> String {
        match &self.kind {
            DriftKind::Missing => format!("[missing] {}", self.path.display()),
            DriftKind::Modified { expected, found } => format!(
                "[mismatch] {} expected {}, found {}",
                self.path.display(),
                expected,
                found
            ),
        }
    }
}

pub fn content_hash(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

fn hash_path(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Unable to open {} for hashing", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0_u8; 8192];
    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compares every catalog file under `target_dir` with its embedded content.
///
/// An empty result means the directory matches the catalog.
pub fn verify_templates(target_dir: &Path, catalog: &[TemplateFile]) -> Result<Vec<TemplateDrift>> {
    let mut drift = Vec::new();
    for template in catalog {
        let path = template.path_in(target_dir);
        let found = match hash_path(&path) {
            Ok(hash) => hash,
            Err(err) if is_not_found(&err) => {
                drift.push(TemplateDrift {
                    path,
                    kind: DriftKind::Missing,
                });
                continue;
            }
            Err(err) => return Err(err),
        };
        let expected = content_hash(template.content.as_bytes());
        if found != expected {
            drift.push(TemplateDrift {
                path,
                kind: DriftKind::Modified { expected, found },
            });
        }
    }
    Ok(drift)
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}
