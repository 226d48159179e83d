use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the markdown-driven flow. None of these are fatal to a session.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("unable to read outline {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("outline has no root line")]
    MissingRoot,
}
