pub mod history;
pub mod materialize;
pub mod naming;
pub mod outline;
pub mod paths;
pub mod planning;
pub mod session;
pub mod templates;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use materialize::{create_directories, MaterializationIssue, MaterializationResult};
pub use naming::{sanitize, Label};
pub use outline::{parse_outline, OutlineDocument, OutlineError};
pub use planning::{plan, plan_from_markdown, DirectoryPlan, StructurePlanner};
pub use session::{Console, Session};
pub use templates::{TemplateCatalog, TemplateFile};
pub use workspace::{AppConfig, Workspace};
