use std::fs;
use std::path::Path;

use crate::naming::Label;

use super::{OutlineDocument, OutlineError};

/// Bullet markers recognised at the start of a child line, in priority order.
pub const LIST_MARKERS: [&str; 3] = ["|-", "- ", "* "];

const ROOT_HEADING_PREFIX: &str = "# ";

/// Parses the minimal outline subset: a root line followed by bullet lines.
///
/// Unmarked lines after the root are ignored, as are bullets whose label is
/// empty. Child labels are trimmed on both sides.
pub fn parse_outline(text: &str) -> Result<OutlineDocument, OutlineError> {
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());

    let root_line = lines.next().ok_or(OutlineError::MissingRoot)?.trim();
    let root_label = root_line
        .strip_prefix(ROOT_HEADING_PREFIX)
        .unwrap_or(root_line)
        .to_string();

    let child_labels = lines
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .filter_map(child_label)
        .collect();

    Ok(OutlineDocument::new(root_label, child_labels))
}

/// Reads and parses an outline file.
pub fn parse_outline_file(path: &Path) -> Result<OutlineDocument, OutlineError> {
    let text = fs::read_to_string(path).map_err(|source| OutlineError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_outline(&text)
}

fn child_label(line: &str) -> Option<Label> {
    if !LIST_MARKERS.iter().any(|marker| line.starts_with(marker)) {
        return None;
    }
    let label = line
        .trim_start_matches(|c: char| matches!(c, '|' | '-' | ' ' | '*'))
        .trim_start_matches([' ', '\t']);
    Label::from_input(label).ok()
}
