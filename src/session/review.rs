use anyhow::Result;

use crate::naming::Label;
use crate::outline::OutlineDocument;

use super::console::Console;
use super::prompts::collect_labels;

/// Command accepted by the outline review loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Confirm,
    EditRoot,
    EditLabel,
    AppendLabels,
    Cancel,
}

impl ReviewAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "c" => Some(Self::Confirm),
            "r" => Some(Self::EditRoot),
            "e" => Some(Self::EditLabel),
            "a" => Some(Self::AppendLabels),
            "q" => Some(Self::Cancel),
            _ => None,
        }
    }
}

fn show(console: &mut dyn Console, outline: &OutlineDocument) {
    console.say(&format!("Root: {}", outline.root_label()));
    for (position, label) in outline.child_labels().iter().enumerate() {
        console.say(&format!("  {}. {}", position + 1, label));
    }
}

/// Lets the user inspect and amend a parsed outline before anything is
/// created. Returns `None` when the user cancels or input ends.
pub fn review_outline(
    console: &mut dyn Console,
    mut outline: OutlineDocument,
) -> Result<Option<OutlineDocument>> {
    loop {
        show(console, &outline);
        let Some(line) = console.read_line(
            "[c]onfirm, edit [r]oot, [e]dit a label, [a]ppend labels, [q]uit: ",
        )?
        else {
            return Ok(None);
        };

        match ReviewAction::parse(&line) {
            Some(ReviewAction::Confirm) => return Ok(Some(outline)),
            Some(ReviewAction::Cancel) => return Ok(None),
            Some(ReviewAction::EditRoot) => {
                let Some(root) = console.read_line("New root label: ")? else {
                    return Ok(None);
                };
                let root = root.trim();
                if root.is_empty() {
                    console.warn("Root label cannot be empty.");
                } else {
                    outline = outline.with_root_label(root);
                }
            }
            Some(ReviewAction::EditLabel) => {
                let Some(number) = console.read_line("Label number to edit: ")? else {
                    return Ok(None);
                };
                let Ok(position) = number.trim().parse::<usize>() else {
                    console.warn(&format!("'{}' is not a label number.", number.trim()));
                    continue;
                };
                if position == 0 || position > outline.len() {
                    console.warn(&format!("No label numbered {position}."));
                    continue;
                }
                let Some(text) = console.read_line("New label: ")? else {
                    return Ok(None);
                };
                match Label::from_input(&text) {
                    Ok(label) => {
                        if let Some(updated) = outline.with_child_label(position, label) {
                            outline = updated;
                        }
                    }
                    Err(err) => console.warn(&format!("Label unchanged: {err}.")),
                }
            }
            Some(ReviewAction::AppendLabels) => {
                let extra = collect_labels(console, "Label to append (or q to finish): ")?;
                outline = outline.with_appended(extra);
            }
            None => console.warn("Unknown option. Please try again."),
        }
    }
}
