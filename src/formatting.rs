//! Text rendering of checklists
//!
//! Two views are produced here: the editing listing, which shows ids and
//! positions so entries can be addressed, and the print view, which shows
//! only what belongs on paper.

use crate::checklist::{ChecklistEntry, ChecklistId, Collection};

/// Default line width of the print view
pub const PRINT_WIDTH: usize = 60;

/// Narrowest print width that still leaves room for a target and state
pub const MIN_PRINT_WIDTH: usize = 20;

/// Widest print width accepted; larger requests are clamped
pub const MAX_PRINT_WIDTH: usize = 200;

/// Minimum number of leader dots between target and state
const MIN_LEADER: usize = 3;

/// Format the collection for editing, with ids and entry positions
///
/// # Arguments
/// * `collection` - Checklists to list
/// * `editing` - Checklist currently in title-editing mode, if any
pub fn format_checklists(collection: &Collection, editing: Option<ChecklistId>) -> String {
    if collection.is_empty() {
        return "No checklists found".to_string();
    }

    let mut result = format!("Found {} checklist(s):\n\n", collection.len());
    for checklist in collection.checklists() {
        let marker = if editing == Some(checklist.id) {
            " (editing)"
        } else {
            ""
        };
        result.push_str(&format!(
            "- [{}] {} ({} entries){}\n",
            checklist.id,
            checklist.title,
            checklist.entries.len(),
            marker
        ));

        for (index, entry) in checklist.entries.iter().enumerate() {
            match entry {
                ChecklistEntry::Item(item) => result.push_str(&format!(
                    "  {}. [{}] item: {} = {}\n",
                    index, item.id, item.target, item.state
                )),
                ChecklistEntry::Divider(divider) => {
                    result.push_str(&format!("  {}. [{}] divider\n", index, divider.id))
                }
            }
        }
    }

    result
}

/// Render the read-only print view of every checklist
///
/// Each checklist becomes a section with a boxed title. Items are printed
/// as `target .... state` lines padded to `width`; dividers as a rule.
/// `width` is clamped to `MIN_PRINT_WIDTH..=MAX_PRINT_WIDTH`.
pub fn render_print_view(collection: &Collection, width: usize) -> String {
    let width = width.clamp(MIN_PRINT_WIDTH, MAX_PRINT_WIDTH);
    let rule = "-".repeat(width);
    let border = format!("+{}+", "=".repeat(width.saturating_sub(2)));

    let sections: Vec<String> = collection
        .checklists()
        .iter()
        .map(|checklist| {
            let mut section = String::new();
            section.push_str(&border);
            section.push('\n');
            section.push_str(&format!("| {} |\n", fit(&checklist.title, width - 4)));
            section.push_str(&border);
            section.push('\n');

            for entry in &checklist.entries {
                match entry {
                    ChecklistEntry::Item(item) => {
                        section.push_str(&leader_line(&item.target, &item.state, width));
                    }
                    ChecklistEntry::Divider(_) => section.push_str(&rule),
                }
                section.push('\n');
            }
            section
        })
        .collect();

    sections.join("\n")
}

/// Pad `text` with spaces to exactly `width` characters, cutting it short
/// with an ellipsis when it does not fit
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        return format!("{}…", kept);
    }
    format!("{}{}", text, " ".repeat(width - len))
}

/// `target ...... state`, stretched with dots to `width` when it fits
fn leader_line(target: &str, state: &str, width: usize) -> String {
    let used = target.chars().count() + state.chars().count() + 2;
    let dots = width.saturating_sub(used).max(MIN_LEADER);
    format!("{} {} {}", target, ".".repeat(dots), state)
}
