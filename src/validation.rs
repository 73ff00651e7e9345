//! Input normalization for MCP tool parameters
//!
//! The store accepts values as given; the conventions the editor applies
//! to raw user input (upper-case states, known field names) live here.

use crate::checklist::ItemField;
use mcp_attr::Result as McpResult;
use std::path::{Component, Path};

/// Parse and validate an item field name
///
/// # Arguments
/// * `field` - Field name, `target` or `state` (surrounding whitespace and case are ignored)
pub fn parse_item_field(field: &str) -> McpResult<ItemField> {
    field.trim().to_lowercase().parse::<ItemField>().map_err(|msg| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(msg, true)
    })
}

/// Upper-case a state value the way the editor's state input does
pub fn normalize_state(value: &str) -> String {
    value.to_uppercase()
}

/// Apply input conventions for `field` to a raw value
pub fn normalize_field_value(field: ItemField, value: &str) -> String {
    match field {
        ItemField::Target => value.to_string(),
        ItemField::State => normalize_state(value),
    }
}

/// Ensure an export file name carries a `.json` extension
///
/// # Examples
/// ```
/// # use aerolist::validation::normalize_export_name;
/// assert_eq!(normalize_export_name("cessna"), "cessna.json");
/// assert_eq!(normalize_export_name(" piper.JSON "), "piper.JSON");
/// ```
pub fn normalize_export_name(name: &str) -> String {
    let name = name.trim();
    if name.to_lowercase().ends_with(".json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    }
}

/// Validate an export file name and give it a `.json` extension
///
/// Exports always land in the export directory, so the name must be a
/// single plain file name: no directories, no `..`, no absolute path.
///
/// # Arguments
/// * `name` - Requested file name (surrounding whitespace is ignored)
pub fn export_file_name(name: &str) -> McpResult<String> {
    let name = name.trim();
    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\']);
    if !plain {
        return Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
                format!(
                    "Export name '{}' must be a plain file name inside the export directory",
                    name
                ),
                true,
            ),
        );
    }
    Ok(normalize_export_name(name))
}
