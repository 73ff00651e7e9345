//! MCP tool handlers for the checklist server
//!
//! Each file groups the handlers for one area of the editor.

pub mod checklist;
pub mod entry;
pub mod transfer;
