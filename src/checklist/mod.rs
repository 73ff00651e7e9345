//! Checklist domain models and editing operations
//!
//! Submodules:
//! - `model`: checklist, item, divider and entry types
//! - `collection`: the ordered collection and its copy-on-write edits
//! - `store`: the single-writer store every edit goes through
//! - `ids`: injectable id generation
//! - `defaults`: the seed data a fresh session starts with
//! - `serde_impl`: JSON shape of entries

mod collection;
mod defaults;
mod ids;
mod model;
mod serde_impl;
mod store;

pub use collection::Collection;
pub use defaults::{DEFAULT_EXPORT_FILE_NAME, default_collection};
pub use ids::{ClockIds, IdGenerator, SequentialIds};
pub use model::{
    Checklist, ChecklistDivider, ChecklistEntry, ChecklistId, ChecklistItem, EntryId, EntryKind,
    ItemField, NEW_ITEM_STATE, NEW_ITEM_TARGET,
};
pub use store::{ChecklistStore, StoreError};
