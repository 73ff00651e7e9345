use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a checklist within a collection
pub type ChecklistId = u64;

/// Identifier of an entry within a checklist
pub type EntryId = u64;

/// Placeholder target given to freshly added items
pub const NEW_ITEM_TARGET: &str = "New Item";

/// Placeholder state given to freshly added items
pub const NEW_ITEM_STATE: &str = "CHECK";

/// A labeled target/state pair, e.g. "Master Switch ... ON"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: EntryId,
    /// What to check (left-hand label)
    pub target: String,
    /// Expected state, conventionally upper case (right-hand label)
    pub state: String,
}

impl ChecklistItem {
    /// Create an item carrying the "New Item" / "CHECK" placeholders
    pub fn placeholder(id: EntryId) -> Self {
        Self {
            id,
            target: NEW_ITEM_TARGET.to_string(),
            state: NEW_ITEM_STATE.to_string(),
        }
    }

    fn set(&mut self, field: ItemField, value: &str) {
        match field {
            ItemField::Target => self.target = value.to_string(),
            ItemField::State => self.state = value.to_string(),
        }
    }
}

/// A contentless marker separating groups of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistDivider {
    pub id: EntryId,
}

/// Discriminant of a [`ChecklistEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Item,
    Divider,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Item => "item",
            EntryKind::Divider => "divider",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position in a checklist: either an item or a divider
///
/// Serialization lives in `serde_impl.rs`: items are written as
/// `{id, target, state}` and dividers as `{id, kind: "divider"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistEntry {
    Item(ChecklistItem),
    Divider(ChecklistDivider),
}

impl ChecklistEntry {
    pub fn id(&self) -> EntryId {
        match self {
            ChecklistEntry::Item(item) => item.id,
            ChecklistEntry::Divider(divider) => divider.id,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            ChecklistEntry::Item(_) => EntryKind::Item,
            ChecklistEntry::Divider(_) => EntryKind::Divider,
        }
    }

    pub fn as_item(&self) -> Option<&ChecklistItem> {
        match self {
            ChecklistEntry::Item(item) => Some(item),
            ChecklistEntry::Divider(_) => None,
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, ChecklistEntry::Divider(_))
    }

    /// Returns a copy with `field` set, or `None` when this entry is a divider
    pub(crate) fn with_field(&self, field: ItemField, value: &str) -> Option<ChecklistEntry> {
        match self {
            ChecklistEntry::Item(item) => {
                let mut item = item.clone();
                item.set(field, value);
                Some(ChecklistEntry::Item(item))
            }
            ChecklistEntry::Divider(_) => None,
        }
    }
}

impl From<ChecklistItem> for ChecklistEntry {
    fn from(item: ChecklistItem) -> Self {
        ChecklistEntry::Item(item)
    }
}

impl From<ChecklistDivider> for ChecklistEntry {
    fn from(divider: ChecklistDivider) -> Self {
        ChecklistEntry::Divider(divider)
    }
}

/// Editable field of a [`ChecklistItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Target,
    State,
}

impl FromStr for ItemField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "target" => Ok(ItemField::Target),
            "state" => Ok(ItemField::State),
            _ => Err(format!(
                "Invalid field '{}'. Valid options are: target, state",
                s
            )),
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemField::Target => f.write_str("target"),
            ItemField::State => f.write_str("state"),
        }
    }
}

/// A titled, ordered sequence of entries
///
/// The position of an entry in `entries` is its only ordering signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checklist {
    pub id: ChecklistId,
    pub title: String,
    /// Older exports name this field `items`
    #[serde(alias = "items")]
    pub entries: Vec<ChecklistEntry>,
}

impl Checklist {
    /// Create an empty checklist
    pub fn new(id: ChecklistId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Find an entry by id
    pub fn entry(&self, id: EntryId) -> Option<&ChecklistEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Position of the first entry with `id`
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Highest id used by this checklist or any of its entries
    pub fn max_id(&self) -> u64 {
        self.entries
            .iter()
            .map(ChecklistEntry::id)
            .fold(self.id, u64::max)
    }
}
