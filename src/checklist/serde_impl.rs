//! Serialization and deserialization implementations for ChecklistEntry
//!
//! Entries share one JSON array, so the variant is recovered from the
//! object itself: `"kind": "divider"` marks a divider, anything else is an
//! item. Exports from older versions spell the marker `"type": "divider"`,
//! which is accepted on input but never written.

use super::model::{ChecklistDivider, ChecklistEntry, ChecklistItem, EntryId, EntryKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const DIVIDER_TAG: &str = "divider";

/// Loose view of an entry object; every field is optional
#[derive(Default, Deserialize)]
#[serde(default)]
struct EntryHelper {
    id: EntryId,
    kind: Option<String>,
    #[serde(rename = "type")]
    legacy_type: Option<String>,
    target: Option<String>,
    state: Option<String>,
}

impl EntryHelper {
    fn is_divider(&self) -> bool {
        self.kind.as_deref() == Some(DIVIDER_TAG) || self.legacy_type.as_deref() == Some(DIVIDER_TAG)
    }
}

impl<'de> Deserialize<'de> for ChecklistEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = EntryHelper::deserialize(deserializer)?;

        if helper.is_divider() {
            return Ok(ChecklistEntry::Divider(ChecklistDivider { id: helper.id }));
        }

        Ok(ChecklistEntry::Item(ChecklistItem {
            id: helper.id,
            target: helper.target.unwrap_or_default(),
            state: helper.state.unwrap_or_default(),
        }))
    }
}

impl Serialize for ChecklistEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        match self {
            ChecklistEntry::Item(item) => item.serialize(serializer),
            ChecklistEntry::Divider(divider) => {
                let mut state = serializer.serialize_struct("ChecklistDivider", 2)?;
                state.serialize_field("id", &divider.id)?;
                state.serialize_field("kind", EntryKind::Divider.as_str())?;
                state.end()
            }
        }
    }
}
