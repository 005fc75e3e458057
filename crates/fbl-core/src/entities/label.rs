use serde::{Deserialize, Serialize};

use crate::entities::tag::by_name;
use crate::lenient::{opt_id_from_any, opt_text_from_any};

/// A classification label from the `labels/` lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Label {
    pub label_id: u64,
    pub label_name: String,
}

/// One entry of the `labels/` response before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelLookupEntry {
    #[serde(default, alias = "id", deserialize_with = "opt_id_from_any")]
    pub label_id: Option<u64>,
    #[serde(default, alias = "name", deserialize_with = "opt_text_from_any")]
    pub label_name: Option<String>,
}

/// Validate and order label lookup entries by name.
#[must_use]
pub fn labels_from_lookup<I>(entries: I) -> Vec<Label>
where
    I: IntoIterator<Item = LabelLookupEntry>,
{
    let mut labels: Vec<Label> = entries
        .into_iter()
        .filter_map(|entry| {
            let label_id = entry.label_id.filter(|id| *id != 0)?;
            let label_name = entry.label_name.filter(|name| !name.trim().is_empty())?;
            Some(Label { label_id, label_name })
        })
        .collect();
    labels.sort_by(|a, b| {
        by_name(&a.label_name, &b.label_name).then(a.label_id.cmp(&b.label_id))
    });
    labels
}
