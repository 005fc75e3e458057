use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::lenient::{id_from_any, opt_id_from_any, opt_text_from_any};

/// An editor-applied label that can be attached to feedback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    pub tag_id: u64,
    pub tag_name: String,
}

/// Join record linking a tag to one feedback comment.
///
/// `id` is the assignment id, unique per feedback item; removing a tag needs
/// all three ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TagAssignment {
    #[serde(default, deserialize_with = "id_from_any")]
    pub id: u64,
    #[serde(default, deserialize_with = "id_from_any")]
    pub tag_id: u64,
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub comment_id: Option<u64>,
}

/// One entry of the `tag_lookup/` response before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagLookupEntry {
    #[serde(default, deserialize_with = "opt_id_from_any")]
    pub tag_id: Option<u64>,
    #[serde(default, deserialize_with = "opt_text_from_any")]
    pub tag_name: Option<String>,
}

impl TagLookupEntry {
    /// Entries without a usable id or name are not tags.
    #[must_use]
    pub fn into_tag(self) -> Option<Tag> {
        let tag_id = self.tag_id.filter(|id| *id != 0)?;
        let tag_name = self.tag_name.filter(|name| !name.trim().is_empty())?;
        Some(Tag { tag_id, tag_name })
    }
}

/// All known tags, ordered alphabetically by name.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    /// Build a catalog from raw lookup entries.
    ///
    /// Invalid entries are dropped. When an id repeats, the later entry wins.
    #[must_use]
    pub fn from_lookup<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = TagLookupEntry>,
    {
        let mut tags: Vec<Tag> = Vec::new();
        for tag in entries.into_iter().filter_map(TagLookupEntry::into_tag) {
            if let Some(existing) = tags.iter_mut().find(|t| t.tag_id == tag.tag_id) {
                *existing = tag;
            } else {
                tags.push(tag);
            }
        }
        tags.sort_by(|a, b| by_name(&a.tag_name, &b.tag_name).then(a.tag_id.cmp(&b.tag_id)));
        Self { tags }
    }

    /// Human-readable name for a tag id.
    #[must_use]
    pub fn name(&self, tag_id: u64) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.tag_id == tag_id)
            .map(|t| t.tag_name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagCatalog {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Byte order of the names, so capitalized names sort before lowercase ones.
pub(crate) fn by_name(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const LOOKUP: &str = r#"[
        {"tag_id": 3, "tag_name": "Spam"},
        {"tag_id": "1", "tag_name": "accessibility"},
        {"tag_id": 2, "tag_name": "Broken link"},
        {"tag_id": 0, "tag_name": "zero id"},
        {"tag_id": 9, "tag_name": ""},
        {"tag_name": "no id"}
    ]"#;

    fn catalog() -> TagCatalog {
        let entries: Vec<TagLookupEntry> = serde_json::from_str(LOOKUP).unwrap();
        TagCatalog::from_lookup(entries)
    }

    #[test]
    fn sorted_by_name_bytes() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.iter().map(|t| t.tag_name.as_str()).collect();
        assert_eq!(names, vec!["Broken link", "Spam", "accessibility"]);
    }

    #[test]
    fn equal_names_fall_back_to_id() {
        let catalog = TagCatalog::from_lookup(vec![
            TagLookupEntry { tag_id: Some(8), tag_name: Some("Spam".into()) },
            TagLookupEntry { tag_id: Some(4), tag_name: Some("Spam".into()) },
        ]);
        let ids: Vec<u64> = catalog.iter().map(|t| t.tag_id).collect();
        assert_eq!(ids, vec![4, 8]);
    }

    #[test]
    fn drops_entries_without_id_or_name() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.name(9), None);
        assert_eq!(catalog.name(0), None);
    }

    #[test]
    fn later_duplicate_wins() {
        let catalog = TagCatalog::from_lookup(vec![
            TagLookupEntry { tag_id: Some(1), tag_name: Some("Old".into()) },
            TagLookupEntry { tag_id: Some(1), tag_name: Some("New".into()) },
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.name(1), Some("New"));
    }

    #[test]
    fn serializes_as_list() {
        let json = serde_json::to_value(catalog()).unwrap();
        assert_eq!(json[0]["tag_name"], "Broken link");
        assert_eq!(json[0]["tag_id"], 2);
    }
}
