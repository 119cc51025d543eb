use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered heading → item-list mapping.
///
/// Used for the round checklist, the 7-day plan and (wrapped) extracted skills.
/// Serializes as a JSON object whose key order is the insertion order, which is
/// also the display and export order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedLists {
    entries: Vec<(String, Vec<String>)>,
}

impl KeyedLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a heading, or replaces its items in place if it already exists.
    pub fn insert(&mut self, heading: impl Into<String>, items: Vec<String>) {
        let heading = heading.into();
        match self.entries.iter_mut().find(|(h, _)| *h == heading) {
            Some((_, existing)) => *existing = items,
            None => self.entries.push((heading, items)),
        }
    }

    pub fn get(&self, heading: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(h, _)| h == heading)
            .map(|(_, items)| items.as_slice())
    }

    pub fn contains(&self, heading: &str) -> bool {
        self.get(heading).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(h, _)| h.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(h, items)| (h.as_str(), items.as_slice()))
    }
}

impl<H: Into<String>> FromIterator<(H, Vec<String>)> for KeyedLists {
    fn from_iter<I: IntoIterator<Item = (H, Vec<String>)>>(iter: I) -> Self {
        let mut lists = KeyedLists::new();
        for (heading, items) in iter {
            lists.insert(heading, items);
        }
        lists
    }
}

impl Serialize for KeyedLists {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (heading, items) in &self.entries {
            map.serialize_entry(heading, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeyedLists {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyedListsVisitor;

        impl<'de> Visitor<'de> for KeyedListsVisitor {
            type Value = KeyedLists;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping headings to string lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut lists = KeyedLists::new();
                while let Some((heading, items)) = access.next_entry::<String, Vec<String>>()? {
                    lists.insert(heading, items);
                }
                Ok(lists)
            }
        }

        deserializer.deserialize_map(KeyedListsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_keeps_order_and_replaces_in_place() {
        let mut lists = KeyedLists::new();
        lists.insert("Day 2", items(&["b"]));
        lists.insert("Day 1", items(&["a"]));
        lists.insert("Day 2", items(&["c"]));

        let headings: Vec<_> = lists.headings().collect();
        assert_eq!(headings, vec!["Day 2", "Day 1"]);
        assert_eq!(lists.get("Day 2").unwrap(), &["c".to_string()]);
    }

    #[test]
    fn test_json_key_order_follows_insertion() {
        let lists: KeyedLists = vec![
            ("Zeta", items(&["z"])),
            ("Alpha", items(&["a1", "a2"])),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&lists).unwrap();
        assert_eq!(json, r#"{"Zeta":["z"],"Alpha":["a1","a2"]}"#);

        let back: KeyedLists = serde_json::from_str(&json).unwrap();
        assert_eq!(back.headings().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<KeyedLists>(r#"["a"]"#).is_err());
    }
}
