// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::collections::HashMap;

/// Insertion-ordered association of event id to that event's raw child
/// records.
///
/// The map is transient: it exists between a per-event fan-out and the
/// flatten step, and its iteration order is the order keys were inserted.
/// Deterministic iteration is what makes flattening reproducible, so the
/// ordering is part of this type's contract, not an implementation detail.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResourceMap {
    order: Vec<String>,
    groups: HashMap<String, Vec<Value>>,
}

impl ResourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group of records for an event id. Inserting the same key
    /// twice replaces the group but keeps the original position.
    pub fn insert(&mut self, event_id: String, records: Vec<Value>) {
        if !self.groups.contains_key(&event_id) {
            self.order.push(event_id.clone());
        }
        self.groups.insert(event_id, records);
    }

    pub fn get(&self, event_id: &str) -> Option<&[Value]> {
        self.groups.get(event_id).map(Vec::as_slice)
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.groups.contains_key(event_id)
    }

    /// Iterate groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.order
            .iter()
            .filter_map(|key| self.groups.get(key).map(|group| (key.as_str(), group.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut map = ResourceMap::new();
        map.insert("E2".to_string(), vec![json!({"id": "S3"})]);
        map.insert("E1".to_string(), vec![json!({"id": "S1"}), json!({"id": "S2"})]);

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["E2", "E1"]);
    }

    #[test]
    fn test_reinsert_keeps_original_position() {
        let mut map = ResourceMap::new();
        map.insert("E1".to_string(), vec![]);
        map.insert("E2".to_string(), vec![]);
        map.insert("E1".to_string(), vec![json!({"id": "S1"})]);

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["E1", "E2"]);
        assert_eq!(map.get("E1").unwrap().len(), 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let map = ResourceMap::new();
        assert!(map.get("absent").is_none());
        assert!(!map.contains("absent"));
        assert!(map.is_empty());
    }
}
