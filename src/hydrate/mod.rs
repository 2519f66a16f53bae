// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Aggregation: hydrating parent events with child-record references and
//! flattening per-event groupings into global entity lists.
//!
//! Hydration attaches *ids only* to parent events. Relationships are resolved
//! by reference at query time through the declared schema, never by embedding
//! child records, so parent nodes stay light and a child edit never changes a
//! parent's content digest.

use serde_json::Value;

use crate::errors::SourceError;
use crate::fetch::{ResourceKind, ResourceMap};
use crate::model::{record_id, Event, Sponsorship};
use crate::uri;

/// Attach child-record reference ids onto each event.
///
/// Both association maps must contain a group for every event's
/// `readableEventId`. A missing group raises [`SourceError::Lookup`] rather
/// than silently substituting an empty list, because an absent key signals a
/// fetch problem, not an event without children (those have an empty group).
pub fn hydrate(
    events: Vec<Event>,
    speakers_by_event: &ResourceMap,
    sponsorships_by_event: &ResourceMap,
) -> Result<Vec<Event>, SourceError> {
    events
        .into_iter()
        .map(|mut event| {
            event.speakers = group_ids(speakers_by_event, &event, ResourceKind::Speakers)?;
            event.sponsorships =
                group_ids(sponsorships_by_event, &event, ResourceKind::Sponsorships)?;
            Ok(event)
        })
        .collect()
}

fn group_ids(
    by_event: &ResourceMap,
    event: &Event,
    kind: ResourceKind,
) -> Result<Vec<String>, SourceError> {
    let group = by_event
        .get(&event.readable_event_id)
        .ok_or_else(|| SourceError::Lookup {
            kind,
            event_id: event.readable_event_id.clone(),
        })?;

    group
        .iter()
        .map(|record| record_id(record, &kind.to_string()))
        .collect()
}

/// Concatenate all per-event groups into one global record list.
///
/// Relative order within each group is preserved; across groups, the map's
/// insertion order is followed. No deduplication is performed: a child record
/// serving two events appears twice. Collapsing duplicates would change node
/// identity for downstream consumers, so the duplication is kept as-is.
pub fn flatten(by_event: &ResourceMap) -> Vec<Value> {
    by_event
        .iter()
        .flat_map(|(_, group)| group.iter().cloned())
        .collect()
}

/// Set a sponsorship's logo to its derived asset URI. Pure, no network I/O.
pub fn derive_sponsor_logo(mut sponsorship: Sponsorship, endpoint: &str) -> Sponsorship {
    // The logo template carries no token.
    sponsorship.logo = Some(uri::SPONSOR_LOGO.resolve(endpoint, "", Some(&sponsorship.id)));
    sponsorship
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(id: &str, readable: &str) -> Event {
        Event::from_record(json!({
            "eventId": id,
            "readableEventId": readable,
        }))
        .unwrap()
    }

    fn two_event_maps() -> (ResourceMap, ResourceMap) {
        let mut speakers = ResourceMap::new();
        speakers.insert(
            "E1".to_string(),
            vec![json!({ "id": "S1" }), json!({ "id": "S2" })],
        );
        speakers.insert("E2".to_string(), vec![json!({ "id": "S3" })]);

        let mut sponsorships = ResourceMap::new();
        sponsorships.insert("E1".to_string(), vec![]);
        sponsorships.insert("E2".to_string(), vec![json!({ "id": "P1" })]);

        (speakers, sponsorships)
    }

    #[test]
    fn test_hydrate_attaches_ordered_reference_ids() {
        let (speakers, sponsorships) = two_event_maps();
        let events = vec![event("1", "E1"), event("2", "E2")];

        let hydrated = hydrate(events, &speakers, &sponsorships).unwrap();

        assert_eq!(hydrated[0].speakers, vec!["S1", "S2"]);
        assert!(hydrated[0].sponsorships.is_empty());
        assert_eq!(hydrated[1].speakers, vec!["S3"]);
        assert_eq!(hydrated[1].sponsorships, vec!["P1"]);
    }

    #[test]
    fn test_hydrate_raises_lookup_for_missing_group() {
        let (speakers, _) = two_event_maps();
        // Sponsorships map is missing E2 entirely.
        let mut sponsorships = ResourceMap::new();
        sponsorships.insert("E1".to_string(), vec![]);

        let err = hydrate(
            vec![event("1", "E1"), event("2", "E2")],
            &speakers,
            &sponsorships,
        )
        .unwrap_err();

        match err {
            SourceError::Lookup { kind, event_id } => {
                assert_eq!(kind, ResourceKind::Sponsorships);
                assert_eq!(event_id, "E2");
            }
            other => panic!("expected Lookup error, got: {other}"),
        }
    }

    #[test]
    fn test_flatten_preserves_group_order_and_length() {
        let (speakers, sponsorships) = two_event_maps();

        let flat_speakers = flatten(&speakers);
        let ids: Vec<&str> = flat_speakers
            .iter()
            .map(|r| r.get("id").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);

        // Empty group E1 contributes nothing.
        let flat_sponsorships = flatten(&sponsorships);
        assert_eq!(flat_sponsorships.len(), 1);
        assert_eq!(flat_sponsorships[0].get("id").unwrap(), "P1");
    }

    #[test]
    fn test_flatten_length_is_sum_of_group_lengths() {
        let mut map = ResourceMap::new();
        map.insert("E1".to_string(), vec![json!({"id": 1}), json!({"id": 2})]);
        map.insert("E2".to_string(), vec![]);
        map.insert("E3".to_string(), vec![json!({"id": 3})]);

        assert_eq!(flatten(&map).len(), 3);
    }

    #[test]
    fn test_flatten_keeps_cross_event_duplicates() {
        let mut map = ResourceMap::new();
        map.insert("E1".to_string(), vec![json!({ "id": "S1" })]);
        map.insert("E2".to_string(), vec![json!({ "id": "S1" })]);

        assert_eq!(flatten(&map).len(), 2);
    }

    #[test]
    fn test_derive_sponsor_logo() {
        let sponsorship =
            Sponsorship::from_record(json!({ "id": "P1", "name": "Acme" })).unwrap();
        let derived = derive_sponsor_logo(sponsorship, "https://api.test");

        assert_eq!(
            derived.logo.as_deref(),
            Some("https://api.test/EvtMgmt/api/v2.0/sponsorships/P1/logo")
        );
        // Derivation touches nothing else.
        assert_eq!(derived.fields.get("name"), Some(&json!("Acme")));
    }
}
