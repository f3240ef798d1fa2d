//! The upsert/merge/remove core for sub-entity arrays.
//!
//! Every save rewrites one whole array on the world document; these
//! functions produce the rewritten array. Updates are shallow merges at the
//! document level: later keys win, keys present on the stored record but
//! absent from the payload survive. That keeps fields written by other
//! client versions alive across saves.

use serde_json::Value;

use crate::entities::EntityRecord;
use crate::error::DomainError;
use crate::ids::EntityId;

/// What a save is aimed at: a brand-new record or an existing id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(EntityId),
}

/// Insert or update `payload` in `items`.
///
/// - `New`: assign `new_id`, append.
/// - `Existing(id)` with a match: shallow-merge the payload over the stored
///   record, id unchanged.
/// - `Existing(id)` without a match (the record vanished under a concurrent
///   rewrite): fall back to assigning `new_id` and appending rather than
///   failing the save.
///
/// Returns the id the record ended up with.
pub fn upsert<T: EntityRecord>(
    items: &mut Vec<T>,
    target: &EditTarget,
    mut payload: T,
    new_id: EntityId,
) -> Result<EntityId, DomainError> {
    if let EditTarget::Existing(id) = target {
        if let Some(index) = items.iter().position(|item| item.id() == Some(id)) {
            payload.set_id(id.clone());
            let merged = merge_over(&items[index], &payload)?;
            items[index] = merged;
            return Ok(id.clone());
        }
    }

    payload.set_id(new_id.clone());
    items.push(payload);
    Ok(new_id)
}

/// Remove the record with `id` from `items`. Every other element is left
/// untouched. Returns whether anything was removed.
pub fn remove<T: EntityRecord>(items: &mut Vec<T>, id: &EntityId) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != Some(id));
    items.len() < before
}

/// Shallow merge of `payload` over `old` at the document level.
fn merge_over<T: EntityRecord>(old: &T, payload: &T) -> Result<T, DomainError> {
    let mut base = to_map(old)?;
    let incoming = to_map(payload)?;
    for (key, value) in incoming {
        base.insert(key, value);
    }
    serde_json::from_value(Value::Object(base)).map_err(DomainError::from)
}

fn to_map<T: EntityRecord>(record: &T) -> Result<serde_json::Map<String, Value>, DomainError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::serialization(format!(
            "expected a document object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Character;

    fn stored(id: &str, name: &str) -> Character {
        let mut character = Character::new(name);
        character.set_id(EntityId::from_raw(id));
        character
    }

    #[test]
    fn new_target_assigns_id_and_appends() {
        let mut items = vec![stored("1", "Alice")];
        let payload = Character::new("Kael").with_role("Rogue");

        let id = upsert(
            &mut items,
            &EditTarget::New,
            payload,
            EntityId::from_millis(1_714_000_000_000),
        )
        .expect("upsert");

        assert_eq!(id.as_str(), "1714000000000");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Kael");
        assert_eq!(items[1].role, "Rogue");
        assert_eq!(items[1].id, Some(id));
    }

    #[test]
    fn existing_target_merges_in_place_without_duplicating() {
        let mut items = vec![stored("1", "Alice"), stored("2", "Kael")];
        let target = EditTarget::Existing(EntityId::from_raw("2"));
        let payload = Character::new("Kael").with_role("Rogue");

        let id = upsert(&mut items, &target, payload.clone(), EntityId::from_raw("9"))
            .expect("first save");
        assert_eq!(id.as_str(), "2");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].role, "Rogue");

        // Saving the identical payload again is stable: no duplicate entry,
        // no field drift.
        let snapshot = items.clone();
        upsert(&mut items, &target, payload, EntityId::from_raw("9")).expect("second save");
        assert_eq!(items, snapshot);
    }

    #[test]
    fn merge_keeps_stored_keys_absent_from_the_payload() {
        let raw = r#"{"id":"2","name":"Kael","legacyNotes":"keep me"}"#;
        let old: Character = serde_json::from_str(raw).expect("deserialize");
        let mut items = vec![old];

        let payload = Character::new("Kael the Grey").with_role("Rogue");
        upsert(
            &mut items,
            &EditTarget::Existing(EntityId::from_raw("2")),
            payload,
            EntityId::from_raw("9"),
        )
        .expect("upsert");

        assert_eq!(items[0].name, "Kael the Grey");
        assert_eq!(
            items[0].extra.get("legacyNotes").and_then(|v| v.as_str()),
            Some("keep me")
        );
    }

    #[test]
    fn vanished_target_appends_with_fresh_id() {
        let mut items = vec![stored("1", "Alice")];
        let payload = Character::new("Kael");

        let id = upsert(
            &mut items,
            &EditTarget::Existing(EntityId::from_raw("gone")),
            payload,
            EntityId::from_raw("77"),
        )
        .expect("upsert");

        assert_eq!(id.as_str(), "77");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, Some(EntityId::from_raw("77")));
    }

    #[test]
    fn remove_filters_exactly_one_record() {
        let mut items = vec![stored("1", "Alice"), stored("2", "Kael"), stored("3", "Bryn")];
        let untouched = (items[0].clone(), items[2].clone());

        assert!(remove(&mut items, &EntityId::from_raw("2")));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], untouched.0);
        assert_eq!(items[1], untouched.1);

        // Removing an absent id is a no-op.
        assert!(!remove(&mut items, &EntityId::from_raw("2")));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn save_then_delete_round_trip_empties_the_array() {
        let mut items: Vec<Character> = Vec::new();
        let id = upsert(
            &mut items,
            &EditTarget::New,
            Character::new("Kael").with_role("Rogue"),
            EntityId::from_millis(1_714_000_000_000),
        )
        .expect("upsert");

        assert_eq!(items.len(), 1);
        assert!(remove(&mut items, &id));
        assert!(items.is_empty());
    }
}
