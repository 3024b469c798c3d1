use crate::db::{Prefs, WISHES_KEY};
use crate::model::Wish;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================
// Codec
// ============================================================

/// On-disk record shape. Optional fields serialize as explicit `null`,
/// and a record missing `isCompleted` decodes as not completed.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WishRecord {
    name: String,
    price: Option<String>,
    photo_file_name: Option<String>,
    #[serde(default)]
    is_completed: bool,
}

/// Serialize the full collection, active items first, then completed,
/// in their in-memory order.
pub fn encode_wishes(active: &[Wish], completed: &[Wish]) -> String {
    let records: Vec<WishRecord> = active
        .iter()
        .chain(completed.iter())
        .map(|w| WishRecord {
            name: w.name.clone(),
            price: w.price.clone(),
            photo_file_name: w.photo.clone(),
            is_completed: w.completed,
        })
        .collect();
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a stored blob back into wishes with fresh ids. Malformed input
/// of any kind yields an empty collection.
pub fn decode_wishes(text: &str) -> Vec<Wish> {
    let records: Vec<WishRecord> = match serde_json::from_str(text) {
        Ok(records) => records,
        Err(_) => return Vec::new(),
    };
    records
        .into_iter()
        .map(|r| Wish {
            id: Uuid::new_v4(),
            name: r.name,
            price: r.price,
            photo: r.photo_file_name,
            completed: r.is_completed,
        })
        .collect()
}

// ============================================================
// Store
// ============================================================

/// Authoritative in-memory wishlist, partitioned into active and completed
/// items. Every mutation rewrites the whole persisted blob; write failures
/// are ignored.
pub struct WishStore {
    active: Vec<Wish>,
    completed: Vec<Wish>,
    prefs: Prefs,
}

impl WishStore {
    pub fn load(prefs: Prefs) -> Self {
        let all = prefs
            .get(WISHES_KEY)
            .ok()
            .flatten()
            .map(|blob| decode_wishes(&blob))
            .unwrap_or_default();

        let (completed, active): (Vec<Wish>, Vec<Wish>) =
            all.into_iter().partition(|w| w.completed);

        Self {
            active,
            completed,
            prefs,
        }
    }

    pub fn active(&self) -> &[Wish] {
        &self.active
    }

    pub fn completed(&self) -> &[Wish] {
        &self.completed
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn find(&self, id: Uuid) -> Option<&Wish> {
        self.active
            .iter()
            .chain(self.completed.iter())
            .find(|w| w.id == id)
    }

    /// Append a new active wish. Blank names (after trimming) are rejected
    /// and leave the store untouched. Returns whether anything was added.
    pub fn add(&mut self, name: &str, price: Option<String>, photo: Option<String>) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let price = price.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());
        self.active.push(Wish::new(name.to_string(), price, photo));
        self.persist();
        true
    }

    /// Replace the fields of the wish with this id, wherever it lives,
    /// keeping its completed flag. Blank names are rejected.
    pub fn edit(
        &mut self,
        id: Uuid,
        name: &str,
        price: Option<String>,
        photo: Option<String>,
    ) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let price = price.map(|p| p.trim().to_string()).filter(|p| !p.is_empty());

        let wish = self
            .active
            .iter_mut()
            .chain(self.completed.iter_mut())
            .find(|w| w.id == id);

        match wish {
            Some(wish) => {
                wish.name = name.to_string();
                wish.price = price;
                wish.photo = photo;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Move a wish from active to completed. An id not found among the
    /// active items (already completed, or deleted) is a no-op.
    pub fn complete(&mut self, id: Uuid) -> bool {
        let Some(pos) = self.active.iter().position(|w| w.id == id) else {
            return false;
        };
        let mut wish = self.active.remove(pos);
        wish.completed = true;
        self.completed.push(wish);
        self.persist();
        true
    }

    /// Remove a wish from whichever subset holds it.
    pub fn delete(&mut self, id: Uuid) -> bool {
        if let Some(pos) = self.active.iter().position(|w| w.id == id) {
            self.active.remove(pos);
            self.persist();
            return true;
        }
        if let Some(pos) = self.completed.iter().position(|w| w.id == id) {
            self.completed.remove(pos);
            self.persist();
            return true;
        }
        false
    }

    // Fire-and-forget: a failed write is indistinguishable from success,
    // matching the original app's behavior.
    fn persist(&self) {
        let blob = encode_wishes(&self.active, &self.completed);
        let _ = self.prefs.put(WISHES_KEY, &blob);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_store() -> WishStore {
        WishStore::load(Prefs::open_in_memory().unwrap())
    }

    fn wish(name: &str, price: Option<&str>, photo: Option<&str>, completed: bool) -> Wish {
        Wish {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: price.map(str::to_string),
            photo: photo.map(str::to_string),
            completed,
        }
    }

    // --- Codec ---

    #[test]
    fn round_trip_preserves_fields_and_order() {
        let active = vec![
            wish("Bike", Some("300"), None, false),
            wish("Camera", None, Some("wish_abc.jpg"), false),
        ];
        let completed = vec![wish("Book", Some("15"), Some("wish_def.jpg"), true)];

        let decoded = decode_wishes(&encode_wishes(&active, &completed));

        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].name, "Bike");
        assert_eq!(decoded[0].price.as_deref(), Some("300"));
        assert_eq!(decoded[0].photo, None);
        assert!(!decoded[0].completed);
        assert_eq!(decoded[1].name, "Camera");
        assert_eq!(decoded[1].price, None);
        assert_eq!(decoded[1].photo.as_deref(), Some("wish_abc.jpg"));
        assert_eq!(decoded[2].name, "Book");
        assert!(decoded[2].completed);
    }

    #[test]
    fn absent_optionals_encode_as_explicit_null() {
        let blob = encode_wishes(&[wish("Bike", None, None, false)], &[]);
        assert!(blob.contains("\"price\":null"));
        assert!(blob.contains("\"photoFileName\":null"));
    }

    #[test]
    fn decode_tolerates_missing_completed_flag() {
        let decoded = decode_wishes(r#"[{"name":"Bike","price":null,"photoFileName":null}]"#);
        assert_eq!(decoded.len(), 1);
        assert!(!decoded[0].completed);
    }

    #[test]
    fn decode_tolerates_missing_optional_fields() {
        let decoded = decode_wishes(r#"[{"name":"Bike"}]"#);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].price, None);
        assert_eq!(decoded[0].photo, None);
    }

    #[test]
    fn malformed_blobs_decode_to_empty() {
        assert!(decode_wishes("").is_empty());
        assert!(decode_wishes("not json").is_empty());
        assert!(decode_wishes("{\"name\":\"Bike\"}").is_empty());
        assert!(decode_wishes("[{\"price\":\"300\"}]").is_empty());
        assert!(decode_wishes("[1,2,3]").is_empty());
    }

    #[test]
    fn decoded_wishes_get_fresh_distinct_ids() {
        let blob = encode_wishes(
            &[wish("Bike", None, None, false), wish("Bike", None, None, false)],
            &[],
        );
        let decoded = decode_wishes(&blob);
        assert_ne!(decoded[0].id, decoded[1].id);
    }

    // --- Store ---

    #[test]
    fn add_blank_name_is_a_no_op() {
        let mut store = empty_store();
        assert!(!store.add("", None, None));
        assert!(!store.add("   ", None, None));
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn add_trims_name_and_price() {
        let mut store = empty_store();
        assert!(store.add("  Bike  ", Some(" 300 ".to_string()), None));
        assert_eq!(store.active()[0].name, "Bike");
        assert_eq!(store.active()[0].price.as_deref(), Some("300"));
    }

    #[test]
    fn add_empty_price_becomes_none() {
        let mut store = empty_store();
        store.add("Bike", Some("   ".to_string()), None);
        assert_eq!(store.active()[0].price, None);
    }

    #[test]
    fn complete_moves_item_and_is_not_repeatable() {
        let mut store = empty_store();
        store.add("Bike", Some("300".to_string()), None);
        let id = store.active()[0].id;

        assert!(store.complete(id));
        assert_eq!(store.active_count(), 0);
        assert_eq!(store.completed_count(), 1);
        assert!(store.completed()[0].completed);

        // Already completed: not found in the active subset, no duplicate.
        assert!(!store.complete(id));
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn delete_removes_from_either_subset() {
        let mut store = empty_store();
        store.add("Bike", None, None);
        store.add("Camera", None, None);
        let bike = store.active()[0].id;
        let camera = store.active()[1].id;
        store.complete(bike);

        assert!(store.delete(bike));
        assert_eq!(store.completed_count(), 0);
        assert!(store.delete(camera));
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn delete_unknown_id_leaves_store_unchanged() {
        let mut store = empty_store();
        store.add("Bike", None, None);
        assert!(!store.delete(Uuid::new_v4()));
        assert_eq!(store.active_count(), 1);
    }

    #[test]
    fn edit_preserves_subset_and_flag() {
        let mut store = empty_store();
        store.add("Bike", Some("300".to_string()), None);
        let id = store.active()[0].id;
        store.complete(id);

        assert!(store.edit(id, "Road bike", Some("450".to_string()), None));
        assert_eq!(store.completed()[0].name, "Road bike");
        assert_eq!(store.completed()[0].price.as_deref(), Some("450"));
        assert!(store.completed()[0].completed);
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn edit_blank_name_is_a_no_op() {
        let mut store = empty_store();
        store.add("Bike", None, None);
        let id = store.active()[0].id;
        assert!(!store.edit(id, "  ", None, None));
        assert_eq!(store.active()[0].name, "Bike");
    }

    #[test]
    fn edit_unknown_id_is_a_no_op() {
        let mut store = empty_store();
        assert!(!store.edit(Uuid::new_v4(), "Bike", None, None));
    }

    #[test]
    fn mutations_persist_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");

        let mut store = WishStore::load(Prefs::open(&path).unwrap());
        store.add("Bike", Some("300".to_string()), None);
        store.add("Camera", None, Some("wish_abc.jpg".to_string()));
        let bike = store.active()[0].id;
        store.complete(bike);

        let reloaded = WishStore::load(Prefs::open(&path).unwrap());
        assert_eq!(reloaded.active_count(), 1);
        assert_eq!(reloaded.active()[0].name, "Camera");
        assert_eq!(reloaded.active()[0].photo.as_deref(), Some("wish_abc.jpg"));
        assert_eq!(reloaded.completed_count(), 1);
        assert_eq!(reloaded.completed()[0].name, "Bike");
    }

    #[test]
    fn load_from_empty_or_corrupt_slot_is_empty() {
        let store = empty_store();
        assert_eq!(store.active_count(), 0);
        assert_eq!(store.completed_count(), 0);

        let prefs = Prefs::open_in_memory().unwrap();
        prefs.put(WISHES_KEY, "garbage{").unwrap();
        let store = WishStore::load(prefs);
        assert_eq!(store.active_count(), 0);
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn bike_example_lifecycle() {
        let mut store = empty_store();
        store.add("Bike", Some("300".to_string()), None);
        assert_eq!(store.active_count(), 1);

        let id = store.active()[0].id;
        store.complete(id);
        assert_eq!(store.active_count(), 0);
        assert!(store.completed()[0].completed);

        store.delete(id);
        assert_eq!(store.completed_count(), 0);
    }
}
