use compact_str::CompactString;
use rustc_hash::FxHashMap;

/// Static widget-id to jump-key table, owned by the caller and borrowed by
/// the resolver for its lifetime.
///
/// The reverse key-to-id table is derived at construction. Duplicate keys
/// are not rejected: the last pair seen wins in the reverse direction, as
/// with every other duplicate in this mechanism.
#[derive(Clone, Debug, Default)]
pub struct JumpAssignment {
    ids_to_keys: FxHashMap<CompactString, CompactString>,
    keys_to_ids: FxHashMap<CompactString, CompactString>,
}

impl JumpAssignment {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<CompactString>,
        V: Into<CompactString>,
    {
        let mut table = Self::default();
        for (id, key) in pairs {
            table.assign(id, key);
        }
        table
    }

    pub fn assign(&mut self, id: impl Into<CompactString>, key: impl Into<CompactString>) {
        let id = id.into();
        let key = key.into();
        self.keys_to_ids.insert(key.clone(), id.clone());
        self.ids_to_keys.insert(id, key);
    }

    pub fn key_for(&self, id: &str) -> Option<&str> {
        self.ids_to_keys.get(id).map(CompactString::as_str)
    }

    pub fn id_for(&self, key: &str) -> Option<&str> {
        self.keys_to_ids.get(key).map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids_to_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids_to_keys.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/jump/assignment.rs"]
mod tests;
