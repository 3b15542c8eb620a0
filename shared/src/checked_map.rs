use std::collections::{btree_map, BTreeMap};

/// Ordered map that refuses to silently replace or remove a missing value.
///
/// Iteration follows key order, so anything written while walking the map
/// comes out in the same order on every run.
pub struct CheckedMap<K: Ord, V> {
    inner: BTreeMap<K, V>,
}

impl<K: Ord, V> Default for CheckedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> CheckedMap<K, V> {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    /// # Panics
    ///
    /// Panics if the key already has a value. Check first, or use `try_insert`.
    pub fn insert(&mut self, key: K, value: V) {
        if self.try_insert(key, value).is_err() {
            panic!("Cannot insert and replace value for given key. Check first.")
        }
    }

    /// Hands the value back if the key is already taken
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), V> {
        match self.inner.entry(key) {
            btree_map::Entry::Occupied(_) => Err(value),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// # Panics
    ///
    /// Panics if the key has no value. Check whether the map contains it first.
    pub fn remove(&mut self, key: &K) -> V {
        match self.inner.remove(key) {
            Some(value) => value,
            None => panic!(
                "Cannot remove value for key with non-existent value. Check whether map contains key first."
            ),
        }
    }

    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, f: F) {
        self.inner.retain(f);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, K, V> {
        self.inner.iter_mut()
    }

    pub fn values_mut(&mut self) -> btree_map::ValuesMut<'_, K, V> {
        self.inner.values_mut()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
