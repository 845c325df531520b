use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::ops::Index;

use fj_reflect::Reflect;
use fj_reflect::ops::ReflectRef;
use hashbrown::HashMap;
use hashbrown::hash_map::IntoIter;

use crate::hash::FixedHashState;

// -----------------------------------------------------------------------------
// FlatMap

/// A flat view of a composite: dotted field paths mapped to references
/// into the composite's leaves.
///
/// The map borrows the value it was built from and never owns any leaf.
/// Reading through an entry always observes the field's current contents,
/// which matters for leaves with interior mutability such as `Cell`.
///
/// Entry order is unspecified; [`sorted_keys`](FlatMap::sorted_keys), the
/// `Debug` output and the serde encoding are sorted by key.
pub struct FlatMap<'a> {
    entries: HashMap<String, &'a dyn Reflect, FixedHashState>,
}

impl<'a> FlatMap<'a> {
    /// Creates an empty map.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(FixedHashState),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, FixedHashState),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the leaf registered under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a dyn Reflect> {
        self.entries.get(key).copied()
    }

    /// Returns the leaf under `key` as a `T`.
    ///
    /// Leaves are stored as written in the struct, so an `Option<u32>`
    /// field holds the option. Present pointers and boxes are looked
    /// through until a `T` is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use fj_flatten::flatten;
    /// use fj_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// struct Config {
    ///     pub retries: Option<Box<u32>>,
    /// }
    ///
    /// let config = Config { retries: Some(Box::new(3)) };
    /// let map = flatten(&config).unwrap();
    ///
    /// assert_eq!(map.get_as::<u32>("retries"), Some(&3));
    /// assert!(map.get_as::<Option<Box<u32>>>("retries").is_some());
    /// assert_eq!(map.get_as::<i64>("retries"), None);
    /// ```
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&'a T> {
        let mut value = self.get(key)?;
        loop {
            if let Some(value) = value.downcast_ref::<T>() {
                return Some(value);
            }
            match value.reflect_ref() {
                ReflectRef::Pointer(Some(inner)) | ReflectRef::Dynamic(inner) => value = inner,
                _ => return None,
            }
        }
    }

    /// Iterates the keys in unspecified order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the keys in ascending order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys = self.keys().collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    /// Iterates the entries in unspecified order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a dyn Reflect)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Returns the entries sorted by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &'a dyn Reflect)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }

    /// Registers a leaf. A key that is already present is replaced.
    pub(crate) fn insert(&mut self, key: String, value: &'a dyn Reflect) {
        #[cfg(all(feature = "debug", debug_assertions))]
        if let Some(previous) = self.entries.get(&key) {
            log::warn!(
                "flattened key `{key}` is produced by two fields, `{}` replaces `{}`",
                value.reflect_type_path(),
                previous.reflect_type_path(),
            );
        }
        self.entries.insert(key, value);
    }
}

impl Default for FlatMap<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlatMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted_entries()).finish()
    }
}

impl<'a> Index<&str> for FlatMap<'a> {
    type Output = dyn Reflect;

    /// Returns the leaf registered under `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Self::Output {
        match self.entries.get(key) {
            Some(value) => *value,
            None => panic!("no flattened entry for key `{key}`"),
        }
    }
}

impl<'a> IntoIterator for FlatMap<'a> {
    type Item = (String, &'a dyn Reflect);
    type IntoIter = IntoIter<String, &'a dyn Reflect>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::FlatMap;

    #[test]
    fn sorted_views() {
        let (a, b, c) = (1_u8, 2_u8, 3_u8);
        let mut map = FlatMap::new();
        map.insert("b".to_string(), &b);
        map.insert("c.x".to_string(), &c);
        map.insert("a".to_string(), &a);

        assert_eq!(map.len(), 3);
        assert_eq!(map.sorted_keys(), ["a", "b", "c.x"]);
        assert_eq!(format!("{map:?}"), r#"{"a": 1, "b": 2, "c.x": 3}"#);
    }

    #[test]
    fn later_insert_replaces() {
        let (a, b) = (1_u8, 2_u8);
        let mut map = FlatMap::default();
        map.insert("k".to_string(), &a);
        map.insert("k".to_string(), &b);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_as::<u8>("k"), Some(&2));
    }

    #[test]
    fn index_and_into_iter() {
        let value = 5_i32;
        let mut map = FlatMap::with_capacity(1);
        map.insert("v".to_string(), &value);

        assert_eq!(map["v"].downcast_ref::<i32>(), Some(&5));
        assert!(map.get("w").is_none());
        assert!(!map.contains_key("w"));

        let entries = map.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
        assert_eq!(entries, ["v"]);
    }

    #[test]
    #[should_panic(expected = "no flattened entry")]
    fn index_missing_key_panics() {
        let map = FlatMap::new();
        let _ = &map["missing"];
    }
}
