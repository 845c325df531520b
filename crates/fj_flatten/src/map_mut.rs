use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::ops::{Index, IndexMut};

use fj_reflect::Reflect;
use fj_reflect::ops::{ReflectMut, ReflectRef};
use hashbrown::HashMap;
use hashbrown::hash_map::IntoIter;

use crate::hash::FixedHashState;

// -----------------------------------------------------------------------------
// FlatMapMut

/// A flat view of a composite whose entries are exclusive references into
/// the composite's leaves, see [`flatten_mut`](crate::flatten_mut).
///
/// Writing through an entry changes the field itself, and every later read
/// or encode of the map observes the change. Keys are the same ones
/// [`FlatMap`](crate::FlatMap) would produce for the same value.
///
/// Entry order is unspecified; [`sorted_keys`](FlatMapMut::sorted_keys), the
/// `Debug` output and the serde encoding are sorted by key.
pub struct FlatMapMut<'a> {
    entries: HashMap<String, &'a mut dyn Reflect, FixedHashState>,
}

impl<'a> FlatMapMut<'a> {
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
    pub fn get(&self, key: &str) -> Option<&dyn Reflect> {
        self.entries.get(key).map(|value| &**value)
    }

    /// Returns the leaf registered under `key` for writing.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        self.entries.get_mut(key).map(|value| &mut **value)
    }

    /// Returns the leaf under `key` as a `T`, looking through present
    /// pointers and boxes like [`FlatMap::get_as`](crate::FlatMap::get_as).
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
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

    /// Returns the leaf under `key` as a `T` for writing, looking through
    /// present pointers and boxes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fj_flatten::flatten_mut;
    /// use fj_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// struct Config {
    ///     pub retries: Option<Box<u32>>,
    /// }
    ///
    /// let mut config = Config { retries: Some(Box::new(3)) };
    /// let mut map = flatten_mut(&mut config).unwrap();
    ///
    /// *map.get_mut_as::<u32>("retries").unwrap() += 1;
    /// assert_eq!(map.get_as::<u32>("retries"), Some(&4));
    /// ```
    pub fn get_mut_as<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        downcast_through(self.get_mut(key)?)
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
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Reflect)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), &**value))
    }

    /// Iterates the entries for writing, in unspecified order.
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut dyn Reflect)> + '_ {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), &mut **value))
    }

    /// Returns the entries sorted by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &dyn Reflect)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }

    /// Registers a leaf. A key that is already present is replaced.
    pub(crate) fn insert(&mut self, key: String, value: &'a mut dyn Reflect) {
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

fn downcast_through<T: Any>(value: &mut dyn Reflect) -> Option<&mut T> {
    if value.is::<T>() {
        return value.downcast_mut::<T>();
    }
    match value.reflect_mut() {
        ReflectMut::Pointer(Some(inner)) | ReflectMut::Dynamic(inner) => downcast_through(inner),
        _ => None,
    }
}

impl Default for FlatMapMut<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FlatMapMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted_entries()).finish()
    }
}

impl Index<&str> for FlatMapMut<'_> {
    type Output = dyn Reflect;

    /// Returns the leaf registered under `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no flattened entry for key `{key}`"),
        }
    }
}

impl IndexMut<&str> for FlatMapMut<'_> {
    /// Returns the leaf registered under `key` for writing.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index_mut(&mut self, key: &str) -> &mut Self::Output {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("no flattened entry for key `{key}`"),
        }
    }
}

impl<'a> IntoIterator for FlatMapMut<'a> {
    type Item = (String, &'a mut dyn Reflect);
    type IntoIter = IntoIter<String, &'a mut dyn Reflect>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
