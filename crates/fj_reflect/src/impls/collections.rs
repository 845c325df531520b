use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;

use serde_core::Serialize;

use crate::Reflect;
use crate::impls::impl_opaque_reflect;

// Collections are leaves: their elements are never walked into.

impl<T> Reflect for Vec<T>
where
    T: Serialize + Debug + 'static,
{
    impl_opaque_reflect!(|this| this.is_empty());
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Serialize + Debug + 'static,
    V: Serialize + Debug + 'static,
{
    impl_opaque_reflect!(|this| this.is_empty());
}

#[cfg(feature = "std")]
impl<K, V, S> Reflect for std::collections::HashMap<K, V, S>
where
    K: Serialize + Debug + Eq + core::hash::Hash + 'static,
    V: Serialize + Debug + 'static,
    S: core::hash::BuildHasher + 'static,
{
    impl_opaque_reflect!(|this| this.is_empty());
}
