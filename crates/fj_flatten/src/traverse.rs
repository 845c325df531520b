use alloc::borrow::Cow;
use alloc::format;

use fj_reflect::Reflect;
use fj_reflect::info::FieldInfo;
use fj_reflect::ops::{ReflectMut, ReflectRef, Struct};

use crate::{FieldKey, FlatMap, FlatMapMut, extract_value, resolve_key};

/// Flattens the accessible fields of `value` into `output`, every key
/// starting with `prefix`.
///
/// Fields are visited in declaration order:
///
/// - restricted fields, and fields the tag excludes, are dropped;
/// - a field that leads to a composite is flattened under `prefix` plus its
///   key and a `.`, or under `prefix` alone when it is a promotion group;
/// - a field that leads to anything else, or to a composite that added no
///   entries, becomes a single entry under `prefix` plus its key. A
///   promotion group has an empty key, so such an entry lands on `prefix`
///   itself.
///
/// Returns the number of entries added, replaced keys included.
///
/// # Examples
///
/// ```
/// use fj_flatten::{FlatMap, flatten_into};
/// use fj_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let (a, b) = (Point { x: 1, y: 2 }, Point { x: 3, y: 4 });
/// let mut map = FlatMap::new();
/// assert_eq!(flatten_into(&a, "a.", &mut map), 2);
/// assert_eq!(flatten_into(&b, "b.", &mut map), 2);
/// assert_eq!(map.sorted_keys(), ["a.x", "a.y", "b.x", "b.y"]);
/// ```
pub fn flatten_into<'a>(value: &'a dyn Struct, prefix: &str, output: &mut FlatMap<'a>) -> usize {
    let mut added = 0;

    for (field, raw) in value.iter_fields() {
        let Some(FieldKey { key, promote, .. }) = admit(field, raw, prefix) else {
            continue;
        };

        let child = extract_value(raw, raw);

        if let ReflectRef::Struct(composite) = child.reflect_ref() {
            let child_added = flatten_into(composite, &child_prefix(prefix, key, promote), output);
            if child_added != 0 {
                added += child_added;
                continue;
            }
        }

        let path = format!("{prefix}{key}");
        log::trace!("registering `{path}` as `{}`", child.reflect_type_path());
        output.insert(path, child);
        added += 1;
    }

    added
}

/// Mutable counterpart of [`flatten_into`], producing the same keys.
///
/// Every entry is an exclusive reference to its leaf, so writes through
/// the map land in `value` and a later encode observes them.
///
/// # Examples
///
/// ```
/// use fj_flatten::{FlatMapMut, flatten_into_mut};
/// use fj_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Point {
///     pub x: i32,
///     pub y: i32,
/// }
///
/// let mut point = Point { x: 1, y: 2 };
/// let mut map = FlatMapMut::new();
/// assert_eq!(flatten_into_mut(&mut point, "p.", &mut map), 2);
///
/// *map.get_mut_as::<i32>("p.y").unwrap() = 5;
/// drop(map);
/// assert_eq!(point.y, 5);
/// ```
pub fn flatten_into_mut<'a>(
    value: &'a mut dyn Struct,
    prefix: &str,
    output: &mut FlatMapMut<'a>,
) -> usize {
    let mut added = 0;

    for (field, raw) in value.iter_fields_mut() {
        let Some(FieldKey { key, promote, .. }) = admit(field, &*raw, prefix) else {
            continue;
        };

        // Whether the field expands is decided on a shared view first, since
        // an exclusive borrow handed to the recursion cannot be taken back.
        let expands = match extract_value(&*raw, &*raw).reflect_ref() {
            ReflectRef::Struct(composite) => Some(has_entries(composite)),
            _ => None,
        };

        let child: &'a mut dyn Reflect = match expands {
            None => raw,
            Some(expands) => {
                let Some(composite) = extract_composite_mut(raw) else {
                    continue;
                };
                if expands {
                    let nested = child_prefix(prefix, key, promote);
                    added += flatten_into_mut(composite, &nested, output);
                    continue;
                }
                composite
            }
        };

        let path = format!("{prefix}{key}");
        log::trace!("registering `{path}` as `{}`", child.reflect_type_path());
        output.insert(path, child);
        added += 1;
    }

    added
}

/// Resolves the key of `field`, or returns `None` if it takes no part in
/// the view.
fn admit(field: &FieldInfo, value: &dyn Reflect, prefix: &str) -> Option<FieldKey> {
    if !field.is_exported() {
        log::trace!("skipping restricted field `{prefix}{}`", field.name());
        return None;
    }

    let key = resolve_key(field, value);
    if key.skip || (key.key.is_empty() && !key.promote) {
        log::trace!("skipping field `{prefix}{}` by its tag", field.name());
        return None;
    }
    Some(key)
}

fn child_prefix<'p>(prefix: &'p str, key: &str, promote: bool) -> Cow<'p, str> {
    if promote {
        Cow::Borrowed(prefix)
    } else {
        Cow::Owned(format!("{prefix}{key}."))
    }
}

/// Returns `true` if flattening `value` adds at least one entry.
///
/// Every admitted field adds an entry, either its own or those of the
/// composite it leads to, so only the direct fields need checking.
fn has_entries(value: &dyn Struct) -> bool {
    value
        .iter_fields()
        .any(|(field, raw)| admit(field, raw, "").is_some())
}

/// Unwraps pointers and boxes around `value` until a composite is found.
fn extract_composite_mut(value: &mut dyn Reflect) -> Option<&mut dyn Struct> {
    match value.reflect_mut() {
        ReflectMut::Struct(composite) => Some(composite),
        ReflectMut::Pointer(Some(inner)) | ReflectMut::Dynamic(inner) => {
            extract_composite_mut(inner)
        }
        ReflectMut::Pointer(None) | ReflectMut::Opaque(_) => None,
    }
}
