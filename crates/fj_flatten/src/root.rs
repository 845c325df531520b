use fj_reflect::Reflect;
use fj_reflect::ops::{ReflectMut, ReflectRef, Struct};

use crate::{FlatMap, FlatMapMut, FlattenError, flatten_into, flatten_into_mut};

/// Flattens a composite into a [`FlatMap`] of dotted paths to its leaves.
///
/// `value` may be the composite itself or any chain of `Option`, `Box` and
/// `Box<dyn Reflect>` around it.
///
/// # Errors
///
/// Returns [`FlattenError::InvalidInputKind`] if the chain ends at an absent
/// pointer or at anything other than a composite.
///
/// # Examples
///
/// ```
/// use fj_flatten::{FlattenError, flatten};
///
/// assert!(matches!(flatten(&42), Err(FlattenError::InvalidInputKind { .. })));
/// ```
pub fn flatten(value: &dyn Reflect) -> Result<FlatMap<'_>, FlattenError> {
    let mut current = value;
    let composite = loop {
        match current.reflect_ref() {
            ReflectRef::Struct(composite) => break composite,
            ReflectRef::Pointer(Some(inner)) | ReflectRef::Dynamic(inner) => current = inner,
            ReflectRef::Pointer(None) | ReflectRef::Opaque(_) => {
                return Err(FlattenError::InvalidInputKind {
                    kind: current.reflect_kind(),
                    type_path: current.reflect_type_path(),
                });
            }
        }
    };

    let mut output = FlatMap::with_capacity(composite.field_len());
    let added = flatten_into(composite, "", &mut output);
    log::debug!(
        "flattened `{}` into {} entries ({added} registered)",
        composite.reflect_type_path(),
        output.len(),
    );

    Ok(output)
}

/// Flattens a composite into a [`FlatMapMut`] of dotted paths to exclusive
/// references to its leaves.
///
/// Accepts the same inputs and produces the same keys as [`flatten`].
/// Writing through an entry changes the field in `value`, so a map built
/// once can be encoded again after any number of updates.
///
/// # Errors
///
/// Returns [`FlattenError::InvalidInputKind`] if the chain ends at an absent
/// pointer or at anything other than a composite.
///
/// # Examples
///
/// ```
/// use fj_flatten::flatten_mut;
/// use fj_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Stats {
///     pub count: u32,
/// }
///
/// let mut stats = Stats { count: 0 };
/// let mut map = flatten_mut(&mut stats).unwrap();
///
/// *map.get_mut_as::<u32>("count").unwrap() = 5;
/// assert_eq!(map.get_as::<u32>("count"), Some(&5));
/// ```
pub fn flatten_mut(value: &mut dyn Reflect) -> Result<FlatMapMut<'_>, FlattenError> {
    let composite = root_composite_mut(value)?;
    let type_path = composite.reflect_type_path();

    let mut output = FlatMapMut::with_capacity(composite.field_len());
    let added = flatten_into_mut(composite, "", &mut output);
    log::debug!(
        "flattened `{type_path}` for writing into {} entries ({added} registered)",
        output.len(),
    );

    Ok(output)
}

fn root_composite_mut(value: &mut dyn Reflect) -> Result<&mut dyn Struct, FlattenError> {
    let kind = value.reflect_kind();
    let type_path = value.reflect_type_path();
    match value.reflect_mut() {
        ReflectMut::Struct(composite) => Ok(composite),
        ReflectMut::Pointer(Some(inner)) | ReflectMut::Dynamic(inner) => root_composite_mut(inner),
        ReflectMut::Pointer(None) | ReflectMut::Opaque(_) => {
            Err(FlattenError::InvalidInputKind { kind, type_path })
        }
    }
}
