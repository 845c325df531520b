use core::fmt;

use crate::Reflect;
use crate::ops::Struct;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected value.
///
/// Each kind corresponds to a variant of [`ReflectRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A composite with named fields.
    Struct,
    /// A single level of indirection that may be absent.
    Pointer,
    /// A dynamically typed box around a concrete value.
    Dynamic,
    /// Any other value, including collections.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Pointer => f.pad("Pointer"),
            Self::Dynamic => f.pad("Dynamic"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_ref`], see [`ReflectMut`] for the mutable
/// counterpart.
///
/// # Examples
///
/// ```
/// # use fj_reflect::{Reflect, ops::{ReflectKind, ReflectRef}};
/// let value: Option<Box<u32>> = Some(Box::new(3));
///
/// let ReflectRef::Pointer(Some(inner)) = value.reflect_ref() else { unreachable!() };
/// assert_eq!(inner.reflect_kind(), ReflectKind::Pointer);
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    /// `None` when the indirection is absent, e.g. `Option::None`.
    Pointer(Option<&'a dyn Reflect>),
    Dynamic(&'a dyn Reflect),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the composite, if this is a [`ReflectRef::Struct`].
    #[inline]
    pub const fn as_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable, kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_mut`].
///
/// # Examples
///
/// ```
/// # use fj_reflect::{Reflect, ops::ReflectMut};
/// let mut value: Option<u32> = Some(3);
///
/// if let ReflectMut::Pointer(Some(inner)) = value.reflect_mut() {
///     *inner.downcast_mut::<u32>().unwrap() = 4;
/// }
/// assert_eq!(value, Some(4));
/// ```
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    /// `None` when the indirection is absent, e.g. `Option::None`.
    Pointer(Option<&'a mut dyn Reflect>),
    Dynamic(&'a mut dyn Reflect),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the [`ReflectKind`] of this view.
    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Dynamic(_) => ReflectKind::Dynamic,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the composite, if this is a [`ReflectMut::Struct`].
    #[inline]
    pub fn as_struct(self) -> Option<&'a mut dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Debug

impl fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct(value) => {
                let value: &dyn Reflect = *value;
                f.debug_tuple("Struct").field(&value).finish()
            }
            Self::Pointer(value) => f.debug_tuple("Pointer").field(value).finish(),
            Self::Dynamic(value) => f.debug_tuple("Dynamic").field(value).finish(),
            Self::Opaque(value) => f.debug_tuple("Opaque").field(value).finish(),
        }
    }
}
