use core::any::{Any, TypeId};
use core::fmt;

use crate::ops::{ReflectKind, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime introspection in [`fj_reflect`].
///
/// A `Reflect` value can tell what [kind](ReflectKind) of value it is, hand
/// out a typed view of itself through [`reflect_ref`], and report whether it
/// currently holds its type's zero value.
///
/// # Kinds
///
/// - [`ReflectRef::Struct`]: a composite with named fields, see [`Struct`].
/// - [`ReflectRef::Pointer`]: a single level of indirection that may be absent,
///   e.g. `Box<T>` or `Option<T>`.
/// - [`ReflectRef::Dynamic`]: a dynamically typed box, e.g. `Box<dyn Reflect>`.
/// - [`ReflectRef::Opaque`]: everything else, including collections.
///
/// # Implementation
///
/// Composites should use [the derive macro](crate::derive::Reflect). Leaf
/// types can either derive with `#[reflect(opaque)]` or implement the trait by
/// hand:
///
/// ```
/// use fj_reflect::{Reflect, ops::{ReflectKind, ReflectMut, ReflectRef}};
///
/// struct Celsius(f32);
///
/// impl Reflect for Celsius {
///     fn reflect_kind(&self) -> ReflectKind {
///         ReflectKind::Opaque
///     }
///
///     fn reflect_ref(&self) -> ReflectRef<'_> {
///         ReflectRef::Opaque(self)
///     }
///
///     fn reflect_mut(&mut self) -> ReflectMut<'_> {
///         ReflectMut::Opaque(self)
///     }
///
///     fn is_zero(&self) -> bool {
///         self.0 == 0.0
///     }
/// }
///
/// assert!(Celsius(0.0).is_zero());
/// ```
///
/// [`fj_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`Struct`]: crate::ops::Struct
pub trait Reflect: Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// Calling [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the
    /// box, which is rarely what the caller wants.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full type name, used for diagnostics.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns a pure enumeration of the [kind](ReflectKind) of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable, kind-specific view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable, kind-specific view of this value.
    ///
    /// Must agree with [`reflect_ref`](Reflect::reflect_ref) on the kind and,
    /// for pointers, on whether the pointee is present.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns `true` if this value equals the zero value of its type.
    ///
    /// Zero values are `0`, `0.0`, `false`, `'\0'`, the empty string, empty
    /// collections and absent pointers. A composite is zero when all of its
    /// fields are, whether or not they are accessible.
    fn is_zero(&self) -> bool;

    /// Returns a type-erased `serde` view of this value, if it has one.
    ///
    /// Only leaves need to provide this: pointers, boxes and composites are
    /// encoded through their contents.
    #[inline]
    fn as_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// Composites print their fields, pointers print their pointee (or
    /// `None`), opaque values print `Opaque(type_path)` unless the
    /// implementation knows better.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(value) => crate::impls::struct_debug(value, f),
            ReflectRef::Pointer(Some(value)) | ReflectRef::Dynamic(value) => {
                value.reflect_debug(f)
            }
            ReflectRef::Pointer(None) => f.write_str("None"),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fj_reflect::Reflect;
    /// let x: &dyn Reflect = &10_i32;
    ///
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<u32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fj_reflect::Reflect;
    /// let x: &dyn Reflect = &10_i32;
    ///
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fj_reflect::Reflect;
    /// let mut value = 10_i32;
    /// let x: &mut dyn Reflect = &mut value;
    ///
    /// *x.downcast_mut::<i32>().unwrap() += 1;
    /// assert_eq!(value, 11);
    /// ```
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `reflect_kind`, `reflect_ref` and `reflect_mut` for a fixed kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::ops::ReflectKind {
            $crate::ops::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;

    use crate::Reflect;

    #[test]
    fn ty_id_sees_through_box() {
        let boxed: Box<dyn Reflect> = Box::new(5_u8);
        assert!(boxed.is::<u8>());
        assert_eq!(boxed.downcast_ref::<u8>(), Some(&5));
    }

    #[test]
    fn downcast_mut_writes_through_box() {
        let mut boxed: Box<dyn Reflect> = Box::new(5_u8);
        *boxed.downcast_mut::<u8>().unwrap() = 6;
        assert_eq!(boxed.downcast_ref::<u8>(), Some(&6));
        assert!(boxed.downcast_mut::<u16>().is_none());
    }

    #[test]
    fn debug_prints_value() {
        let x: &dyn Reflect = &7_i64;
        assert_eq!(format!("{x:?}"), "7");

        let none: &dyn Reflect = &Option::<i32>::None;
        assert_eq!(format!("{none:?}"), "None");
    }
}
