use alloc::vec::{self, Vec};
use core::iter::FusedIterator;
use core::slice;

use crate::Reflect;
use crate::info::{FieldInfo, StructInfo};

// -----------------------------------------------------------------------------
// Struct

/// Field access for composite values with named fields.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for structs
/// with named fields. Fields are exposed in declaration order, each paired
/// with its static [`FieldInfo`].
///
/// # Examples
///
/// ```
/// use fj_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: i32,
///     b: bool,
/// }
///
/// let foo = Foo { a: 1, b: true };
/// let s: &dyn Struct = &foo;
///
/// let names: Vec<_> = s.iter_fields().map(|(info, _)| info.name()).collect();
/// assert_eq!(names, ["a", "b"]);
/// assert_eq!(s.field("a").unwrap().downcast_ref::<i32>(), Some(&1));
/// ```
pub trait Struct: Reflect {
    /// Returns the static descriptor of this struct type.
    fn struct_info(&self) -> &'static StructInfo;

    /// Returns the value of the field at `index` in declaration order.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the field at `index` in declaration
    /// order.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns mutable references to every field at once, in declaration
    /// order.
    ///
    /// Prefer [`iter_fields_mut`](<dyn Struct>::iter_fields_mut), which pairs
    /// each field with its descriptor.
    fn fields_mut(&mut self) -> Vec<&mut dyn Reflect>;

    /// Returns the number of fields, accessible or not.
    #[inline]
    fn field_len(&self) -> usize {
        self.struct_info().field_len()
    }
}

impl dyn Struct {
    /// Returns the value of the field named `name`.
    ///
    /// Returns `None` if the field does not exist.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.struct_info()
            .index_of(name)
            .and_then(|index| self.field_at(index))
    }

    /// Returns an iterator over `(descriptor, value)` pairs in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }

    /// Returns a mutable reference to the field named `name`.
    ///
    /// Returns `None` if the field does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fj_reflect::{derive::Reflect, ops::Struct};
    ///
    /// #[derive(Reflect)]
    /// struct Foo {
    ///     pub a: i32,
    /// }
    ///
    /// let mut foo = Foo { a: 1 };
    /// let s: &mut dyn Struct = &mut foo;
    ///
    /// *s.field_mut("a").unwrap().downcast_mut::<i32>().unwrap() = 42;
    /// assert_eq!(foo.a, 42);
    /// ```
    #[inline]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.struct_info().index_of(name)?;
        self.field_at_mut(index)
    }

    /// Returns an iterator over `(descriptor, value)` pairs in declaration
    /// order, every value borrowed mutably at the same time.
    #[inline]
    pub fn iter_fields_mut(&mut self) -> StructFieldIterMut<'_> {
        StructFieldIterMut::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the fields of a [`Struct`], see [`iter_fields`].
///
/// [`iter_fields`]: <dyn Struct>::iter_fields
pub struct StructFieldIter<'a> {
    value: &'a dyn Struct,
    fields: &'static [FieldInfo],
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline]
    pub fn new(value: &'a dyn Struct) -> Self {
        Self {
            value,
            fields: value.struct_info().fields(),
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'static FieldInfo, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.fields.get(self.index)?;
        let value = self.value.field_at(self.index)?;
        self.index += 1;
        Some((info, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.fields.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
impl FusedIterator for StructFieldIter<'_> {}

// -----------------------------------------------------------------------------
// StructFieldIterMut

/// A mutable iterator over the fields of a [`Struct`], see
/// [`iter_fields_mut`].
///
/// [`iter_fields_mut`]: <dyn Struct>::iter_fields_mut
pub struct StructFieldIterMut<'a> {
    fields: slice::Iter<'static, FieldInfo>,
    values: vec::IntoIter<&'a mut dyn Reflect>,
}

impl<'a> StructFieldIterMut<'a> {
    /// Creates a new [`StructFieldIterMut`].
    #[inline]
    pub fn new(value: &'a mut dyn Struct) -> Self {
        Self {
            fields: value.struct_info().fields().iter(),
            values: value.fields_mut().into_iter(),
        }
    }
}

impl<'a> Iterator for StructFieldIterMut<'a> {
    type Item = (&'static FieldInfo, &'a mut dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.fields.next()?, self.values.next()?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.fields.len().min(self.values.len());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StructFieldIterMut<'_> {}
impl FusedIterator for StructFieldIterMut<'_> {}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use serde::Serialize;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::FieldVisibility;
    use crate::ops::{ReflectKind, ReflectRef, Struct};

    #[derive(Reflect)]
    struct Point {
        pub x: i32,
        pub y: i32,
    }

    #[derive(Reflect)]
    struct Shape {
        #[reflect(embed, tag = "pt")]
        pub point: Point,
        pub color: String,
        pub(crate) id: u64,
        #[reflect(tag = "count,omit-if-empty")]
        pub r#type: u8,
    }

    #[derive(Reflect)]
    struct Marker;

    #[derive(Reflect)]
    struct Wrapper<T> {
        pub value: T,
    }

    #[derive(Reflect, Serialize, Default, PartialEq, Debug)]
    #[reflect(opaque)]
    struct Rgb(u8, u8, u8);

    fn shape() -> Shape {
        Shape {
            point: Point { x: 1, y: 2 },
            color: String::from("red"),
            id: 0,
            r#type: 0,
        }
    }

    #[test]
    fn descriptors_follow_declaration() {
        let shape = shape();
        let info = Struct::struct_info(&shape);
        assert_eq!(info.ident(), "Shape");

        let names: Vec<_> = info.iter().map(|field| field.name()).collect();
        assert_eq!(names, ["point", "color", "id", "type"]);

        let point = info.field_at(0).unwrap();
        assert!(point.is_embedded());
        assert_eq!(point.raw_tag(), Some("pt"));

        let id = info.field_at(2).unwrap();
        assert_eq!(id.visibility(), FieldVisibility::Restricted);
        assert!(!id.is_exported());
        assert!(id.raw_tag().is_none());
    }

    #[test]
    fn field_access() {
        let shape = shape();
        let value: &dyn Struct = &shape;
        assert_eq!(value.field_len(), 4);
        assert_eq!(value.field("color").unwrap().downcast_ref::<String>().unwrap(), "red");
        assert!(value.field("missing").is_none());
        assert!(value.field_at(4).is_none());

        let ReflectRef::Struct(point) = value.field("point").unwrap().reflect_ref() else {
            panic!("expected a composite");
        };
        assert_eq!(point.field("y").unwrap().downcast_ref::<i32>(), Some(&2));

        let iter = value.iter_fields();
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn mutable_field_access() {
        let mut shape = shape();
        let value: &mut dyn Struct = &mut shape;

        *value.field_mut("color").unwrap().downcast_mut::<String>().unwrap() = String::from("blue");
        *value.field_at_mut(3).unwrap().downcast_mut::<u8>().unwrap() = 2;
        assert!(value.field_at_mut(4).is_none());
        assert!(value.field_mut("missing").is_none());

        let mut names = Vec::new();
        for (info, field) in value.iter_fields_mut() {
            names.push(info.name());
            if let Some(id) = field.downcast_mut::<u64>() {
                *id = 11;
            }
        }
        assert_eq!(names, ["point", "color", "id", "type"]);

        assert_eq!(shape.color, "blue");
        assert_eq!((shape.id, shape.r#type), (11, 2));
        assert_eq!(Struct::fields_mut(&mut Marker).len(), 0);
    }

    #[test]
    fn zero_counts_every_field() {
        let mut shape = Shape {
            point: Point { x: 0, y: 0 },
            color: String::new(),
            id: 7,
            r#type: 0,
        };
        assert!(!shape.is_zero());
        shape.id = 0;
        assert!(shape.is_zero());
        assert!(Marker.is_zero());
    }

    #[test]
    fn unit_and_generic_structs() {
        assert_eq!(Marker.reflect_kind(), ReflectKind::Struct);
        assert_eq!(Struct::field_len(&Marker), 0);

        let wrapper = Wrapper { value: Some(3_u8) };
        let value: &dyn Struct = &wrapper;
        assert_eq!(value.field("value").unwrap().reflect_kind(), ReflectKind::Pointer);
    }

    #[test]
    fn opaque_types_are_leaves() {
        let rgb = Rgb(1, 2, 3);
        assert_eq!(rgb.reflect_kind(), ReflectKind::Opaque);
        assert!(!rgb.is_zero());
        assert!(Rgb::default().is_zero());

        let json = serde_json::to_string(rgb.as_serialize().unwrap()).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[test]
    fn opaque_types_print_their_own_debug() {
        let rgb: &dyn Reflect = &Rgb(1, 2, 3);
        assert_eq!(format!("{rgb:?}"), "Rgb(1, 2, 3)");

        let wrapper: &dyn Reflect = &Wrapper { value: Rgb(0, 0, 9) };
        assert_eq!(format!("{wrapper:?}"), "Wrapper { value: Rgb(0, 0, 9) }");
    }

    #[test]
    fn struct_debug_prints_all_fields() {
        let point: &dyn Reflect = &Point { x: 1, y: 2 };
        assert_eq!(format!("{point:?}"), "Point { x: 1, y: 2 }");
    }
}
