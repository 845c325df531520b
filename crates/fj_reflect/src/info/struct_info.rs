use core::slice::Iter;

use crate::info::FieldInfo;

/// Static descriptor of a struct with named fields.
///
/// Usually built by the derive macro as a `static` and handed out through
/// [`Struct::struct_info`](crate::ops::Struct::struct_info).
///
/// # Examples
///
/// ```
/// use fj_reflect::info::{FieldInfo, StructInfo};
///
/// static INFO: StructInfo = StructInfo::new("Point", &[
///     FieldInfo::new("x"),
///     FieldInfo::new("y"),
/// ]);
///
/// assert_eq!(INFO.ident(), "Point");
/// assert_eq!(INFO.index_of("y"), Some(1));
/// assert!(INFO.field_at(2).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StructInfo {
    ident: &'static str,
    fields: &'static [FieldInfo],
}

impl StructInfo {
    #[inline]
    pub const fn new(ident: &'static str, fields: &'static [FieldInfo]) -> Self {
        Self { ident, fields }
    }

    /// Returns the type name without its module path.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Returns all field descriptors in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    /// Returns the declaration index of the field named `name`.
    ///
    /// Structs are small, a linear scan is enough.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'static, FieldInfo> {
        self.fields.iter()
    }
}
