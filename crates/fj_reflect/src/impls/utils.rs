use core::fmt;

use crate::ops::Struct;

/// Implement every `Reflect` method of an opaque leaf whose zero check is
/// given as a closure-like expression over `self`.
///
/// The type must implement `Debug` and `serde::Serialize`.
macro_rules! impl_opaque_reflect {
    (|$this:ident| $is_zero:expr) => {
        $crate::reflection::impl_reflect_cast_fn!(Opaque);

        #[inline]
        fn is_zero(&self) -> bool {
            let $this = self;
            $is_zero
        }

        #[inline]
        fn as_serialize(&self) -> Option<&dyn $crate::__macro_exports::erased_serde::Serialize> {
            Some(self)
        }

        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_opaque_reflect;

/// Debug formatter for composites, see [`Reflect::reflect_debug`].
///
/// Prints every field, accessible or not, in declaration order.
///
/// [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
pub fn struct_debug(value: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(value.struct_info().ident());
    for (info, field) in value.iter_fields() {
        debug.field(info.name(), &field);
    }
    debug.finish()
}
