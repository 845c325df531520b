//! Reflection for foreign types.
//!
//! ## Implemented Menu
//!
//! - opaque:
//!     - `u8`-`u128`, `usize`, `i8`-`i128`, `isize`, `f32`, `f64`
//!     - `bool`, `char`, `()`
//!     - `&'static str`, `String`
//!     - `Vec<T>`, `BTreeMap<K, V>`, `HashMap<K, V, S>` ("std" feature)
//!     - `Cell<T>`, `RefCell<T>`
//! - pointer:
//!     - `Option<T>`, `Box<T>`
//! - dynamic:
//!     - `Box<dyn Reflect>`
//!
//! Every opaque type here also provides [`Reflect::as_serialize`].
//!
//! [`Reflect::as_serialize`]: crate::Reflect::as_serialize

// -----------------------------------------------------------------------------
// Modules

mod utils;

mod cell;
mod collections;
mod native;
mod pointer;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use utils::impl_opaque_reflect;
pub use utils::struct_debug;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use crate::Reflect;
    use crate::ops::{ReflectKind, ReflectMut, ReflectRef};

    #[test]
    fn zero_values() {
        assert!(0_u8.is_zero());
        assert!(0_i128.is_zero());
        assert!(0.0_f64.is_zero());
        assert!(false.is_zero());
        assert!('\0'.is_zero());
        assert!(().is_zero());
        assert!("".is_zero());
        assert!(String::new().is_zero());
        assert!(Vec::<u8>::new().is_zero());
        assert!(BTreeMap::<u8, u8>::new().is_zero());
        assert!(Option::<u8>::None.is_zero());

        assert!(!1_u8.is_zero());
        assert!(!(-0.5_f32).is_zero());
        assert!(!true.is_zero());
        assert!(!"x".is_zero());
        assert!(!vec![0_u8].is_zero());
        assert!(!Some(0_u8).is_zero());
        assert!(!Box::new(0_u8).is_zero());
    }

    #[test]
    fn pointer_kinds() {
        let value = Some(Box::new(3_u32));
        let ReflectRef::Pointer(Some(inner)) = value.reflect_ref() else {
            panic!("expected a present pointer");
        };
        assert_eq!(inner.reflect_kind(), ReflectKind::Pointer);
        let ReflectRef::Pointer(Some(leaf)) = inner.reflect_ref() else {
            panic!("expected a boxed value");
        };
        assert_eq!(leaf.downcast_ref::<u32>(), Some(&3));

        let none: Option<u32> = None;
        assert!(matches!(none.reflect_ref(), ReflectRef::Pointer(None)));
    }

    #[test]
    fn pointer_views_are_mutable() {
        let mut value = Some(Box::new(3_u32));
        let ReflectMut::Pointer(Some(inner)) = value.reflect_mut() else {
            panic!("expected a present pointer");
        };
        let ReflectMut::Pointer(Some(leaf)) = inner.reflect_mut() else {
            panic!("expected a boxed value");
        };
        *leaf.downcast_mut::<u32>().unwrap() = 8;
        assert_eq!(value.as_deref(), Some(&8));

        let mut dynamic: Box<dyn Reflect> = Box::new(1_i8);
        let ReflectMut::Dynamic(inner) = dynamic.reflect_mut() else {
            panic!("expected a dynamic value");
        };
        assert_eq!(inner.reflect_mut().kind(), ReflectKind::Opaque);

        let mut none: Option<u32> = None;
        assert!(matches!(none.reflect_mut(), ReflectMut::Pointer(None)));
    }

    #[test]
    fn dynamic_box() {
        let value: Box<dyn Reflect> = Box::new(String::from("hi"));
        assert_eq!(value.reflect_kind(), ReflectKind::Dynamic);
        let ReflectRef::Dynamic(inner) = value.reflect_ref() else {
            panic!("expected a dynamic value");
        };
        assert_eq!(inner.downcast_ref::<String>().map(String::as_str), Some("hi"));
        assert!(!value.is_zero());
    }

    #[test]
    fn cells_follow_their_contents() {
        let cell = Cell::new(0_i32);
        assert!(cell.is_zero());
        cell.set(4);
        assert!(!cell.is_zero());

        let cell = RefCell::new(String::new());
        assert!(cell.is_zero());
        let guard = cell.borrow_mut();
        assert!(!cell.is_zero());
        drop(guard);
        cell.borrow_mut().push('a');
        assert!(!cell.is_zero());
    }

    #[test]
    fn opaque_debug_and_serialize() {
        let value: &dyn Reflect = &Cell::new(9_u16);
        assert_eq!(format!("{value:?}"), "Cell { value: 9 }");

        let value: &dyn Reflect = &vec![1, 2];
        let json = serde_json::to_string(value.as_serialize().unwrap()).unwrap();
        assert_eq!(json, "[1,2]");

        let none: &dyn Reflect = &Option::<u8>::None;
        assert!(none.as_serialize().is_none());
    }
}
