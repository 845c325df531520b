//! Field-level introspection for the `flatjson` workspace.
//!
//! A type that implements [`Reflect`] can describe what kind of value it is
//! (a composite [`Struct`](ops::Struct), a pointer, a dynamically typed box or
//! an opaque leaf), whether it currently holds its type's zero value, and, for
//! composites, the ordered list of its fields together with their
//! [`FieldInfo`](info::FieldInfo) descriptors.
//!
//! Composite types normally get their implementation from
//! [`derive::Reflect`]:
//!
//! ```
//! use fj_reflect::{Reflect, derive::Reflect, ops::{ReflectRef, Struct}};
//!
//! #[derive(Reflect)]
//! pub struct Point {
//!     pub x: i32,
//!     pub y: i32,
//! }
//!
//! let p = Point { x: 1, y: 2 };
//! let ReflectRef::Struct(s) = p.reflect_ref() else { unreachable!() };
//! assert_eq!(s.field_len(), 2);
//! assert_eq!(s.struct_info().field_at(0).unwrap().name(), "x");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::fj_reflect::...` paths when it cannot find a
// dependency entry; this alias keeps them valid inside the crate itself.
extern crate self as fj_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::Reflect;
pub use fj_reflect_derive as derive;
