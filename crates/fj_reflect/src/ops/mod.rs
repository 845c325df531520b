//! Kind-specific views of reflected values.
//!
//! - [`ReflectKind`]: a pure enumeration of kinds.
//! - [`ReflectRef`]: an immutable view carrying the typed reference.
//! - [`ReflectMut`]: the mutable counterpart of [`ReflectRef`].
//! - [`Struct`]: field access for composites with named fields.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectKind, ReflectMut, ReflectRef};
pub use struct_ops::{Struct, StructFieldIter, StructFieldIterMut};
