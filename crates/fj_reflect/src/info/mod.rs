//! Static type information: struct and field descriptors, and the tag
//! grammar attached to fields.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod struct_info;
mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldInfo, FieldVisibility};
pub use struct_info::StructInfo;
pub use tag::{OMIT_IF_EMPTY, SKIP_NAME, Tag, TagOptions};
