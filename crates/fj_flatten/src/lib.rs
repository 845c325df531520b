//! Flattening of nested composites into a single map.
//!
//! [`flatten`] walks a value implementing [`Reflect`](fj_reflect::Reflect)
//! and returns a [`FlatMap`] from dotted field paths to references into the
//! value's leaves. The map is built once and can be encoded any number of
//! times; every encode reads the fields as they are at that moment.
//!
//! ```
//! use fj_flatten::flatten;
//! use fj_reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Point {
//!     #[reflect(tag = "X")]
//!     pub x: i32,
//!     #[reflect(tag = "Y")]
//!     pub y: i32,
//! }
//!
//! #[derive(Reflect)]
//! struct Shape {
//!     #[reflect(embed, tag = "pt")]
//!     pub point: Point,
//!     #[reflect(tag = "Color")]
//!     pub color: String,
//! }
//!
//! let shape = Shape { point: Point { x: 1, y: 2 }, color: "red".into() };
//! let map = flatten(&shape).unwrap();
//!
//! assert_eq!(map.sorted_keys(), ["Color", "pt.X", "pt.Y"]);
//! assert_eq!(map.get_as::<i32>("pt.Y"), Some(&2));
//! ```
//!
//! # Keys
//!
//! A field's key is its tag name if it has one, else its declared name.
//! Nested composites add one `key.` segment per level. Embedded fields
//! without a tag name add no segment, so their own fields appear directly in
//! the parent. Restricted fields, fields tagged `-`, and fields tagged
//! `omit-if-empty` that currently hold their zero value are left out.
//!
//! An embedded field that adds nothing, such as an embedded composite with
//! no accessible fields, becomes a single entry with an empty key: the
//! current prefix itself.
//!
//! # Liveness
//!
//! [`flatten_mut`] returns a [`FlatMapMut`] of exclusive references, so any
//! field can be written through the map and every later encode observes the
//! write. [`flatten`] holds shared references instead: plain fields cannot
//! change while its map is alive, but `Cell` and `RefCell` fields can, and
//! the map observes their current contents.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod extract;
mod hash;
mod key;
mod map;
mod map_mut;
mod root;
mod traverse;

#[cfg(feature = "serde")]
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use error::FlattenError;
pub use extract::extract_value;
pub use key::{FieldKey, resolve_key};
pub use map::FlatMap;
pub use map_mut::FlatMapMut;
pub use root::{flatten, flatten_mut};
pub use traverse::{flatten_into, flatten_into_mut};
