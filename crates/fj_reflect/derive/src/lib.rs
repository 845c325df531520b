//! See the [`Reflect`] derive macro.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `Reflect`
/// - `Struct` (for `struct T { ... }` and `struct T;`)
///
/// Every field of a derived struct must itself implement `Reflect`. Type
/// parameters get a `Reflect` bound.
///
/// Unit structs are composites with no fields. Tuple structs and enums have no
/// field names to flatten and are rejected unless marked `opaque`.
///
/// ## Field Tags
///
/// A field can carry a serialization tag, written `name`, `name,opt,...` or
/// `,opt`. The name overrides the field's key, `-` excludes the field, and the
/// `omit-if-empty` option excludes it while it holds its zero value.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Stats {
///     #[reflect(tag = "count,omit-if-empty")]
///     pub n: u32,
///     #[reflect(tag = "-")]
///     pub scratch: String,
/// }
/// ```
///
/// This attribute can only be applied on fields.
///
/// ## Embedded Fields
///
/// An embedded field has its own fields promoted into the parent with no
/// added path segment, unless its tag gives it a name.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Outer {
///     #[reflect(embed)]
///     pub inner: Inner,
///     pub label: String,
/// }
/// ```
///
/// This attribute can only be applied on fields.
///
/// ## Opaque Types
///
/// The `opaque` flag treats the type as a single leaf instead of a
/// composite. Its fields are not inspected, so it must implement `Default`
/// and `PartialEq` for the zero check, `serde::Serialize` for encoding and
/// `Debug` for printing.
///
/// ```rust, ignore
/// #[derive(Reflect, Default, PartialEq, Debug, Serialize)]
/// #[reflect(opaque)]
/// struct Rgb(u8, u8, u8);
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Visibility
///
/// Only fields declared `pub` are reported as accessible. `pub(crate)`,
/// `pub(super)` and private fields are still described, but consumers treat
/// them as hidden.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
