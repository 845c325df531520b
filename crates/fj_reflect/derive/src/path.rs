//! Paths into `fj_reflect` used by the generated code.
//!
//! Kept in one place so a layout change in `fj_reflect` only touches this
//! module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `fj_reflect` crate from the caller's crate.
///
/// 1. For crates that depend on `fj_reflect`, `::fj_reflect` is returned.
/// 2. For crates that depend on `flatjson`, `::flatjson::reflect` is returned.
/// 3. Otherwise `::fj_reflect` is returned, which is also what `fj_reflect`
///    itself sees through `extern crate self as fj_reflect`.
///
/// This reads the caller's manifest, so it is called once per expansion and
/// the result is passed around.
pub(crate) fn fj_reflect() -> syn::Path {
    fj_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fj_reflect"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn reflect_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn struct_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::ops::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn struct_info_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn field_visibility_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::info::FieldVisibility
    }
}

#[inline(always)]
pub(crate) fn erased_serialize_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::__macro_exports::erased_serde::Serialize
    }
}

#[inline(always)]
pub(crate) fn vec_(fj_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fj_reflect_path::__macro_exports::Vec
    }
}
