use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::{erased_serialize_, reflect_, reflect_kind_, reflect_mut_, reflect_ref_};

/// Implement `Reflect` for a type marked `#[reflect(opaque)]`.
///
/// The zero check compares against `Default::default()`, the value is
/// encoded through its own `serde::Serialize` impl and printed through its
/// own `Debug` impl.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let fj_reflect_path = meta.fj_reflect_path();

    let reflect_ = reflect_(fj_reflect_path);
    let reflect_kind_ = reflect_kind_(fj_reflect_path);
    let reflect_ref_ = reflect_ref_(fj_reflect_path);
    let reflect_mut_ = reflect_mut_(fj_reflect_path);
    let erased_serialize_ = erased_serialize_(fj_reflect_path);

    let (impl_generics, _, _) = meta.generics().split_for_impl();
    let self_ty = meta.self_ty();
    let where_clause = meta.where_clause_with(
        &quote!('static),
        quote! {
            #self_ty: ::core::default::Default
                + ::core::cmp::PartialEq
                + ::core::fmt::Debug
                + #erased_serialize_,
        },
    );

    quote! {
        impl #impl_generics #reflect_ for #self_ty #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Opaque(self)
            }

            fn is_zero(&self) -> bool {
                ::core::cmp::PartialEq::eq(self, &<Self as ::core::default::Default>::default())
            }

            #[inline]
            fn as_serialize(&self) -> ::core::option::Option<&dyn #erased_serialize_> {
                ::core::option::Option::Some(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    }
}
