use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::{reflect_, reflect_kind_, reflect_mut_, reflect_ref_, struct_, struct_info_, vec_};

/// Implement `Reflect` and `Struct` for a struct with named fields.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let fj_reflect_path = meta.fj_reflect_path();

    let reflect_ = reflect_(fj_reflect_path);
    let struct_ = struct_(fj_reflect_path);
    let reflect_kind_ = reflect_kind_(fj_reflect_path);
    let reflect_ref_ = reflect_ref_(fj_reflect_path);
    let reflect_mut_ = reflect_mut_(fj_reflect_path);
    let struct_info_ = struct_info_(fj_reflect_path);
    let vec_ = vec_(fj_reflect_path);

    let (impl_generics, _, _) = meta.generics().split_for_impl();
    let self_ty = meta.self_ty();
    let where_clause = meta.where_clause_with(&reflect_, TokenStream::new());

    let ident = meta.ident().to_string();
    let field_len = info.fields().len();
    let members = info.fields().iter().map(|field| field.ident).collect::<Vec<_>>();
    let indices = (0..field_len).collect::<Vec<_>>();
    let field_infos = info
        .fields()
        .iter()
        .map(|field| field.to_info_tokens(fj_reflect_path));

    // Every field counts, accessible or not.
    let zero_checks = members
        .iter()
        .map(|member| quote!(#reflect_::is_zero(&self.#member)))
        .collect::<Vec<_>>();
    let is_zero_tokens = match zero_checks.split_first() {
        None => quote!(true),
        Some((first, rest)) => quote!(#first #(&& #rest)*),
    };

    quote! {
        impl #impl_generics #reflect_ for #self_ty #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            fn is_zero(&self) -> bool {
                #is_zero_tokens
            }
        }

        impl #impl_generics #struct_ for #self_ty #where_clause {
            fn struct_info(&self) -> &'static #struct_info_ {
                static INFO: #struct_info_ = #struct_info_::new(#ident, &[
                    #(#field_infos,)*
                ]);
                &INFO
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#members as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn fields_mut(&mut self) -> #vec_<&mut dyn #reflect_> {
                #vec_::from([#(&mut self.#members as &mut dyn #reflect_),*])
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    }
}
