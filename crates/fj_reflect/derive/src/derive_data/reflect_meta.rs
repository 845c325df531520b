use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, Path};

use super::TypeAttributes;

/// Information shared by every kind of derived type.
pub(crate) struct ReflectMeta<'a> {
    fj_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("fj_reflect_path", &self.fj_reflect_path.to_token_stream())
            .field("ident", self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub(crate) fn new(ident: &'a Ident, generics: &'a Generics, attrs: TypeAttributes) -> Self {
        Self {
            fj_reflect_path: crate::path::fj_reflect(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub(crate) fn fj_reflect_path(&self) -> &Path {
        &self.fj_reflect_path
    }

    #[inline]
    pub(crate) fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub(crate) fn generics(&self) -> &'a Generics {
        self.generics
    }

    /// The implemented type, e.g. `Foo<T, U>`.
    pub(crate) fn self_ty(&self) -> TokenStream {
        let ident = self.ident;
        let (_, ty_generics, _) = self.generics.split_for_impl();
        quote!(#ident #ty_generics)
    }

    /// Builds a where clause that adds `bound` to every type parameter,
    /// then the user's own predicates, then `extra`.
    ///
    /// ```ignore
    /// where T: #bound, U: #bound, /* user predicates */ #extra
    /// ```
    pub(crate) fn where_clause_with(&self, bound: &TokenStream, extra: TokenStream) -> TokenStream {
        let params = self.generics.type_params().map(|param| &param.ident);
        let predicates = self
            .generics
            .where_clause
            .as_ref()
            .map(|clause| &clause.predicates)
            .filter(|predicates| !predicates.is_empty())
            .map(|predicates| {
                if predicates.trailing_punct() {
                    quote!(#predicates)
                } else {
                    quote!(#predicates,)
                }
            });

        quote! {
            where #(#params: #bound,)* #predicates #extra
        }
    }
}
