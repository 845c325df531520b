use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Ident, Visibility, ext::IdentExt};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// StructField

/// A named field of a derived struct.
pub(crate) struct StructField<'a> {
    /// The field as written.
    pub(crate) ident: &'a Ident,
    pub(crate) public: bool,
    pub(crate) attrs: FieldAttributes,
}

impl<'a> StructField<'a> {
    fn new(field: &'a Field) -> syn::Result<Self> {
        let Some(ident) = field.ident.as_ref() else {
            // Callers only pass named fields.
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        Ok(Self {
            ident,
            public: matches!(field.vis, Visibility::Public(_)),
            attrs: FieldAttributes::parse_attrs(&field.attrs)?,
        })
    }

    /// Generate the descriptor expression of this field.
    ///
    /// ```ignore
    /// FieldInfo::new("name")
    ///     .with_visibility(FieldVisibility::Public)
    ///     .with_embedded(true)
    ///     .with_tag("...")
    /// ```
    pub(crate) fn to_info_tokens(&self, fj_reflect_path: &syn::Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(fj_reflect_path);
        let field_visibility_ = crate::path::field_visibility_(fj_reflect_path);

        // `r#type` is declared as `type`.
        let name = self.ident.unraw().to_string();

        let visibility = self.public.then(|| {
            quote! { .with_visibility(#field_visibility_::Public) }
        });
        let embedded = self.attrs.embed.map(|_| {
            quote! { .with_embedded(true) }
        });
        let tag = self.attrs.tag.as_ref().map(|tag| {
            quote! { .with_tag(#tag) }
        });

        quote! {
            #field_info_::new(#name) #visibility #embedded #tag
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct with named fields, or a unit struct (no fields at all).
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub(crate) fn new(
        meta: ReflectMeta<'a>,
        fields: impl IntoIterator<Item = &'a Field>,
    ) -> syn::Result<Self> {
        let fields = fields
            .into_iter()
            .map(StructField::new)
            .collect::<syn::Result<Vec<_>>>()?;
        Ok(Self { meta, fields })
    }

    #[inline]
    pub(crate) fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub(crate) fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }
}
