//! Parsing of `#[reflect(...)]` attributes.

use proc_macro2::Span;
use syn::{Attribute, LitStr, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes applied to the type itself.
///
/// - `#[reflect(opaque)]`
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    /// Span of the `opaque` flag, if present.
    pub(crate) opaque: Option<Span>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    if this.opaque.is_some() {
                        return Err(meta.error("duplicate `opaque` flag"));
                    }
                    this.opaque = Some(meta.path.span());
                    return Ok(());
                }
                Err(meta.error("unknown type attribute, expected `opaque`"))
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes applied to a named field.
///
/// - `#[reflect(tag = "name,opt,...")]`
/// - `#[reflect(embed)]`
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// The raw serialization tag.
    pub(crate) tag: Option<LitStr>,
    /// Span of the `embed` flag, if present.
    pub(crate) embed: Option<Span>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("tag") {
                    if this.tag.is_some() {
                        return Err(meta.error("duplicate `tag` attribute"));
                    }
                    this.tag = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                if meta.path.is_ident("embed") {
                    if this.embed.is_some() {
                        return Err(meta.error("duplicate `embed` flag"));
                    }
                    this.embed = Some(meta.path.span());
                    return Ok(());
                }
                Err(meta.error("unknown field attribute, expected `tag = \"...\"` or `embed`"))
            })?;
        }

        Ok(this)
    }
}
