use syn::{Data, DataStruct, DeriveInput, Fields};

use super::{ReflectMeta, ReflectStruct, TypeAttributes};

/// The kind of a derived type, decided from its shape and attributes.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(&input.ident, &input.generics, attrs);

        if opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(DataStruct {
                fields: Fields::Named(fields),
                ..
            }) => ReflectStruct::new(meta, &fields.named).map(Self::Struct),
            Data::Struct(DataStruct {
                fields: Fields::Unit,
                ..
            }) => ReflectStruct::new(meta, core::iter::empty()).map(Self::Struct),
            Data::Struct(DataStruct {
                fields: Fields::Unnamed(fields),
                ..
            }) => Err(syn::Error::new_spanned(
                fields,
                "tuple structs have no field names to flatten, \
                 add `#[reflect(opaque)]` to treat the type as a leaf",
            )),
            Data::Enum(data) => Err(syn::Error::new_spanned(
                data.enum_token,
                "enums cannot be flattened, \
                 add `#[reflect(opaque)]` to treat the type as a leaf",
            )),
            Data::Union(data) => Err(syn::Error::new_spanned(
                data.union_token,
                "unions cannot be reflected",
            )),
        }
    }
}
