use crate::info::Tag;

// -----------------------------------------------------------------------------
// FieldVisibility

/// Whether a field can be reached from outside its declaring type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldVisibility {
    /// Declared `pub`.
    Public,
    /// Anything narrower than `pub`: private, `pub(crate)`, `pub(super)` ...
    Restricted,
}

// -----------------------------------------------------------------------------
// FieldInfo

/// Static descriptor of a named struct field.
///
/// Carries everything needed to decide how a field appears in a flattened
/// view: its declared name, visibility, whether it is embedded (its own
/// fields are promoted into the parent) and the raw serialization tag.
///
/// # Examples
///
/// ```
/// use fj_reflect::info::{FieldInfo, FieldVisibility};
///
/// const INFO: FieldInfo = FieldInfo::new("point")
///     .with_visibility(FieldVisibility::Public)
///     .with_embedded(true)
///     .with_tag("pt,omit-if-empty");
///
/// assert!(INFO.is_exported());
/// assert!(INFO.is_embedded());
/// assert_eq!(INFO.tag().unwrap().name(), "pt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    name: &'static str,
    visibility: FieldVisibility,
    embedded: bool,
    tag: Option<&'static str>,
}

impl FieldInfo {
    /// Creates a restricted, non-embedded, untagged descriptor.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            visibility: FieldVisibility::Restricted,
            embedded: false,
            tag: None,
        }
    }

    #[inline]
    pub const fn with_visibility(mut self, visibility: FieldVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[inline]
    pub const fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    #[inline]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> FieldVisibility {
        self.visibility
    }

    /// Returns `true` if the field is accessible outside its declaring type.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        matches!(self.visibility, FieldVisibility::Public)
    }

    /// Returns `true` if the field was declared embedded (`#[reflect(embed)]`).
    #[inline]
    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the raw tag string, if any.
    #[inline]
    pub const fn raw_tag(&self) -> Option<&'static str> {
        self.tag
    }

    /// Returns the parsed tag, if any.
    #[inline]
    pub fn tag(&self) -> Option<Tag<'static>> {
        self.tag.map(Tag::parse)
    }
}
