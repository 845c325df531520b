use fj_reflect::Reflect;
use fj_reflect::info::{FieldInfo, OMIT_IF_EMPTY};

// -----------------------------------------------------------------------------
// FieldKey

/// How a single field takes part in a flattened view, see [`resolve_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKey {
    /// The key segment of the field. Empty for promotion groups and for
    /// fields excluded by a `-` tag.
    pub key: &'static str,
    /// The field is excluded from the view.
    pub skip: bool,
    /// The field's own fields are promoted into the parent with no added
    /// path segment.
    pub promote: bool,
}

/// Decides the key of `field` given its current `value`.
///
/// 1. A tag named `-` excludes the field, embedded or not.
/// 2. The `omit-if-empty` option excludes the field while `value` is zero.
/// 3. A non-empty tag name becomes the key and disables promotion.
/// 4. An embedded field without a tag name is a promotion group.
/// 5. Otherwise the declared name is the key.
///
/// Visibility is not checked here: callers drop restricted fields first.
///
/// # Examples
///
/// ```
/// use fj_flatten::resolve_key;
/// use fj_reflect::info::FieldInfo;
///
/// let field = FieldInfo::new("count").with_tag("n,omit-if-empty");
///
/// let key = resolve_key(&field, &5_u32);
/// assert_eq!((key.key, key.skip, key.promote), ("n", false, false));
///
/// assert!(resolve_key(&field, &0_u32).skip);
/// ```
pub fn resolve_key(field: &FieldInfo, value: &dyn Reflect) -> FieldKey {
    let mut skip = false;
    let mut name = "";

    if let Some(tag) = field.tag() {
        if tag.is_skip() {
            return FieldKey {
                key: "",
                skip: true,
                promote: false,
            };
        }
        skip = tag.options().contains(OMIT_IF_EMPTY) && value.is_zero();
        name = tag.name();
    }

    if !name.is_empty() {
        FieldKey {
            key: name,
            skip,
            promote: false,
        }
    } else if field.is_embedded() {
        FieldKey {
            key: "",
            skip,
            promote: true,
        }
    } else {
        FieldKey {
            key: field.name(),
            skip,
            promote: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use fj_reflect::info::{FieldInfo, FieldVisibility};

    use super::{FieldKey, resolve_key};

    fn key(key: &'static str, skip: bool, promote: bool) -> FieldKey {
        FieldKey { key, skip, promote }
    }

    #[test]
    fn declared_name() {
        let field = FieldInfo::new("Color").with_visibility(FieldVisibility::Public);
        assert_eq!(resolve_key(&field, &String::new()), key("Color", false, false));
    }

    #[test]
    fn tag_name_overrides() {
        let field = FieldInfo::new("Color").with_tag("colour");
        assert_eq!(resolve_key(&field, &0_u8), key("colour", false, false));
    }

    #[test]
    fn dash_skips_even_embedded() {
        let field = FieldInfo::new("Inner").with_embedded(true).with_tag("-");
        assert_eq!(resolve_key(&field, &1_u8), key("", true, false));

        let field = FieldInfo::new("Secret").with_tag("-,omit-if-empty");
        assert!(resolve_key(&field, &1_u8).skip);
    }

    #[test]
    fn omit_if_empty_checks_current_value() {
        let field = FieldInfo::new("n").with_tag("count,omit-if-empty");
        assert_eq!(resolve_key(&field, &0_i64), key("count", true, false));
        assert_eq!(resolve_key(&field, &5_i64), key("count", false, false));

        // No name in the tag: the declared name stays.
        let field = FieldInfo::new("n").with_tag(",omit-if-empty");
        assert_eq!(resolve_key(&field, &5_i64), key("n", false, false));
        assert_eq!(resolve_key(&field, &Option::<u8>::None), key("n", true, false));
    }

    #[test]
    fn unrecognized_options_are_ignored() {
        let field = FieldInfo::new("n").with_tag(",omitempty,string");
        assert_eq!(resolve_key(&field, &0_u8), key("n", false, false));
    }

    #[test]
    fn embedded_promotes_unless_named() {
        let field = FieldInfo::new("Point").with_embedded(true);
        assert_eq!(resolve_key(&field, &0_u8), key("", false, true));

        let field = FieldInfo::new("Point").with_embedded(true).with_tag("pt");
        assert_eq!(resolve_key(&field, &0_u8), key("pt", false, false));

        let field = FieldInfo::new("Point").with_embedded(true).with_tag(",omit-if-empty");
        assert_eq!(resolve_key(&field, &0_u8), key("", true, true));
    }
}
