//! Serialization tags attached to fields.
//!
//! A tag is written `name`, `name,opt1,opt2` or `,opt1`. The part before the
//! first comma overrides the field's key; the rest is a comma separated list
//! of options.

use core::fmt;

/// Tag name that excludes a field entirely.
pub const SKIP_NAME: &str = "-";

/// Tag option that excludes a field while it holds its zero value.
pub const OMIT_IF_EMPTY: &str = "omit-if-empty";

// -----------------------------------------------------------------------------
// Tag

/// A parsed serialization tag.
///
/// # Examples
///
/// ```
/// use fj_reflect::info::{OMIT_IF_EMPTY, Tag};
///
/// let tag = Tag::parse("count,omit-if-empty");
/// assert_eq!(tag.name(), "count");
/// assert!(tag.options().contains(OMIT_IF_EMPTY));
///
/// let tag = Tag::parse(",omit-if-empty");
/// assert_eq!(tag.name(), "");
///
/// assert!(Tag::parse("-").is_skip());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag<'a> {
    name: &'a str,
    options: TagOptions<'a>,
}

impl<'a> Tag<'a> {
    /// Splits `raw` at its first comma into a name and an option list.
    #[inline]
    pub fn parse(raw: &'a str) -> Self {
        let (name, options) = raw.split_once(',').unwrap_or((raw, ""));
        Self {
            name,
            options: TagOptions(options),
        }
    }

    /// Returns the override name, possibly empty.
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub const fn options(&self) -> TagOptions<'a> {
        self.options
    }

    /// Returns `true` if the tag name is [`SKIP_NAME`].
    #[inline]
    pub fn is_skip(&self) -> bool {
        self.name == SKIP_NAME
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.0.is_empty() {
            f.write_str(self.name)
        } else {
            write!(f, "{},{}", self.name, self.options.0)
        }
    }
}

// -----------------------------------------------------------------------------
// TagOptions

/// The comma separated option list of a [`Tag`].
///
/// Unrecognized options are carried along and ignored by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Returns `true` if `option` is one of the listed options.
    ///
    /// Matches whole options only: `omit-if-empty-ish` does not contain
    /// `omit-if-empty`.
    #[inline]
    pub fn contains(&self, option: &str) -> bool {
        self.iter().any(|opt| opt == option)
    }

    /// Iterates the non-empty options in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.0.split(',').filter(|opt| !opt.is_empty())
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::{OMIT_IF_EMPTY, Tag};

    #[test]
    fn name_only() {
        let tag = Tag::parse("pt");
        assert_eq!(tag.name(), "pt");
        assert!(tag.options().is_empty());
        assert!(!tag.is_skip());
    }

    #[test]
    fn options_without_name() {
        let tag = Tag::parse(",omit-if-empty,string");
        assert_eq!(tag.name(), "");
        assert!(tag.options().contains(OMIT_IF_EMPTY));
        assert_eq!(tag.options().iter().collect::<Vec<_>>(), ["omit-if-empty", "string"]);
    }

    #[test]
    fn skip_keeps_options() {
        let tag = Tag::parse("-,omit-if-empty");
        assert!(tag.is_skip());
        assert!(tag.options().contains(OMIT_IF_EMPTY));
    }

    #[test]
    fn partial_option_does_not_match() {
        assert!(!Tag::parse("a,omit-if-empty-ish").options().contains(OMIT_IF_EMPTY));
        assert!(!Tag::parse("a,omitempty").options().contains(OMIT_IF_EMPTY));
    }

    #[test]
    fn display_round_trips_raw_text() {
        assert_eq!(Tag::parse("count,omit-if-empty").to_string(), "count,omit-if-empty");
        assert_eq!(Tag::parse("count").to_string(), "count");
    }
}
