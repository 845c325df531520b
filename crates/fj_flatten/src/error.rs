use fj_reflect::ops::ReflectKind;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// An error returned by [`flatten`](crate::flatten).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlattenError {
    /// The input, after unwrapping every pointer and box, is not a composite.
    ///
    /// `kind` is [`ReflectKind::Pointer`] when the chain ended at an absent
    /// pointer.
    #[error("cannot flatten a value of kind {kind} (`{type_path}`), expected a struct")]
    InvalidInputKind {
        kind: ReflectKind,
        type_path: &'static str,
    },
}
