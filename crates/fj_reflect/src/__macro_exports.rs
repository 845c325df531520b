//! Items referenced by code that `#[derive(Reflect)]` expands into.
//!
//! Users do not need a direct dependency on these crates.

pub use alloc::vec::Vec;
pub use erased_serde;
