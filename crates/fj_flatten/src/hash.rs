//! `FixedHashState`, a `foldhash` build-hasher with a fixed seed.
//!
//! Keys are plain field paths chosen by the program, not by an attacker, so
//! a fixed seed is enough and keeps iteration order stable between runs.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);

/// Build-hasher of [`FlatMap`](crate::FlatMap) and [`FlatMapMut`](crate::FlatMapMut).
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}
