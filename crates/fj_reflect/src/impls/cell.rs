use core::cell::{Cell, RefCell};
use core::fmt::Debug;

use serde_core::Serialize;

use crate::Reflect;
use crate::impls::impl_opaque_reflect;

// Cells are how a leaf changes behind a shared reference. Both are opaque:
// a reference handed out for a cell keeps observing later `set`s.

impl<T> Reflect for Cell<T>
where
    T: Reflect + Copy + Serialize + Debug,
{
    impl_opaque_reflect!(|this| this.get().is_zero());
}

impl<T> Reflect for RefCell<T>
where
    T: Reflect + Serialize + Debug,
{
    // A value that is being written to is not known to be zero.
    impl_opaque_reflect!(|this| this.try_borrow().is_ok_and(|value| value.is_zero()));
}
