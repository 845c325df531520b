use alloc::string::String;

use crate::Reflect;
use crate::impls::impl_opaque_reflect;

macro_rules! impl_reflect_for_number {
    ($zero:literal: $($ty:ty),+ $(,)?) => {$(
        impl Reflect for $ty {
            impl_opaque_reflect!(|this| *this == $zero);
        }
    )+};
}

impl_reflect_for_number!(0: u8, u16, u32, u64, u128, usize);
impl_reflect_for_number!(0: i8, i16, i32, i64, i128, isize);
impl_reflect_for_number!(0.0: f32, f64);

impl Reflect for bool {
    impl_opaque_reflect!(|this| !*this);
}

impl Reflect for char {
    impl_opaque_reflect!(|this| *this == '\0');
}

impl Reflect for () {
    impl_opaque_reflect!(|_this| true);
}

impl Reflect for &'static str {
    impl_opaque_reflect!(|this| this.is_empty());
}

impl Reflect for String {
    impl_opaque_reflect!(|this| this.is_empty());
}
