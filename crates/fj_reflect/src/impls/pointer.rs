use alloc::boxed::Box;

use crate::Reflect;
use crate::ops::{ReflectKind, ReflectMut, ReflectRef};

impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.as_ref().map(|value| value as &dyn Reflect))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self.as_mut().map(|value| value as &mut dyn Reflect))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: Reflect> Reflect for Box<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(Some(&**self))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(Some(&mut **self))
    }

    /// A box always points somewhere, so it is never zero.
    #[inline]
    fn is_zero(&self) -> bool {
        false
    }
}

impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Dynamic
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Dynamic(&**self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Dynamic(&mut **self)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        false
    }
}
