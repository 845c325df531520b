use fj_reflect::Reflect;
use fj_reflect::ops::ReflectRef;

/// Unwraps pointers and boxes around `value` until a composite is found.
///
/// Returns the composite if one is reached. Otherwise, when the chain ends
/// at an absent pointer or at a non-composite, returns `fallback`, which
/// callers set to the value they started from rather than the last layer
/// reached.
///
/// # Examples
///
/// ```
/// use fj_flatten::extract_value;
///
/// let value: Option<Box<u8>> = Some(Box::new(1));
/// let extracted = extract_value(&value, &value);
/// assert!(extracted.is::<Option<Box<u8>>>());
/// ```
pub fn extract_value<'a>(value: &'a dyn Reflect, fallback: &'a dyn Reflect) -> &'a dyn Reflect {
    let mut current = value;
    loop {
        match current.reflect_ref() {
            ReflectRef::Struct(_) => return current,
            ReflectRef::Pointer(Some(inner)) | ReflectRef::Dynamic(inner) => current = inner,
            ReflectRef::Pointer(None) | ReflectRef::Opaque(_) => return fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use fj_reflect::Reflect;
    use fj_reflect::derive::Reflect;
    use fj_reflect::ops::ReflectKind;

    use super::extract_value;

    #[derive(Reflect)]
    struct Point {
        pub x: i32,
    }

    #[test]
    fn composite_is_returned_unchanged() {
        let point = Point { x: 1 };
        let extracted = extract_value(&point, &point);
        assert_eq!(extracted.reflect_kind(), ReflectKind::Struct);
        assert!(extracted.is::<Point>());
    }

    #[test]
    fn pointers_and_boxes_are_unwrapped() {
        let boxed: Box<dyn Reflect> = Box::new(Some(Box::new(Point { x: 2 })));
        let value = Some(boxed);
        let extracted = extract_value(&value, &value);
        assert_eq!(extracted.downcast_ref::<Point>().map(|p| p.x), Some(2));
    }

    #[test]
    fn absent_pointer_falls_back_to_original() {
        let value: Option<Box<Option<Point>>> = Some(Box::new(None));
        let extracted = extract_value(&value, &value);
        assert!(extracted.is::<Option<Box<Option<Point>>>>());
    }

    #[test]
    fn leaf_falls_back_to_original() {
        let value = Box::new(7_u8);
        let extracted = extract_value(&value, &value);
        assert!(extracted.is::<Box<u8>>());

        let other = 1_u8;
        assert!(extract_value(&value, &other).is::<u8>());
    }
}
