//! `serde` encoding of [`FlatMap`] and [`FlatMapMut`].

use alloc::vec::Vec;

use fj_reflect::Reflect;
use fj_reflect::ops::ReflectRef;
use serde_core::ser::{Error, Serialize, SerializeMap, Serializer};

use crate::{FlatMap, FlatMapMut, flatten_into};

/// Encodes as a map with keys in ascending order.
///
/// Each leaf encodes by kind:
///
/// - opaque values through [`Reflect::as_serialize`], failing if they have
///   no serde representation;
/// - absent pointers as none;
/// - present pointers and boxes as what they point to;
/// - composites (kept whole because they added no entries) as their own
///   flattened map.
impl Serialize for FlatMap<'_> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(self.sorted_entries(), serializer)
    }
}

/// Encodes exactly like [`FlatMap`], reading every leaf as it is now.
impl Serialize for FlatMapMut<'_> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(self.sorted_entries(), serializer)
    }
}

fn serialize_entries<S>(entries: Vec<(&str, &dyn Reflect)>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, &Leaf(value))?;
    }
    map.end()
}

struct Leaf<'a>(&'a dyn Reflect);

impl Serialize for Leaf<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0.reflect_ref() {
            ReflectRef::Opaque(value) => match value.as_serialize() {
                Some(value) => Serialize::serialize(value, serializer),
                None => Err(S::Error::custom(format_args!(
                    "`{}` has no serde representation",
                    value.reflect_type_path(),
                ))),
            },
            ReflectRef::Pointer(None) => serializer.serialize_none(),
            ReflectRef::Pointer(Some(inner)) | ReflectRef::Dynamic(inner) => {
                Leaf(inner).serialize(serializer)
            }
            ReflectRef::Struct(value) => {
                let mut nested = FlatMap::new();
                flatten_into(value, "", &mut nested);
                nested.serialize(serializer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use fj_reflect::Reflect;
    use fj_reflect::derive::Reflect;
    use fj_reflect::ops::{ReflectKind, ReflectMut, ReflectRef};
    use serde::Serialize;

    use crate::{flatten, flatten_mut};

    #[derive(Reflect)]
    struct Point {
        #[reflect(tag = "X")]
        pub x: i32,
        #[reflect(tag = "Y")]
        pub y: i32,
    }

    #[derive(Reflect)]
    struct Shape {
        #[reflect(embed, tag = "pt")]
        pub point: Point,
        #[reflect(tag = "Color")]
        pub color: String,
    }

    #[derive(Reflect, Serialize, Default, PartialEq, Debug)]
    #[reflect(opaque)]
    struct Rgb(u8, u8, u8);

    #[derive(Reflect)]
    struct Sealed {
        code: u8,
    }

    #[derive(Reflect)]
    struct Mixed {
        pub rgb: Rgb,
        pub tags: Vec<String>,
        pub missing: Option<u8>,
        pub boxed: Box<u16>,
        pub any: Box<dyn Reflect>,
        pub sealed: Sealed,
        pub hits: Cell<u32>,
    }

    /// A leaf without a serde view.
    struct Handle;

    impl Reflect for Handle {
        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Opaque
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque(self)
        }

        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Opaque(self)
        }

        fn is_zero(&self) -> bool {
            false
        }
    }

    #[derive(Reflect)]
    struct WithHandle {
        pub handle: Handle,
    }

    #[test]
    fn encodes_sorted_json() {
        let shape = Shape {
            point: Point { x: 1, y: 2 },
            color: "red".to_string(),
        };
        let map = flatten(&shape).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Color":"red","pt.X":1,"pt.Y":2}"#);
    }

    #[test]
    fn encodes_every_leaf_kind() {
        let mixed = Mixed {
            rgb: Rgb(1, 2, 3),
            tags: vec!["a".to_string()],
            missing: None,
            boxed: Box::new(9),
            any: Box::new(true),
            sealed: Sealed { code: 0 },
            hits: Cell::new(4),
        };
        let map = flatten(&mixed).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"any":true,"boxed":9,"hits":4,"missing":null,"rgb":[1,2,3],"sealed":{},"tags":["a"]}"#
        );
        assert_eq!(mixed.sealed.code, 0);
    }

    #[test]
    fn encoding_follows_current_values() {
        let mixed = Mixed {
            rgb: Rgb::default(),
            tags: Vec::new(),
            missing: Some(1),
            boxed: Box::new(0),
            any: Box::new(()),
            sealed: Sealed { code: 1 },
            hits: Cell::new(0),
        };
        let map = flatten(&mixed).unwrap();

        let before = serde_json::to_value(&map).unwrap();
        mixed.hits.set(10);
        let after = serde_json::to_value(&map).unwrap();

        assert_eq!(before["hits"], 0);
        assert_eq!(after["hits"], 10);
        assert_eq!(after["missing"], 1);
    }

    #[test]
    fn mutable_map_encodes_plain_field_writes() {
        let mut mixed = Mixed {
            rgb: Rgb(1, 1, 1),
            tags: Vec::new(),
            missing: None,
            boxed: Box::new(1),
            any: Box::new(0_u8),
            sealed: Sealed { code: 2 },
            hits: Cell::new(0),
        };
        let mut map = flatten_mut(&mut mixed).unwrap();

        *map.get_mut_as::<Rgb>("rgb").unwrap() = Rgb(4, 5, 6);
        map.get_mut_as::<Vec<String>>("tags").unwrap().push("b".to_string());
        *map.get_mut_as::<u16>("boxed").unwrap() = 12;
        *map.get_mut_as::<u8>("any").unwrap() = 3;
        *map.get_mut_as::<Option<u8>>("missing").unwrap() = Some(1);

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"any":3,"boxed":12,"hits":0,"missing":1,"rgb":[4,5,6],"sealed":{},"tags":["b"]}"#
        );
        drop(map);
        assert_eq!(*mixed.boxed, 12);
        assert_eq!(mixed.sealed.code, 2);
    }

    #[test]
    fn leaf_without_serde_view_fails() {
        let value = WithHandle { handle: Handle };
        let map = flatten(&value).unwrap();
        let err = serde_json::to_string(&map).unwrap_err();
        assert!(err.to_string().contains("has no serde representation"));
    }

    #[test]
    fn encodes_with_ron() {
        let shape = Shape {
            point: Point { x: -4, y: 8 },
            color: String::new(),
        };
        let map = flatten(&shape).unwrap();
        let text = ron::to_string(&map).unwrap();

        let decoded: BTreeMap<String, ron::Value> = ron::from_str(&text).unwrap();
        let keys = decoded.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, ["Color", "pt.X", "pt.Y"]);
        assert_eq!(decoded["pt.X"].clone().into_rust::<i32>().unwrap(), -4);
        assert_eq!(decoded["Color"].clone().into_rust::<String>().unwrap(), "");
    }
}
