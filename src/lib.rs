#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use fj_flatten::{FieldKey, FlatMap, FlatMapMut, FlattenError};
pub use fj_flatten::{extract_value, resolve_key};
pub use fj_flatten::{flatten, flatten_into, flatten_into_mut, flatten_mut};
pub use fj_reflect as reflect;
pub use fj_reflect::Reflect;
pub use fj_reflect::derive::Reflect;

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::String;

    use crate::{FlattenError, Reflect, flatten, flatten_mut};

    #[derive(Reflect)]
    struct Account {
        pub name: String,
        #[reflect(tag = "-")]
        pub password: String,
        #[reflect(embed)]
        pub limits: Limits,
    }

    #[derive(Reflect)]
    struct Limits {
        #[reflect(tag = "max_requests,omit-if-empty")]
        pub requests: u32,
        pub burst: u16,
    }

    #[test]
    fn facade_flattens() {
        let account = Account {
            name: String::from("ada"),
            password: String::from("secret"),
            limits: Limits {
                requests: 0,
                burst: 4,
            },
        };
        let map = flatten(&account).unwrap();
        assert_eq!(map.sorted_keys(), ["burst", "name"]);
        assert_eq!(map.get_as::<u16>("burst"), Some(&4));
    }

    #[test]
    fn facade_writes_through_mutable_map() {
        let mut account = Account {
            name: String::from("ada"),
            password: String::new(),
            limits: Limits {
                requests: 3,
                burst: 1,
            },
        };
        let mut map = flatten_mut(&mut account).unwrap();
        assert_eq!(map.sorted_keys(), ["burst", "max_requests", "name"]);

        *map.get_mut_as::<u32>("max_requests").unwrap() = 0;
        drop(map);
        assert_eq!(account.limits.requests, 0);
    }

    #[test]
    fn facade_reports_invalid_input() {
        let err = flatten(&1.5_f64).unwrap_err();
        assert!(matches!(err, FlattenError::InvalidInputKind { .. }));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn facade_encodes() {
        let limits = Limits {
            requests: 10,
            burst: 2,
        };
        let map = flatten(&limits).unwrap();
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"burst":2,"max_requests":10}"#
        );
    }
}
