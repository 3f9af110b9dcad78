//! Generated descriptor trees for property tests.

use proptest::prelude::*;
use serde_json::Value;

use crate::{Descriptor, Key, Props};

#[derive(Debug, Clone)]
enum Kind {
    Component(String),
    Null,
    Fragment,
}

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        4 => "[a-z][a-z0-9-]{0,7}".prop_map(Kind::Component),
        1 => Just(Kind::Null),
        1 => Just(Kind::Fragment),
    ]
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof!["[a-z0-9]{1,4}".prop_map(Key::from), any::<i64>().prop_map(Key::from)]
}

fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
        "[a-z ]{0,6}".prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..3)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn props() -> impl Strategy<Value = Props> {
    prop::collection::btree_map("[a-z]{1,5}", value(), 0..4)
        .prop_map(|map| map.into_iter().collect())
}

fn node(
    kind: Kind,
    props: Props,
    children: Option<Vec<Descriptor>>,
    key: Option<Key>,
) -> Descriptor {
    let node = match kind {
        Kind::Component(ty) => {
            let node = Descriptor::new(ty).with_props(props);
            match children {
                Some(children) => node.with_children(children),
                None => node,
            }
        }
        Kind::Null => Descriptor::null(),
        Kind::Fragment => Descriptor::fragment(children.unwrap_or_default()),
    };
    match key {
        Some(key) => node.with_key(key),
        None => node,
    }
}

/// Well-formed trees up to four levels deep, sentinels included.
pub fn descriptor() -> impl Strategy<Value = Descriptor> {
    let leaf = (kind(), props(), prop::option::of(key()))
        .prop_map(|(kind, props, key)| node(kind, props, None, key));
    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            kind(),
            props(),
            prop::option::of(prop::collection::vec(inner, 0..4)),
            prop::option::of(key()),
        )
            .prop_map(|(kind, props, children, key)| node(kind, props, children, key))
    })
}
