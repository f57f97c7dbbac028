// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading input trees from JSON.

#![cfg(feature = "serde")]

use understory_sunburst::{Node, Sunburst, SunburstConfig};

const FLARE: &str = r#"{
    "id": 0,
    "name": "flare",
    "children": [
        {
            "id": 1,
            "name": "analytics",
            "children": [
                { "id": 2, "name": "cluster", "value": 48716 },
                { "id": 3, "name": "graph", "value": 1302 }
            ]
        },
        { "id": 4, "name": "animate", "weight": 2000.5 },
        { "id": 5, "name": "empty" }
    ]
}"#;

#[test]
fn flare_style_json_loads() {
    let tree: Node<u32> = serde_json::from_str(FLARE).unwrap();
    assert_eq!(tree.children.len(), 3);
    assert_eq!(tree.children[0].children[0].weight, 48716.0);
    assert_eq!(tree.children[1].weight, 2000.5);
    assert_eq!(tree.children[2].weight, 0.0);
    assert!(tree.children[2].is_leaf());

    let sunburst = Sunburst::new(&tree, SunburstConfig::default()).unwrap();
    assert_eq!(sunburst.hierarchy().root().aggregate_weight, 52018.5);
    assert_eq!(sunburst.title(&1).as_deref(), Some("flare/analytics\n50,018"));
}

#[test]
fn nodes_round_trip_through_json() {
    let tree = Node::new("root".to_owned(), "root")
        .with_child(Node::leaf("a".to_owned(), "A", 1.5))
        .with_child(
            Node::new("b".to_owned(), "B").with_child(Node::leaf("c".to_owned(), "C", 2.0)),
        );
    let json = serde_json::to_string(&tree).unwrap();
    let back: Node<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn malformed_weights_are_rejected_after_loading() {
    let json = r#"{ "id": 0, "name": "r", "children": [{ "id": 1, "name": "x", "value": -3 }] }"#;
    let tree: Node<u32> = serde_json::from_str(json).unwrap();
    assert!(Sunburst::new(&tree, SunburstConfig::default()).is_err());
}
