use batchtrace_engine::{build_tree, tree_stats, validate_tree};
use batchtrace_types::BatchNode;

fn three_level_tree() -> BatchNode {
    serde_json::from_str(
        r#"{
            "code": "ROOT",
            "quantity": 1000,
            "unit": "kg",
            "used": 250,
            "remaining": 750,
            "children": [
                {
                    "code": "CHILD",
                    "quantity": 250,
                    "unit": "kg",
                    "used": 100,
                    "remaining": 150,
                    "children": [
                        { "code": "GRANDCHILD", "quantity": 100, "unit": "kg", "used": 0, "remaining": 100 }
                    ]
                }
            ]
        }"#,
    )
    .expect("valid tree")
}

#[test]
fn test_absent_root_yields_empty_model() {
    assert!(build_tree(None).is_empty());
}

#[test]
fn test_single_node_title_and_key() {
    let root: BatchNode = serde_json::from_str(
        r#"{"code":"B1","quantity":100,"unit":"kg","used":40,"remaining":60,"children":[]}"#,
    )
    .unwrap();

    let model = build_tree(Some(&root));

    insta::assert_json_snapshot!(model, @r#"
    [
      {
        "title": "B1 — 100kg (Used: 40, Remain: 60)",
        "key": "B1",
        "children": []
      }
    ]
    "#);
}

#[test]
fn test_three_levels_keep_depth() {
    let root = three_level_tree();
    let model = build_tree(Some(&root));

    assert_eq!(model.len(), 1);
    assert_eq!(model[0].children.len(), 1);
    assert_eq!(model[0].children[0].children[0].key, "GRANDCHILD");
    assert_eq!(
        model[0].children[0].children[0].title,
        "GRANDCHILD — 100kg (Used: 0, Remain: 100)"
    );
    assert!(model[0].children[0].children[0].children.is_empty());
}

#[test]
fn test_build_is_deterministic() {
    let root = three_level_tree();
    assert_eq!(build_tree(Some(&root)), build_tree(Some(&root)));
}

#[test]
fn test_child_order_is_preserved() {
    let root = BatchNode::new("R", 3.0, "kg")
        .with_child(BatchNode::new("C2", 1.0, "kg"))
        .with_child(BatchNode::new("C1", 2.0, "kg"));

    let model = build_tree(Some(&root));
    let keys: Vec<&str> = model[0].children.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["C2", "C1"]);
}

#[test]
fn test_inconsistent_quantities_pass_through() {
    let root = BatchNode::new("BAD", 10.0, "kg").with_usage(15.0, 3.0);
    let model = build_tree(Some(&root));

    assert_eq!(model[0].title, "BAD — 10kg (Used: 15, Remain: 3)");
    assert_eq!(validate_tree(&root).len(), 2);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let depth = 10_000;
    let mut node = BatchNode::new("N0", 1.0, "kg");
    for i in 1..depth {
        node = BatchNode::new(format!("N{}", i), 1.0, "kg").with_child(node);
    }

    let model = build_tree(Some(&node));
    assert_eq!(model[0].key, format!("N{}", depth - 1));
    assert_eq!(tree_stats(Some(&node)).max_depth, depth);

    // Dismantle both structures iteratively so the recursive drop glue
    // does not run on a 10k-deep chain.
    let mut views = model;
    while let Some(mut view) = views.pop() {
        views.append(&mut view.children);
    }
    let mut nodes = vec![node];
    while let Some(mut n) = nodes.pop() {
        if let Some(children) = n.children.take() {
            nodes.extend(children);
        }
    }
}
