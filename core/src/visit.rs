//! Traversal helpers over descriptor trees.
//!
//! Every traversal here is depth-first and pre-order: a node is seen before its children,
//! and children are seen in declaration order.

use std::collections::BTreeSet;

use crate::Descriptor;

/// Visits every node once, sentinels included.
///
/// The visitor receives the node and its path as child indices from the root; the root's
/// path is empty.
pub fn walk<F>(descriptor: &Descriptor, mut visitor: F)
where
    F: FnMut(&Descriptor, &[usize]),
{
    let mut path = Vec::new();
    walk_inner(descriptor, &mut path, &mut visitor);
}

fn walk_inner<F>(node: &Descriptor, path: &mut Vec<usize>, visitor: &mut F)
where
    F: FnMut(&Descriptor, &[usize]),
{
    visitor(node, path);
    for (index, child) in node.children().iter().enumerate() {
        path.push(index);
        walk_inner(child, path, visitor);
        path.pop();
    }
}

/// Rewrites a tree top-down and returns the new tree.
///
/// `f` receives an owned copy of each node and returns its replacement. The traversal then
/// descends into the children of the *replacement*, so a rewrite that swaps out children
/// controls what is visited next. The input tree is left untouched.
#[must_use]
pub fn transform<F>(descriptor: &Descriptor, mut f: F) -> Descriptor
where
    F: FnMut(Descriptor) -> Descriptor,
{
    transform_inner(descriptor.clone(), &mut f)
}

fn transform_inner<F>(node: Descriptor, f: &mut F) -> Descriptor
where
    F: FnMut(Descriptor) -> Descriptor,
{
    let mut next = f(node);
    if let Some(children) = next.take_children() {
        let children = children
            .into_iter()
            .map(|child| transform_inner(child, f))
            .collect();
        next.set_children(Some(children));
    }
    next
}

/// Returns every node matching `predicate`, in pre-order.
pub fn find<F>(descriptor: &Descriptor, mut predicate: F) -> Vec<&Descriptor>
where
    F: FnMut(&Descriptor) -> bool,
{
    let mut matches = Vec::new();
    find_inner(descriptor, &mut predicate, &mut matches);
    matches
}

fn find_inner<'a, F>(node: &'a Descriptor, predicate: &mut F, matches: &mut Vec<&'a Descriptor>)
where
    F: FnMut(&Descriptor) -> bool,
{
    if predicate(node) {
        matches.push(node);
    }
    for child in node.children() {
        find_inner(child, predicate, matches);
    }
}

/// The distinct types used in the tree, sentinels included.
#[must_use]
pub fn used_types(descriptor: &Descriptor) -> BTreeSet<String> {
    let mut types = BTreeSet::new();
    walk(descriptor, |node, _| {
        if !types.contains(node.ty()) {
            types.insert(node.ty().to_owned());
        }
    });
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Descriptor {
        Descriptor::new("root").with_children([
            Descriptor::new("a").with_children([Descriptor::new("a1"), Descriptor::null()]),
            Descriptor::fragment([Descriptor::new("b1")]),
            Descriptor::new("c"),
        ])
    }

    #[test]
    fn walk_is_pre_order_with_paths() {
        let mut seen = Vec::new();
        walk(&tree(), |node, path| seen.push((node.ty().to_owned(), path.to_vec())));
        let expected: Vec<(String, Vec<usize>)> = vec![
            ("root".into(), vec![]),
            ("a".into(), vec![0]),
            ("a1".into(), vec![0, 0]),
            ("__null__".into(), vec![0, 1]),
            ("__fragment__".into(), vec![1]),
            ("b1".into(), vec![1, 0]),
            ("c".into(), vec![2]),
        ];
        assert_eq!(seen, expected);
    }

    #[test]
    fn walk_visits_each_node_once() {
        let tree = tree();
        let mut count = 0;
        walk(&tree, |_, _| count += 1);
        assert_eq!(count, tree.node_count());
    }

    #[test]
    fn transform_leaves_input_untouched() {
        let tree = tree();
        let before = tree.clone();
        let out = transform(&tree, |node| {
            if node.is_sentinel() {
                node
            } else {
                node.with_prop("seen", true)
            }
        });
        assert_eq!(tree, before);
        let mut flagged = 0;
        walk(&out, |node, _| {
            if !node.is_sentinel() {
                assert_eq!(node.prop("seen"), Some(&json!(true)));
                flagged += 1;
            }
        });
        assert_eq!(flagged, 5);
    }

    #[test]
    fn transform_recurses_into_rewritten_children() {
        let tree = Descriptor::new("slot").with_child(Descriptor::new("old"));
        let mut visited = Vec::new();
        let out = transform(&tree, |node| {
            visited.push(node.ty().to_owned());
            if node.ty() == "slot" {
                node.with_children([Descriptor::new("new")])
            } else {
                node
            }
        });
        assert_eq!(visited, ["slot", "new"]);
        assert_eq!(out.children()[0].ty(), "new");
    }

    #[test]
    fn find_returns_matches_in_order() {
        let tree = tree();
        let leaves: Vec<_> = find(&tree, |node| node.children().is_empty())
            .into_iter()
            .map(Descriptor::ty)
            .collect();
        assert_eq!(leaves, ["a1", "__null__", "b1", "c"]);
        assert!(find(&tree, |node| node.ty() == "missing").is_empty());
    }

    #[test]
    fn used_types_includes_sentinels() {
        let types = used_types(&tree());
        assert!(types.contains("__null__"));
        assert!(types.contains("__fragment__"));
        assert_eq!(types.len(), 7);
    }
}
