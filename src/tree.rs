//! Tree traversal for nested row sets.
//!
//! Nodes are a tagged variant instead of duck-typed children/lazy markers,
//! so traversal is exhaustive and "no children" is never ambiguous with
//! "children not loaded yet".

/// One node of a nested row forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode<T> {
    /// A node with no children.
    Leaf(T),
    /// A node whose children load lazily; visited once, never descended.
    Lazy(T),
    /// A node with explicit children.
    Branch(T, Vec<TreeNode<T>>),
}

impl<T> TreeNode<T> {
    /// The node's own value.
    pub fn value(&self) -> &T {
        match self {
            Self::Leaf(v) | Self::Lazy(v) | Self::Branch(v, _) => v,
        }
    }

    /// Explicit children, `None` for leaf and lazy nodes.
    pub fn children(&self) -> Option<&[TreeNode<T>]> {
        match self {
            Self::Branch(_, children) => Some(children),
            Self::Leaf(_) | Self::Lazy(_) => None,
        }
    }
}

/// Depth-first pre-order traversal over a forest.
///
/// Calls `visit(value, children, depth)` exactly once per node; `children`
/// is `None` for leaf and lazy nodes. Depth is 0 at the roots and grows by
/// one per level. Lazy nodes are signaled but never descended into.
pub fn walk_tree<T, F>(roots: &[TreeNode<T>], mut visit: F)
where
    F: FnMut(&T, Option<&[TreeNode<T>]>, usize),
{
    walk_level(roots, 0, &mut visit);
}

fn walk_level<T, F>(nodes: &[TreeNode<T>], depth: usize, visit: &mut F)
where
    F: FnMut(&T, Option<&[TreeNode<T>]>, usize),
{
    for node in nodes {
        visit(node.value(), node.children(), depth);
        if let TreeNode::Branch(_, children) = node {
            walk_level(children, depth + 1, visit);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_visits_every_node_once_in_preorder() {
        let forest = vec![
            TreeNode::Branch(
                "a",
                vec![TreeNode::Leaf("a1"), TreeNode::Branch("a2", vec![TreeNode::Leaf("a2x")])],
            ),
            TreeNode::Lazy("b"),
            TreeNode::Leaf("c"),
        ];

        let mut seen = Vec::new();
        walk_tree(&forest, |value, children, depth| {
            seen.push((*value, children.is_some(), depth));
        });

        assert_eq!(
            seen,
            vec![
                ("a", true, 0),
                ("a1", false, 1),
                ("a2", true, 1),
                ("a2x", false, 2),
                ("b", false, 0),
                ("c", false, 0),
            ]
        );
    }

    #[test]
    fn test_lazy_nodes_are_never_descended() {
        let forest = vec![TreeNode::Lazy("root")];
        let mut count = 0;
        walk_tree(&forest, |_, children, depth| {
            count += 1;
            assert!(children.is_none());
            assert_eq!(depth, 0);
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_empty_branch_reports_empty_children() {
        let forest = vec![TreeNode::Branch("a", Vec::new())];
        let mut seen = None;
        walk_tree(&forest, |_, children, _| {
            seen = Some(children.map(<[TreeNode<&str>]>::len));
        });
        assert_eq!(seen, Some(Some(0)));
    }
}
