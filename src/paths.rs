//! Root-to-leaf path search. All searches share one depth-first walk that
//! keeps the current path in a buffer and backtracks by truncating it, so
//! each path is materialized only when it reaches a leaf.
//!
//! Lengths come in two flavours because callers ask both questions: the
//! number of edges on a path (a lone root has length 0) and the number of
//! nodes on it (a lone root has length 1).
//!
//! # Examples
//!
//! ```
//! use treecheck::paths;
//! use treecheck::tree::Tree;
//!
//! //      1
//! //     / \
//! //    2   3
//! //   /     \
//! //  4       5
//! //           \
//! //            6
//! let tree = Tree::node(
//!     1,
//!     Tree::node(2, Tree::leaf(4), Tree::new()),
//!     Tree::node(3, Tree::new(), Tree::node(5, Tree::new(), Tree::leaf(6))),
//! );
//!
//! let all = paths::RootToLeaf::new(&tree).collect::<Vec<_>>();
//! assert_eq!(all, vec![vec![&1, &2, &4], vec![&1, &3, &5, &6]]);
//!
//! assert_eq!(paths::with_length_between(&tree, 3, 3), vec![vec![&1, &3, &5, &6]]);
//! ```

use std::iter::Sum;

use crate::tree::{Node, Tree};

/// The values on a root-to-leaf path, root first.
pub type Path<'a, T> = Vec<&'a T>;

/// Iterator over every root-to-leaf path of a tree, left subtrees first.
pub struct RootToLeaf<'a, T> {
    /// Nodes still to visit along with their depth (the root is at depth 0).
    stack: Vec<(&'a Node<T>, usize)>,
    /// Values from the root down to the node visited last.
    path: Path<'a, T>,
}

impl<'a, T> RootToLeaf<'a, T> {
    /// Starts a walk over `tree`. The empty tree has no paths.
    pub fn new(tree: &'a Tree<T>) -> Self {
        Self {
            stack: tree.root().map(|root| (root, 0)).into_iter().collect(),
            path: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for RootToLeaf<'a, T> {
    type Item = Path<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            // Backtrack to this node's parent before stepping onto it.
            self.path.truncate(depth);
            self.path.push(node.value());

            if node.is_leaf() {
                return Some(self.path.clone());
            }
            self.stack.extend(node.right().root().map(|n| (n, depth + 1)));
            self.stack.extend(node.left().root().map(|n| (n, depth + 1)));
        }

        None
    }
}

/// Sums the values on a path.
pub fn sum<'a, T>(path: &[&'a T]) -> T
where
    T: Sum<&'a T>,
{
    path.iter().copied().sum()
}

/// Paths with between `low` and `high` edges (inclusive).
pub fn with_length_between<T>(tree: &Tree<T>, low: usize, high: usize) -> Vec<Path<'_, T>> {
    RootToLeaf::new(tree)
        .filter(|path| (low..=high).contains(&(path.len() - 1)))
        .collect()
}

/// Paths with fewer than `low` or more than `high` nodes.
///
/// # Examples
///
/// ```
/// use treecheck::paths;
/// use treecheck::tree::Tree;
///
/// let mut tree = Tree::new();
/// for x in [10, 5, 15, 2, 20, 25] {
///     tree.insert(x);
/// }
///
/// // 10-5-2 has three nodes, 10-15-20-25 has four.
/// assert_eq!(paths::with_length_outside(&tree, 4, 5), vec![vec![&10, &5, &2]]);
/// ```
pub fn with_length_outside<T>(tree: &Tree<T>, low: usize, high: usize) -> Vec<Path<'_, T>> {
    RootToLeaf::new(tree)
        .filter(|path| path.len() < low || path.len() > high)
        .collect()
}

/// Paths whose values add up to `target`.
pub fn with_sum<'a, T>(tree: &'a Tree<T>, target: &T) -> Vec<Path<'a, T>>
where
    T: Sum<&'a T> + PartialEq,
{
    RootToLeaf::new(tree)
        .filter(|path| sum(path) == *target)
        .collect()
}

/// Paths whose values add up to something in `[low, high]`.
pub fn with_sum_between<'a, T>(tree: &'a Tree<T>, low: &T, high: &T) -> Vec<Path<'a, T>>
where
    T: Sum<&'a T> + PartialOrd,
{
    RootToLeaf::new(tree)
        .filter(|path| {
            let total = sum(path);
            *low <= total && total <= *high
        })
        .collect()
}

/// The paths with the smallest and the largest sum, in that order. When
/// several paths tie, the leftmost one wins. The empty tree has neither.
pub fn min_max_sum<'a, T>(tree: &'a Tree<T>) -> Option<(Path<'a, T>, Path<'a, T>)>
where
    T: Sum<&'a T> + Ord + Clone,
{
    let mut paths = RootToLeaf::new(tree).map(|path| (sum(&path), path));
    let (first_sum, first) = paths.next()?;

    let mut max = (first_sum.clone(), first.clone());
    let mut min = (first_sum, first);
    for (total, path) in paths {
        if total < min.0 {
            min = (total, path);
        } else if total > max.0 {
            max = (total, path);
        }
    }

    Some((min.1, max.1))
}
