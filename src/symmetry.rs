//! Mirror symmetry: a tree is symmetric when its left subtree is the mirror
//! image of its right subtree, both in shape and in values.

use crate::tree::Tree;

/// Whether `tree` equals its own mirror image. The empty tree is symmetric.
///
/// # Examples
///
/// ```
/// use treecheck::symmetry::is_symmetric;
/// use treecheck::tree::Tree;
///
/// //     1
/// //    / \
/// //   2   2
/// //  /     \
/// // 3       3
/// let tree = Tree::node(
///     1,
///     Tree::node(2, Tree::leaf(3), Tree::new()),
///     Tree::node(2, Tree::new(), Tree::leaf(3)),
/// );
/// assert!(is_symmetric(&tree));
///
/// let lopsided = Tree::node(1, Tree::leaf(2), Tree::new());
/// assert!(!is_symmetric(&lopsided));
/// ```
pub fn is_symmetric<T>(tree: &Tree<T>) -> bool
where
    T: PartialEq,
{
    let Some(root) = tree.root() else {
        return true;
    };

    // Pairs of subtrees that must mirror each other.
    let mut pairs = vec![(root.left(), root.right())];
    while let Some((a, b)) = pairs.pop() {
        match (a.root(), b.root()) {
            (None, None) => {}
            (Some(a), Some(b)) if a.value() == b.value() => {
                pairs.push((a.left(), b.right()));
                pairs.push((a.right(), b.left()));
            }
            _ => return false,
        }
    }

    true
}
