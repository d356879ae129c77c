//! An owned binary tree. Every `Node` exclusively owns its two children so
//! the tree is always acyclic and rooted. Nothing here keeps the values in
//! any particular order; the builders below produce the shapes the
//! validators are interested in (search trees, heaps, perfect trees and
//! degenerate chains).
//!
//! Every traversal in this module, including `Drop`, keeps its own stack on
//! the heap so a chain of a million nodes is as safe to handle as a
//! balanced tree.
//!
//! # Examples
//!
//! ```
//! use treecheck::tree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! for x in [50, 25, 75, 10] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![50, 25, 10, 75]);
//! ```

use std::iter;
use std::mem;

use rand::Rng;

/// A binary tree that is either empty or a boxed [`Node`].
pub enum Tree<T> {
    /// The empty tree. This is also what sits below a node on a side
    /// where it has no child.
    Leaf,
    /// A `Node` with a value and two children (which are both `Tree`s).
    Node(Box<Node<T>>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Generates a tree holding a single value.
    pub fn leaf(value: T) -> Self {
        Self::node(value, Self::Leaf, Self::Leaf)
    }

    /// Generates a tree with the given value at its root and the given subtrees below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecheck::tree::Tree;
    ///
    /// //      10
    /// //    /    \
    /// //  20      30
    /// let tree = Tree::node(10, Tree::leaf(20), Tree::leaf(30));
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(10));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn node(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Self::Node(Box::new(Node { value, left, right }))
    }

    /// Builds a complete tree laid out like an array-backed heap: the node
    /// at index `i` gets the nodes at `2i + 1` and `2i + 2` as its children.
    /// Feeding it ascending values therefore yields a min-heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecheck::tree::Tree;
    ///
    /// let tree = Tree::from_level_order([1, 2, 3, 4]);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 3]);
    /// ```
    pub fn from_level_order<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let mut built = iter::repeat_with(Tree::new)
            .take(values.len())
            .collect::<Vec<_>>();

        // Children always have larger indices than their parent, so walking
        // backwards means both children are finished before their parent.
        for (i, value) in values.into_iter().enumerate().rev() {
            let left = take_at(&mut built, 2 * i + 1);
            let right = take_at(&mut built, 2 * i + 2);
            built[i] = Self::node(value, left, right);
        }

        take_at(&mut built, 0)
    }

    /// Builds a perfect tree with `height` levels where every node holds `value`.
    pub fn perfect(height: u32, value: T) -> Self
    where
        T: Clone,
    {
        let num_nodes = 2usize.pow(height) - 1;
        Self::from_level_order(iter::repeat(value).take(num_nodes))
    }

    /// Builds a degenerate tree where every node only has a right child. The
    /// first value ends up at the root.
    pub fn chain<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        values
            .into_iter()
            .rev()
            .fold(Self::new(), |tree, value| Self::node(value, Self::new(), tree))
    }

    /// Inserts the value the way an unbalanced binary search tree would:
    /// smaller values go left, everything else (including duplicates) goes right.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = self;
        while let Self::Node(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Self::leaf(value);
    }

    /// Inserts the value into the first free slot found by walking down the
    /// tree and flipping a coin at each node to choose a side.
    pub fn insert_random<R>(&mut self, value: T, rng: &mut R)
    where
        R: Rng,
    {
        let mut slot = self;
        while let Self::Node(node) = slot {
            slot = if rng.gen_bool(0.5) {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Self::leaf(value);
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(&**n),
        }
    }

    /// Whether this is the empty tree.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Gets the height of this tree: the number of nodes on the longest
    /// root-to-leaf path. The empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, 1));
        }

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left(), node.right()].into_iter().flat_map(Tree::root) {
                stack.push((child, depth + 1));
            }
        }

        height
    }

    /// Iterates the values of the tree in pre-order (node, then its left
    /// subtree, then its right subtree).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root().into_iter().collect(),
        }
    }
}

/// Moves the tree out of `built[i]`, leaving an empty tree behind. Indices
/// past the end are empty trees too.
fn take_at<T>(built: &mut [Tree<T>], i: usize) -> Tree<T> {
    built.get_mut(i).map(mem::take).unwrap_or_default()
}

/// A `Node` has a value and always two children, although those children
/// may be [`Leaf`][Tree::Leaf]s.
pub struct Node<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,
}

impl<T> Node<T> {
    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left subtree.
    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    /// The right subtree.
    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    /// Whether both children are empty.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Moves this node's children onto `stack`, leaving empty trees in their place.
    fn detach_children(&mut self, stack: &mut Vec<Box<Node<T>>>) {
        for child in [&mut self.left, &mut self.right] {
            if let Tree::Node(node) = mem::take(child) {
                stack.push(node);
            }
        }
    }
}

impl<T> Drop for Node<T> {
    // The derived drop would recurse once per level. Detaching every child
    // before its node is freed keeps each individual drop shallow.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

/// Pre-order iterator over the values of a [`Tree`]. See [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.root());
        self.stack.extend(node.left.root());
        Some(&node.value)
    }
}
