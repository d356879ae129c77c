//! A one-pass validator for binary trees. A single post-order traversal
//! works out, for every subtree at once, whether it is a binary search tree
//! whose values lie in a given range, whether it is ordered like a min-heap
//! or a max-heap, whether it is complete or perfect in shape, whether it is
//! AVL-balanced or a plain linked list, and its height.
//!
//! Each subtree is folded into an immutable [`Summary`] that depends only on
//! the node's own value and the summaries of its two children. The
//! traversal keeps its pending work on the heap, so degenerate trees of any
//! depth are fine.
//!
//! The tree is assumed to be acyclic. [`Tree`] owns its children, so that
//! can't be violated from safe code.
//!
//! # Examples
//!
//! ```
//! use treecheck::tree::Tree;
//! use treecheck::validate::{validate, Bounds};
//!
//! //      50
//! //    /    \
//! //  25      75
//! let tree = Tree::node(50, Tree::leaf(25), Tree::leaf(75));
//! let verdict = validate(&tree, &Bounds::new(0, 100, 1, 5));
//!
//! assert!(verdict.is_bst);
//! assert!(!verdict.is_min_heap);
//! assert!(!verdict.is_max_heap);
//! assert_eq!(verdict.height, 2);
//! ```

use std::fmt;

use serde::Deserialize;

use crate::tree::{Node, Tree};

/// The externally supplied limits a tree is checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds<T> {
    /// Smallest value allowed in a search tree (inclusive).
    pub value_low: T,
    /// Largest value allowed in a search tree (inclusive).
    pub value_high: T,
    /// The tree's height must be strictly greater than this.
    pub height_low: isize,
    /// The tree's height must be strictly less than this.
    pub height_high: isize,
}

impl<T> Bounds<T> {
    /// Bounds accepting values in `[value_low, value_high]` and heights in
    /// `(height_low, height_high)`.
    pub fn new(value_low: T, value_high: T, height_low: isize, height_high: isize) -> Self {
        Self {
            value_low,
            value_high,
            height_low,
            height_high,
        }
    }

    /// Whether `value` lies in `[value_low, value_high]`.
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: Ord,
    {
        &self.value_low <= value && value <= &self.value_high
    }

    /// Whether `height` lies in `(height_low, height_high)`.
    pub fn contains_height(&self, height: isize) -> bool {
        self.height_low < height && height < self.height_high
    }
}

/// How heights are counted.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeightConvention {
    /// Count the nodes on the longest root-to-leaf path. The empty tree has
    /// height 0 and a single node has height 1.
    #[default]
    Nodes,
    /// Count the edges on the longest root-to-leaf path. The empty tree has
    /// height -1 and a single node has height 0.
    Edges,
}

impl HeightConvention {
    /// Converts a node-count height into this convention.
    pub fn measure(self, nodes: usize) -> isize {
        let nodes = isize::try_from(nodes).unwrap_or(isize::MAX);
        match self {
            Self::Nodes => nodes,
            Self::Edges => nodes - 1,
        }
    }
}

/// What a search tree may do with values equal to a node's value.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Duplicates {
    /// Every value in the left subtree is strictly smaller and every value
    /// in the right subtree strictly larger. Any repeated value fails.
    #[default]
    Reject,
    /// Equal values may appear in the right subtree, which is where
    /// [`Tree::insert`] puts them.
    Allow,
}

/// The conventions a [`Validator`] applies.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    /// How the height compared against [`Bounds`] is counted.
    pub height: HeightConvention,
    /// Whether search trees may hold repeated values.
    pub duplicates: Duplicates,
}

/// Everything the validator knows about one subtree.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary<'a, T> {
    /// Node-count height; 0 for the empty tree.
    pub height: usize,
    /// The smallest value in the subtree.
    pub min: Option<&'a T>,
    /// The largest value in the subtree.
    pub max: Option<&'a T>,
    /// The value at the root of the subtree.
    pub root: Option<&'a T>,
    /// Ordered like a binary search tree, whatever the value range.
    pub is_ordered: bool,
    /// A binary search tree with all values in range.
    pub is_bst: bool,
    /// All values are inside the value bounds.
    pub within_range: bool,
    /// Every node is at most the value of each of its children.
    pub is_min_heap_ordered: bool,
    /// Every node is at least the value of each of its children.
    pub is_max_heap_ordered: bool,
    /// All levels are full except possibly the last, which fills left to right.
    pub is_complete: bool,
    /// All levels are full.
    pub is_perfect: bool,
    /// The heights of the two children differ by at most one at every node.
    pub is_balanced: bool,
    /// No node has two children.
    pub is_linear: bool,
}

impl<'a, T> Clone for Summary<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Summary<'a, T> {}

impl<'a, T> Summary<'a, T> {
    /// The summary of the empty tree. It never constrains an ancestor.
    pub fn empty() -> Self {
        Self {
            height: 0,
            min: None,
            max: None,
            root: None,
            is_ordered: true,
            is_bst: true,
            within_range: true,
            is_min_heap_ordered: true,
            is_max_heap_ordered: true,
            is_complete: true,
            is_perfect: true,
            is_balanced: true,
            is_linear: true,
        }
    }

    /// Combines a node's value with the summaries of its children.
    fn merge(value: &'a T, left: Self, right: Self, bounds: &Bounds<T>, policy: Policy) -> Self
    where
        T: Ord,
    {
        let within_range = left.within_range && right.within_range && bounds.contains_value(value);

        let left_below = left.max.map_or(true, |max| max < value);
        let right_above = right.min.map_or(true, |min| match policy.duplicates {
            Duplicates::Reject => value < min,
            Duplicates::Allow => value <= min,
        });
        let is_ordered = left.is_ordered && right.is_ordered && left_below && right_above;
        let is_bst = is_ordered && within_range;

        let is_min_heap_ordered = left.is_min_heap_ordered
            && right.is_min_heap_ordered
            && left.root.map_or(true, |child| value <= child)
            && right.root.map_or(true, |child| value <= child);
        let is_max_heap_ordered = left.is_max_heap_ordered
            && right.is_max_heap_ordered
            && left.root.map_or(true, |child| value >= child)
            && right.root.map_or(true, |child| value >= child);

        let is_perfect = left.is_perfect && right.is_perfect && left.height == right.height;
        let is_complete = (left.is_perfect && right.is_complete && left.height == right.height)
            || (left.is_complete && right.is_perfect && left.height == right.height + 1);

        let is_balanced =
            left.is_balanced && right.is_balanced && left.height.abs_diff(right.height) <= 1;
        let is_linear = left.is_linear
            && right.is_linear
            && (left.root.is_none() || right.root.is_none());

        Self {
            height: 1 + left.height.max(right.height),
            min: [Some(value), left.min, right.min].into_iter().flatten().min(),
            max: [Some(value), left.max, right.max].into_iter().flatten().max(),
            root: Some(value),
            is_ordered,
            is_bst,
            within_range,
            is_min_heap_ordered,
            is_max_heap_ordered,
            is_complete,
            is_perfect,
            is_balanced,
            is_linear,
        }
    }
}

/// The answer to the question the validator was built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// A binary search tree with values and height in bounds.
    pub is_bst: bool,
    /// A complete, min-ordered tree with height in bounds.
    pub is_min_heap: bool,
    /// A complete, max-ordered tree with height in bounds.
    pub is_max_heap: bool,
    /// The measured height, in the validator's [`HeightConvention`].
    pub height: isize,
}

/// Every predicate the validator can derive from a single traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    /// The measured height, in the validator's [`HeightConvention`].
    pub height: isize,
    /// Whether the height lies strictly inside the height bounds.
    pub height_in_bounds: bool,
    /// See [`Verdict::is_bst`].
    pub is_bst: bool,
    /// See [`Verdict::is_min_heap`].
    pub is_min_heap: bool,
    /// See [`Verdict::is_max_heap`].
    pub is_max_heap: bool,
    /// Complete in shape, regardless of values.
    pub is_complete: bool,
    /// Perfect in shape, regardless of values.
    pub is_perfect: bool,
    /// A balanced binary search tree with height in bounds. The value
    /// bounds don't apply.
    pub is_avl: bool,
    /// A tree without any forks whose values all lie in the value bounds.
    pub is_linear_in_range: bool,
}

impl Report {
    /// Whether the tree is a min-heap or a max-heap.
    pub fn is_heap(&self) -> bool {
        self.is_min_heap || self.is_max_heap
    }

    /// The subset of this report answering the validator's main question.
    pub fn verdict(&self) -> Verdict {
        Verdict {
            is_bst: self.is_bst,
            is_min_heap: self.is_min_heap,
            is_max_heap: self.is_max_heap,
            height: self.height,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "height:          {} (in bounds: {})", self.height, self.height_in_bounds)?;
        writeln!(f, "bst:             {}", self.is_bst)?;
        writeln!(f, "min-heap:        {}", self.is_min_heap)?;
        writeln!(f, "max-heap:        {}", self.is_max_heap)?;
        writeln!(f, "avl:             {}", self.is_avl)?;
        writeln!(f, "linear in range: {}", self.is_linear_in_range)?;
        writeln!(f, "complete:        {}", self.is_complete)?;
        write!(f, "perfect:         {}", self.is_perfect)
    }
}

/// Pending work in the post-order traversal.
enum Frame<'a, T> {
    /// Summarize this subtree.
    Enter(&'a Tree<T>),
    /// Both children of this node have been summarized.
    Exit(&'a Node<T>),
}

/// Checks trees against a fixed set of [`Bounds`] and [`Policy`].
#[derive(Clone, Debug)]
pub struct Validator<T> {
    bounds: Bounds<T>,
    policy: Policy,
}

impl<T> Validator<T>
where
    T: Ord,
{
    /// A validator using the default policy: node-count heights, no duplicates.
    pub fn new(bounds: Bounds<T>) -> Self {
        Self::with_policy(bounds, Policy::default())
    }

    /// A validator using the given conventions.
    pub fn with_policy(bounds: Bounds<T>, policy: Policy) -> Self {
        Self { bounds, policy }
    }

    /// The bounds trees are checked against.
    pub fn bounds(&self) -> &Bounds<T> {
        &self.bounds
    }

    /// The conventions in use.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Folds the whole tree into the [`Summary`] of its root.
    pub fn summarize<'a>(&self, tree: &'a Tree<T>) -> Summary<'a, T> {
        summarize(tree, &self.bounds, self.policy)
    }

    /// Checks whether the tree is a binary search tree, a min-heap and a max-heap.
    pub fn validate(&self, tree: &Tree<T>) -> Verdict {
        self.inspect(tree).verdict()
    }

    /// Derives every supported predicate from a single traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecheck::tree::Tree;
    /// use treecheck::validate::{Bounds, Validator};
    ///
    /// let validator = Validator::new(Bounds::new(0, 10, 0, 10));
    /// let report = validator.inspect(&Tree::chain([3, 2, 1]));
    ///
    /// assert!(report.is_linear_in_range);
    /// assert!(!report.is_max_heap);
    /// assert!(!report.is_avl);
    /// ```
    pub fn inspect(&self, tree: &Tree<T>) -> Report {
        conclude(&self.summarize(tree), &self.bounds, self.policy)
    }
}

/// Checks whether the tree is a binary search tree, a min-heap and a
/// max-heap, using node-count heights and rejecting duplicate values.
pub fn validate<T>(tree: &Tree<T>, bounds: &Bounds<T>) -> Verdict
where
    T: Ord,
{
    inspect(tree, bounds).verdict()
}

/// Like [`validate`] but returns every predicate in a [`Report`].
pub fn inspect<T>(tree: &Tree<T>, bounds: &Bounds<T>) -> Report
where
    T: Ord,
{
    let policy = Policy::default();
    conclude(&summarize(tree, bounds, policy), bounds, policy)
}

/// Applies the root-level checks to the summary of a whole tree.
fn conclude<T>(summary: &Summary<'_, T>, bounds: &Bounds<T>, policy: Policy) -> Report {
    let height = policy.height.measure(summary.height);
    let height_in_bounds = bounds.contains_height(height);

    let report = Report {
        height,
        height_in_bounds,
        is_bst: summary.is_bst && height_in_bounds,
        is_min_heap: summary.is_min_heap_ordered && summary.is_complete && height_in_bounds,
        is_max_heap: summary.is_max_heap_ordered && summary.is_complete && height_in_bounds,
        is_complete: summary.is_complete,
        is_perfect: summary.is_perfect,
        is_avl: summary.is_ordered && summary.is_balanced && height_in_bounds,
        is_linear_in_range: summary.is_linear && summary.within_range,
    };
    tracing::trace!(
        height,
        is_bst = report.is_bst,
        is_min_heap = report.is_min_heap,
        is_max_heap = report.is_max_heap,
        "validated tree"
    );
    report
}

/// Post-order fold of the tree. Pending nodes and finished summaries both
/// live in vectors, never on the call stack.
pub fn summarize<'a, T>(tree: &'a Tree<T>, bounds: &Bounds<T>, policy: Policy) -> Summary<'a, T>
where
    T: Ord,
{
    let mut frames = vec![Frame::Enter(tree)];
    let mut done: Vec<Summary<'a, T>> = Vec::new();

    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Enter(subtree) => match subtree.root() {
                None => done.push(Summary::empty()),
                Some(node) => {
                    frames.push(Frame::Exit(node));
                    frames.push(Frame::Enter(node.right()));
                    frames.push(Frame::Enter(node.left()));
                }
            },
            Frame::Exit(node) => {
                let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                    unreachable!("both children are summarized before their parent");
                };
                done.push(Summary::merge(node.value(), left, right, bounds, policy));
            }
        }
    }

    done.pop().unwrap_or_else(Summary::empty)
}
