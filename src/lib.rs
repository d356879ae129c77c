//! This crate checks binary trees for the classic structural properties,
//! mostly for educational purposes.
//!
//! ## Binary trees and their properties
//!
//! A binary tree is defined recursively using the notion of a `Node`. A
//! `Node` stores a value and has up to two child `Node`s. Depending on how the
//! values and children are arranged, a tree can be several things at once:
//!
//! 1. A **binary search tree** if, for every `Node`, all the `Node`s in its
//!    left subtree have a smaller value and all the `Node`s in its right
//!    subtree have a larger value.
//! 2. A **min-heap** (or **max-heap**) if every `Node` is no larger (or no
//!    smaller) than its children and the tree is complete.
//! 3. **Complete** if every level is full except possibly the last, which
//!    fills from left to right, and **perfect** if every level is full.
//! 4. An **AVL tree** if it is a binary search tree and, at every `Node`, the
//!    heights of the two subtrees differ by at most one.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Checking each property separately costs a traversal per property. The
//! [`validate`](mod@validate) module instead summarizes every subtree once, bottom-up, and
//! derives all of them from that single pass in `O(N)` time. None of the
//! traversals in this crate recurse, so degenerate trees (where the height is
//! `N`) can be as deep as memory allows.
//!
//! The [`paths`] and [`symmetry`] modules hold the other classic tree
//! questions: which root-to-leaf paths satisfy a length or sum constraint, and
//! whether a tree is its own mirror image.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
mod error;
pub mod paths;
pub mod symmetry;
pub mod tree;
pub mod validate;

pub use error::{Error, Result};
pub use tree::{Node, Tree};
pub use validate::{validate, Bounds, Verdict};
