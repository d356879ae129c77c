#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod paths;
mod symmetry;
mod validate;

use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

use treecheck::Tree;

/// An enum for the various ways of growing a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value the way a binary search tree would.
    Insert(T),
    /// Insert the value into a random free slot, choosing sides with the seeded RNG.
    Scatter(T, u64),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Scatter(T::arbitrary(g), u64::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Grows a tree by applying the operations in order.
pub(crate) fn grow(ops: &[Op<i8>]) -> Tree<i32> {
    let mut tree = Tree::new();
    for op in ops {
        match *op {
            Op::Insert(x) => tree.insert(i32::from(x)),
            Op::Scatter(x, seed) => tree.insert_random(i32::from(x), &mut StdRng::seed_from_u64(seed)),
        }
    }

    tree
}

/// Copies the tree, swapping left and right at every node.
pub(crate) fn mirror(tree: &Tree<i32>) -> Tree<i32> {
    match tree.root() {
        None => Tree::new(),
        Some(n) => Tree::node(*n.value(), mirror(n.right()), mirror(n.left())),
    }
}
