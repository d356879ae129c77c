use treecheck::paths::{self, RootToLeaf};
use treecheck::tree::Tree;

use crate::{grow, Op};

/// Counts the nodes without children.
fn leaves(tree: &Tree<i32>) -> usize {
    let mut count = 0;
    let mut stack = tree.root().into_iter().collect::<Vec<_>>();
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            count += 1;
        }
        stack.extend(node.left().root());
        stack.extend(node.right().root());
    }

    count
}

#[quickcheck]
fn one_path_per_leaf(ops: Vec<Op<i8>>) -> bool {
    let tree = grow(&ops);

    RootToLeaf::new(&tree).count() == leaves(&tree)
}

#[quickcheck]
fn paths_end_at_leaves_and_are_no_taller_than_the_tree(ops: Vec<Op<i8>>) -> bool {
    let tree = grow(&ops);
    let all = RootToLeaf::new(&tree).collect::<Vec<_>>();

    let tallest = all.iter().map(Vec::len).max().unwrap_or(0);
    tallest == tree.height()
        && all
            .iter()
            .all(|path| path.first().copied() == tree.root().map(|n| n.value()))
}

#[quickcheck]
fn inside_and_outside_partition(ops: Vec<Op<i8>>, low: u8, span: u8) -> bool {
    let tree = grow(&ops);
    // Edge counts in [low, low + span] are node counts in [low + 1, low + span + 1].
    let (low, high) = (usize::from(low), usize::from(low) + usize::from(span));
    let inside = paths::with_length_between(&tree, low, high);
    let outside = paths::with_length_outside(&tree, low + 1, high + 1);

    inside.len() + outside.len() == RootToLeaf::new(&tree).count()
}

#[quickcheck]
fn sum_filters_agree(ops: Vec<Op<i8>>, target: i16) -> bool {
    let tree = grow(&ops);
    let target = i32::from(target);

    paths::with_sum(&tree, &target) == paths::with_sum_between(&tree, &target, &target)
}

#[quickcheck]
fn min_max_sums_bound_every_path(ops: Vec<Op<i8>>) -> bool {
    let tree = grow(&ops);
    match paths::min_max_sum(&tree) {
        None => tree.is_empty(),
        Some((min, max)) => {
            let (min, max) = (paths::sum(&min), paths::sum(&max));
            RootToLeaf::new(&tree).all(|path| {
                let total = paths::sum(&path);
                min <= total && total <= max
            })
        }
    }
}
