use treecheck::tree::{Node, Tree};
use treecheck::validate::{inspect, validate, Bounds};

use crate::{grow, Op};

/// Bounds that accept every `i32` value and every height.
fn anything() -> Bounds<i32> {
    Bounds::new(i32::MIN, i32::MAX, -1, isize::MAX)
}

/// Checks the search tree property the slow way: an in-order walk must be strictly increasing.
fn naive_is_bst(tree: &Tree<i32>) -> bool {
    let mut in_order = Vec::new();
    let mut stack: Vec<&Node<i32>> = Vec::new();
    let mut current = tree.root();
    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left().root();
        }
        if let Some(node) = stack.pop() {
            in_order.push(*node.value());
            current = node.right().root();
        }
    }

    in_order.windows(2).all(|w| w[0] < w[1])
}

/// Checks completeness the way array-backed heaps see it: numbering nodes
/// level by level, no index may be skipped.
fn naive_is_complete(tree: &Tree<i32>) -> bool {
    let mut count = 0;
    let mut max_index = 0;
    let mut stack = tree.root().map(|root| (root, 0usize)).into_iter().collect::<Vec<_>>();
    while let Some((node, index)) = stack.pop() {
        count += 1;
        max_index = max_index.max(index);
        stack.extend(node.left().root().map(|n| (n, 2 * index + 1)));
        stack.extend(node.right().root().map(|n| (n, 2 * index + 2)));
    }

    count == 0 || max_index == count - 1
}

/// Visits every node, parents before children.
fn nodes(tree: &Tree<i32>) -> Vec<&Node<i32>> {
    let mut all = Vec::new();
    let mut stack = tree.root().into_iter().collect::<Vec<_>>();
    while let Some(node) = stack.pop() {
        all.push(node);
        stack.extend(node.left().root());
        stack.extend(node.right().root());
    }

    all
}

/// The children that exist below `node`.
fn children(node: &Node<i32>) -> impl Iterator<Item = &Node<i32>> {
    [node.left(), node.right()].into_iter().flat_map(Tree::root)
}

/// Checks that `ordered(parent, child)` holds for every parent and each of its children.
fn naive_is_heap_ordered(tree: &Tree<i32>, ordered: fn(&i32, &i32) -> bool) -> bool {
    nodes(tree)
        .into_iter()
        .all(|node| children(node).all(|child| ordered(node.value(), child.value())))
}

/// Every node has zero or two children and every leaf sits at the same depth,
/// which is the same as holding exactly `2^height - 1` nodes.
fn naive_is_perfect(tree: &Tree<i32>) -> bool {
    let count = tree.len();
    let height = tree.height();
    height < usize::BITS as usize && count == (1usize << height) - 1
}

/// Recomputes both subtree heights at every node.
fn naive_is_balanced(tree: &Tree<i32>) -> bool {
    nodes(tree)
        .into_iter()
        .all(|node| node.left().height().abs_diff(node.right().height()) <= 1)
}

/// No node has two children.
fn naive_is_linear(tree: &Tree<i32>) -> bool {
    nodes(tree).into_iter().all(|node| children(node).count() < 2)
}

#[quickcheck]
fn agrees_with_naive_checks(ops: Vec<Op<i8>>) -> bool {
    let tree = grow(&ops);
    let report = inspect(&tree, &anything());
    let is_complete = naive_is_complete(&tree);

    report.is_bst == naive_is_bst(&tree)
        && report.is_complete == is_complete
        && report.is_perfect == naive_is_perfect(&tree)
        && report.is_min_heap == (is_complete && naive_is_heap_ordered(&tree, |p, c| p <= c))
        && report.is_max_heap == (is_complete && naive_is_heap_ordered(&tree, |p, c| p >= c))
        && report.is_avl == (naive_is_bst(&tree) && naive_is_balanced(&tree))
        && report.is_linear_in_range == naive_is_linear(&tree)
        && report.height == tree.height() as isize
}

#[quickcheck]
fn avl_ignores_the_value_range(ops: Vec<Op<i8>>, low: i8, high: i8) -> bool {
    let tree = grow(&ops);
    let narrow = Bounds::new(i32::from(low), i32::from(high), -1, isize::MAX);

    inspect(&tree, &narrow).is_avl == inspect(&tree, &anything()).is_avl
}

#[quickcheck]
fn distinct_inserts_make_a_bst(xs: Vec<i8>) -> bool {
    let mut xs = xs.into_iter().map(i32::from).collect::<Vec<_>>();
    xs.sort_unstable();
    xs.dedup();

    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let height = tree.height() as isize;
    let low = xs.first().copied().unwrap_or(0);
    let high = xs.last().copied().unwrap_or(0);

    validate(&tree, &Bounds::new(low, high, height - 1, height + 1)).is_bst
}

#[quickcheck]
fn widening_the_range_keeps_a_bst(ops: Vec<Op<i8>>, low: i8, high: i8, below: u8, above: u8) -> bool {
    let tree = grow(&ops);
    let (low, high) = (i32::from(low), i32::from(high));
    let narrow = Bounds::new(low, high, -1, isize::MAX);
    let wide = Bounds::new(low - i32::from(below), high + i32::from(above), -1, isize::MAX);

    !validate(&tree, &narrow).is_bst || validate(&tree, &wide).is_bst
}

#[quickcheck]
fn sorted_level_order_is_a_heap(xs: Vec<i8>) -> bool {
    let mut xs = xs;
    xs.sort_unstable();
    let ascending = Tree::from_level_order(xs.iter().map(|&x| i32::from(x)));
    let descending = Tree::from_level_order(xs.iter().rev().map(|&x| i32::from(x)));

    let up = inspect(&ascending, &anything());
    let down = inspect(&descending, &anything());

    up.is_complete && up.is_min_heap && down.is_complete && down.is_max_heap
}

#[quickcheck]
fn validation_is_idempotent(ops: Vec<Op<i8>>) -> bool {
    let tree = grow(&ops);
    let bounds = Bounds::new(-50, 50, 1, 8);

    inspect(&tree, &bounds) == inspect(&tree, &bounds)
}
