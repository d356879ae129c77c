use treecheck::symmetry::is_symmetric;
use treecheck::tree::Tree;

use crate::{grow, mirror, Op};

#[quickcheck]
fn tree_beside_its_mirror_is_symmetric(ops: Vec<Op<i8>>, root: i8) -> bool {
    let tree = grow(&ops);
    let mirrored = mirror(&tree);

    is_symmetric(&Tree::node(i32::from(root), tree, mirrored))
}

#[quickcheck]
fn mirroring_preserves_symmetry(ops: Vec<Op<i8>>) -> bool {
    let tree = grow(&ops);

    is_symmetric(&tree) == is_symmetric(&mirror(&tree))
}
