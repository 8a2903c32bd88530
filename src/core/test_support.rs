// Shared fixtures for the unit tests of the core modules.
use crate::core::{NodeId, TreeNode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/*
 * The small tree used throughout the tests:
 *
 *   1 root
 *   ├── 2 a
 *   └── 3 b
 *       └── 4 c
 */
pub(crate) fn sample_tree() -> TreeNode {
    TreeNode::with_children(
        1,
        "root",
        vec![
            TreeNode::new(2, "a"),
            TreeNode::with_children(3, "b", vec![TreeNode::new(4, "c")]),
        ],
    )
}

/*
 * A deeper tree with two internal levels under the root:
 *
 *   10 root
 *   ├── 20 docs
 *   │   ├── 21 readme
 *   │   └── 22 guide
 *   ├── 30 src
 *   │   ├── 31 lib
 *   │   └── 32 bin
 *   │       └── 33 main
 *   └── 40 license
 */
pub(crate) fn project_tree() -> TreeNode {
    TreeNode::with_children(
        10,
        "root",
        vec![
            TreeNode::with_children(
                20,
                "docs",
                vec![TreeNode::new(21, "readme"), TreeNode::new(22, "guide")],
            ),
            TreeNode::with_children(
                30,
                "src",
                vec![
                    TreeNode::new(31, "lib"),
                    TreeNode::with_children(32, "bin", vec![TreeNode::new(33, "main")]),
                ],
            ),
            TreeNode::new(40, "license"),
        ],
    )
}

/*
 * Builds a random tree with sequential ids in pre-order, so every id is unique.
 * The same seed always yields the same tree.
 */
pub(crate) fn random_tree(seed: u64, max_depth: u32) -> TreeNode {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut next_id = 0u64;
    build_random_node(&mut rng, &mut next_id, max_depth)
}

fn build_random_node(rng: &mut StdRng, next_id: &mut u64, depth_left: u32) -> TreeNode {
    let id = *next_id;
    *next_id += 1;
    let child_count = if depth_left == 0 {
        0
    } else {
        rng.random_range(0..=4)
    };
    let children = (0..child_count)
        .map(|_| build_random_node(rng, next_id, depth_left - 1))
        .collect();
    TreeNode::with_children(id, format!("node_{id}"), children)
}

// Reference pre-order listing of every descendant, excluding `node` itself.
pub(crate) fn descendants_pre_order(node: &TreeNode) -> Vec<NodeId> {
    let mut out = Vec::new();
    for child in &node.children {
        out.push(child.id);
        out.extend(descendants_pre_order(child));
    }
    out
}

pub(crate) fn count_nodes(node: &TreeNode) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}
