/*
 * Depth-first traversal helpers over a `TreeNode` tree: lookup by id, flattening
 * the ids of a subtree, and running a caller-supplied callback on every descendant.
 * All traversals are pre-order and visit children in their stored order.
 */
use crate::core::{NodeId, TreeNode};
use std::convert::Infallible;

/*
 * Searches `root` (inclusive) for the node with `target_id`.
 * The root is checked first, then each child subtree left to right; the first match
 * wins. Returns `None` when no node carries the id.
 */
pub fn find_node(target_id: NodeId, root: &TreeNode) -> Option<&TreeNode> {
    log::trace!("TreeTraversal: find_node {} from root {}", target_id, root.id);

    fn recurse(target_id: NodeId, node: &TreeNode) -> Option<&TreeNode> {
        if node.id == target_id {
            return Some(node);
        }
        for child in &node.children {
            if let Some(found_in_child) = recurse(target_id, child) {
                return Some(found_in_child);
            }
        }
        None
    }

    recurse(target_id, root)
}

// Same search order as `find_node`, yielding a mutable reference.
pub fn find_node_mut(target_id: NodeId, root: &mut TreeNode) -> Option<&mut TreeNode> {
    if root.id == target_id {
        return Some(root);
    }
    for child in root.children.iter_mut() {
        if let Some(found_in_child) = find_node_mut(target_id, child) {
            return Some(found_in_child);
        }
    }
    None
}

/*
 * Flattens the ids of `node`'s subtree. Every direct child contributes its own id
 * followed by the ids of its descendants (same rule, recursively); `node`'s own id is
 * appended last. Each id appears exactly once.
 *
 * For `1 -> [2, 3 -> [4]]` the result is `[2, 3, 4, 1]`.
 */
pub fn gather_all_node_ids(node: &TreeNode) -> Vec<NodeId> {
    log::trace!("TreeTraversal: gather_all_node_ids under {}", node.id);

    fn collect_descendants(node: &TreeNode, ids: &mut Vec<NodeId>) {
        for child in &node.children {
            ids.push(child.id);
            collect_descendants(child, ids);
        }
    }

    let mut ids = Vec::new();
    collect_descendants(node, &mut ids);
    ids.push(node.id);
    ids
}

/*
 * Calls `f` with the id of every descendant of `node`, pre-order, depth-first, left to
 * right. `node`'s own id is never passed. The first error returned by `f` stops the
 * traversal and is handed back to the caller unchanged; nodes after it are not visited.
 */
pub fn apply_to_all_children<E, F>(node: &TreeNode, mut f: F) -> Result<(), E>
where
    F: FnMut(NodeId) -> Result<(), E>,
{
    fn recurse<E, F>(node: &TreeNode, f: &mut F) -> Result<(), E>
    where
        F: FnMut(NodeId) -> Result<(), E>,
    {
        for child in &node.children {
            f(child.id)?;
            recurse(child, f)?;
        }
        Ok(())
    }

    recurse(node, &mut f)
}

// Infallible variant of `apply_to_all_children`.
pub fn for_each_descendant<F>(node: &TreeNode, mut f: F)
where
    F: FnMut(NodeId),
{
    let result: Result<(), Infallible> = apply_to_all_children(node, |id| {
        f(id);
        Ok(())
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/*
 * Returns every ancestor of `target_id`, nearest parent first and the root last.
 * `Some(vec![])` means `target_id` is the root itself; `None` means it is not in the
 * tree.
 */
pub(crate) fn find_ancestors(target_id: NodeId, root: &TreeNode) -> Option<Vec<&TreeNode>> {
    fn recurse<'a>(target_id: NodeId, node: &'a TreeNode, path: &mut Vec<&'a TreeNode>) -> bool {
        if node.id == target_id {
            return true;
        }
        path.push(node);
        for child in &node.children {
            if recurse(target_id, child, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    if recurse(target_id, root, &mut path) {
        path.reverse();
        Some(path)
    } else {
        None
    }
}
