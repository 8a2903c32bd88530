/*
 * Aggregates the selection status of a node's descendants against a caller-owned
 * selection set. Both checks look only at descendants; the node's own membership in
 * the set is never consulted. A tree view typically derives a parent's checked or
 * indeterminate look from these two answers.
 */
use crate::core::{NodeId, TreeNode};
use std::collections::HashSet;

/*
 * True when every descendant of `node` is in `selected`. An internal descendant has
 * to be selected itself as well as everything under it; having all of its leaves
 * selected is not enough. A leaf has no descendants, so the answer is `true`.
 */
pub fn check_all_descendants_selected(selected: &HashSet<NodeId>, node: &TreeNode) -> bool {
    let mut all_selected = true;
    for child in &node.children {
        if child.is_leaf() {
            all_selected = all_selected && selected.contains(&child.id);
        } else {
            all_selected = all_selected
                && selected.contains(&child.id)
                && check_all_descendants_selected(selected, child);
        }
    }
    all_selected
}

/*
 * True when at least one descendant of `node` (leaf or internal) is in `selected`.
 * A leaf has no descendants, so the answer is `false`.
 */
pub fn check_any_descendant_selected(selected: &HashSet<NodeId>, node: &TreeNode) -> bool {
    let mut any_selected = false;
    for child in &node.children {
        if child.is_leaf() {
            any_selected = any_selected || selected.contains(&child.id);
        } else {
            any_selected = any_selected
                || selected.contains(&child.id)
                || check_any_descendant_selected(selected, child);
        }
    }
    any_selected
}
