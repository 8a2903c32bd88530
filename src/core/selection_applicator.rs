/*
 * Selection policy for a checkable tree view, built on the traversal and aggregation
 * helpers. `SelectionApplicatorOperations` abstracts how a toggle changes the selection
 * set and how a node's selected and indeterminate flags follow from it, so the view
 * state can be tested against a mock. `CoreSelectionApplicator` is the production
 * implementation.
 */
use crate::core::error::{Result, TreeViewError};
use crate::core::node_ui_state::NodeUiStateMap;
use crate::core::selection_aggregation::check_all_descendants_selected;
use crate::core::tree_traversal::{find_ancestors, find_node, for_each_descendant};
use crate::core::{NodeId, TreeNode, TreeViewSelectionMode};
use std::collections::{HashMap, HashSet};

/// Display flags derived for one node from the current selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionFlags {
    pub is_selected: bool,
    pub is_indeterminate: bool,
}

pub trait SelectionApplicatorOperations: Send + Sync {
    /*
     * Toggles the selection of `id` within `selected` according to `mode` and returns
     * the node's new selected state. Fails with `NodeNotFound` if `id` is not in the
     * tree under `root`; `selected` is left untouched in that case.
     */
    fn toggle_selection(
        &self,
        root: &TreeNode,
        selected: &mut HashSet<NodeId>,
        id: NodeId,
        mode: TreeViewSelectionMode,
    ) -> Result<bool>;

    // Computes the display flags of every node under `root` (inclusive) from `selected`.
    fn derive_flags(
        &self,
        root: &TreeNode,
        selected: &HashSet<NodeId>,
    ) -> HashMap<NodeId, SelectionFlags>;
}

pub struct CoreSelectionApplicator {}

impl CoreSelectionApplicator {
    pub fn new() -> Self {
        CoreSelectionApplicator {}
    }

    fn set_membership(selected: &mut HashSet<NodeId>, id: NodeId, is_selected: bool) {
        if is_selected {
            selected.insert(id);
        } else {
            selected.remove(&id);
        }
    }
}

impl Default for CoreSelectionApplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionApplicatorOperations for CoreSelectionApplicator {
    /*
     * In `Independent` mode only `id` flips. In `Leaf` mode the whole subtree under `id`
     * follows it, and then each ancestor, nearest first, becomes selected exactly when
     * all of its descendants are. Walking up, the subtree we came from is already known,
     * so only the siblings' subtrees are checked; each of them is visited once.
     */
    fn toggle_selection(
        &self,
        root: &TreeNode,
        selected: &mut HashSet<NodeId>,
        id: NodeId,
        mode: TreeViewSelectionMode,
    ) -> Result<bool> {
        let node = match find_node(id, root) {
            Some(node) => node,
            None => {
                log::warn!("SelectionApplicator: Cannot toggle unknown node {}.", id);
                return Err(TreeViewError::NodeNotFound(id));
            }
        };
        let new_state = !selected.contains(&id);
        log::debug!(
            "SelectionApplicator: Toggling node {} to selected={} in {:?} mode.",
            id,
            new_state,
            mode
        );

        match mode {
            TreeViewSelectionMode::Independent => {
                Self::set_membership(selected, id, new_state);
            }
            TreeViewSelectionMode::Leaf => {
                Self::set_membership(selected, id, new_state);
                for_each_descendant(node, |descendant_id| {
                    Self::set_membership(selected, descendant_id, new_state)
                });

                let mut below = node;
                let mut below_complete = check_all_descendants_selected(selected, node);
                for ancestor in find_ancestors(id, root).unwrap_or_default() {
                    let complete = ancestor.children.iter().all(|child| {
                        let child_complete = if std::ptr::eq(child, below) {
                            below_complete
                        } else {
                            check_all_descendants_selected(selected, child)
                        };
                        selected.contains(&child.id) && child_complete
                    });
                    Self::set_membership(selected, ancestor.id, complete);
                    below = ancestor;
                    below_complete = complete;
                }
            }
        }
        Ok(new_state)
    }

    /*
     * One post-order pass. A node is indeterminate when it has children, is not
     * selected itself, and only part of its subtree is selected.
     */
    fn derive_flags(
        &self,
        root: &TreeNode,
        selected: &HashSet<NodeId>,
    ) -> HashMap<NodeId, SelectionFlags> {
        // Returns (all descendants selected, any descendant selected) for `node`.
        fn recurse(
            node: &TreeNode,
            selected: &HashSet<NodeId>,
            flags: &mut HashMap<NodeId, SelectionFlags>,
        ) -> (bool, bool) {
            let mut all_selected = true;
            let mut any_selected = false;
            for child in &node.children {
                let (child_all, child_any) = recurse(child, selected, flags);
                let child_selected = selected.contains(&child.id);
                all_selected = all_selected && child_selected && child_all;
                any_selected = any_selected || child_selected || child_any;
            }
            let is_selected = selected.contains(&node.id);
            flags.insert(
                node.id,
                SelectionFlags {
                    is_selected,
                    is_indeterminate: !node.is_leaf()
                        && !is_selected
                        && any_selected
                        && !all_selected,
                },
            );
            (all_selected, any_selected)
        }

        let mut flags = HashMap::new();
        recurse(root, selected, &mut flags);
        flags
    }
}

// Recomputes `is_selected` and `is_indeterminate` for every state in `states`.
pub fn refresh_ui_states<R>(
    applicator: &dyn SelectionApplicatorOperations,
    root: &TreeNode,
    selected: &HashSet<NodeId>,
    states: &mut NodeUiStateMap<'_, R>,
) {
    let flags = applicator.derive_flags(root, selected);
    for state in states.values_mut() {
        let node_flags = flags.get(&state.id()).copied().unwrap_or_default();
        state.is_selected = node_flags.is_selected;
        state.is_indeterminate = node_flags.is_indeterminate;
    }
    log::trace!(
        "SelectionApplicator: Refreshed {} node states against {} selected ids.",
        states.len(),
        selected.len()
    );
}
