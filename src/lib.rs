/*
 * Tree traversal and selection helpers for a checkable tree view: finding nodes by id,
 * flattening subtrees, applying callbacks to every descendant, and aggregating the
 * selection state of a node's descendants. The `core` module holds the implementation;
 * the commonly used items are re-exported here.
 */
pub mod core;

pub use crate::core::{
    CoreSelectionApplicator, NodeId, NodeUiState, NodeUiStateMap, SelectionApplicatorOperations,
    SelectionFlags, TreeNode, TreeViewError, TreeViewSelectionMode, TreeViewState,
    apply_to_all_children, build_node_ui_states, check_all_descendants_selected,
    check_any_descendant_selected, find_node, find_node_mut, for_each_descendant,
    gather_all_node_ids, refresh_ui_states,
};
