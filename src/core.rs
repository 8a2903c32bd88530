/*
 * This module consolidates the platform-agnostic logic behind a selectable tree view.
 * It re-exports the node model (`TreeNode`, `NodeId`, `TreeViewSelectionMode`), the
 * pure traversal and selection-aggregation helpers, and the stateful pieces built on
 * them: per-node `NodeUiState`, the `SelectionApplicatorOperations` abstraction for
 * selection policy, and `TreeViewState`, which ties them together for one tree.
 */
pub mod error;
pub mod node_ui_state;
pub mod selection_aggregation;
pub mod selection_applicator;
pub mod tree_node;
pub mod tree_traversal;
pub mod tree_view_state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key structures and enums
pub use tree_node::{NodeId, TreeNode, TreeViewSelectionMode};

pub use error::TreeViewError;

// Re-export the traversal helpers
pub use tree_traversal::{
    apply_to_all_children, find_node, find_node_mut, for_each_descendant, gather_all_node_ids,
};

pub use selection_aggregation::{check_all_descendants_selected, check_any_descendant_selected};

pub use node_ui_state::{NodeUiState, NodeUiStateMap, build_node_ui_states};

pub use selection_applicator::{
    CoreSelectionApplicator, SelectionApplicatorOperations, SelectionFlags, refresh_ui_states,
};

pub use tree_view_state::TreeViewState;
