/*
 * This module defines `NodeUiState`, the per-node view state a tree view keeps next
 * to its `TreeNode` data, and the builder that creates one state per node. The map is
 * keyed by node id; parent and child ids are denormalized from the tree so state
 * lookups do not need to walk it again.
 */
use crate::core::{NodeId, TreeNode};
use std::collections::HashMap;

pub type NodeUiStateMap<'a, R> = HashMap<NodeId, NodeUiState<'a, R>>;

/*
 * Interaction state for a single node. `renderable` is whatever handle the UI layer
 * attaches to the node; it is carried but never inspected here. `item` points back at
 * the node this state describes.
 */
#[derive(Debug)]
pub struct NodeUiState<'a, R> {
    /* Id of the parent node; `None` for the root. */
    pub parent: Option<NodeId>,
    /* Ids of the direct children, in tree order. */
    pub children: Vec<NodeId>,
    pub renderable: Option<R>,
    pub is_active: bool,
    pub is_selected: bool,
    pub is_indeterminate: bool,
    pub is_open: bool,
    pub item: &'a TreeNode,
}

impl<'a, R> NodeUiState<'a, R> {
    /// Creates a state with every flag cleared and no renderable attached.
    pub fn new(item: &'a TreeNode, parent: Option<NodeId>) -> Self {
        NodeUiState {
            parent,
            children: item.child_ids(),
            renderable: None,
            is_active: false,
            is_selected: false,
            is_indeterminate: false,
            is_open: false,
            item,
        }
    }

    pub fn id(&self) -> NodeId {
        self.item.id
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/*
 * Walks the tree pre-order and creates a `NodeUiState` for every node, the root
 * included. If two nodes share an id the later one replaces the earlier entry.
 */
pub fn build_node_ui_states<R>(root: &TreeNode) -> NodeUiStateMap<'_, R> {
    fn recurse<'a, R>(
        node: &'a TreeNode,
        parent: Option<NodeId>,
        states: &mut NodeUiStateMap<'a, R>,
    ) {
        if states
            .insert(node.id, NodeUiState::new(node, parent))
            .is_some()
        {
            log::warn!(
                "NodeUiState: Duplicate node id {} in tree; keeping the later node.",
                node.id
            );
        }
        for child in &node.children {
            recurse(child, Some(node.id), states);
        }
    }

    let mut states = HashMap::new();
    recurse(root, None, &mut states);
    log::debug!(
        "NodeUiState: Built {} node states for root {}.",
        states.len(),
        root.id
    );
    states
}
