use serde::{Deserialize, Serialize};
use std::fmt;

/*
 * Identifies a node within a tree. Ids are expected to be unique across the whole
 * tree; that is the caller's responsibility and is not validated by the helpers.
 * Serialized transparently so a tree reads as plain `{"id": 1, ...}` JSON.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        NodeId(value)
    }
}

/*
 * Describes how the consuming tree view relates a parent's selection to its children.
 * `Independent` lets every node be selected on its own; `Leaf` derives a parent's
 * selection from its descendants. The traversal helpers never look at this value.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeViewSelectionMode {
    Independent,
    Leaf,
}

impl Default for TreeViewSelectionMode {
    fn default() -> Self {
        TreeViewSelectionMode::Independent
    }
}

/*
 * One node of a rooted tree. Each child is owned by its parent's `children` list.
 * A missing `children` field and an empty list both describe a leaf; on the wire the
 * field is omitted for leaves.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a leaf node.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        TreeNode {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children, in order.
    pub fn with_children(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        TreeNode {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_ids(&self) -> Vec<NodeId> {
        self.children.iter().map(|child| child.id).collect()
    }
}
