use crate::core::NodeId;

// Errors raised by the stateful tree view components.
//
// The traversal helpers themselves never fail; a missing node is a `None` there. These
// variants cover operations that must act on a specific node and cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeViewError {
    /// No node with this id exists in the tree.
    NodeNotFound(NodeId),
}

impl std::fmt::Display for TreeViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeViewError::NodeNotFound(id) => write!(f, "Node not found: {}", id),
        }
    }
}

impl std::error::Error for TreeViewError {}

/// A specialized `Result` type for tree view state operations.
pub type Result<T> = std::result::Result<T, TreeViewError>;
