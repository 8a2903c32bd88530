/*
 * This module defines `TreeViewState`, the owner of everything a selectable tree view
 * tracks for one tree: the selection set, one `NodeUiState` per node, the active node
 * and the selection mode. Selection policy is delegated to a
 * `SelectionApplicatorOperations` implementation so it can be swapped in tests; after
 * every selection change the per-node flags are recomputed.
 */
use crate::core::error::{Result, TreeViewError};
use crate::core::node_ui_state::{NodeUiState, NodeUiStateMap, build_node_ui_states};
use crate::core::selection_applicator::{
    CoreSelectionApplicator, SelectionApplicatorOperations, refresh_ui_states,
};
use crate::core::tree_traversal::for_each_descendant;
use crate::core::{NodeId, TreeNode, TreeViewSelectionMode};
use std::collections::HashSet;

pub struct TreeViewState<'a, R> {
    root: &'a TreeNode,
    mode: TreeViewSelectionMode,
    selected: HashSet<NodeId>,
    states: NodeUiStateMap<'a, R>,
    active_id: Option<NodeId>,
    applicator: Box<dyn SelectionApplicatorOperations>,
}

impl<'a, R> TreeViewState<'a, R> {
    /// Creates the view state for `root` with nothing selected, open or active.
    pub fn new(root: &'a TreeNode, mode: TreeViewSelectionMode) -> Self {
        Self::with_applicator(root, mode, Box::new(CoreSelectionApplicator::new()))
    }

    pub fn with_applicator(
        root: &'a TreeNode,
        mode: TreeViewSelectionMode,
        applicator: Box<dyn SelectionApplicatorOperations>,
    ) -> Self {
        log::debug!(
            "TreeViewState::new called for root {} in {:?} mode.",
            root.id,
            mode
        );
        TreeViewState {
            root,
            mode,
            selected: HashSet::new(),
            states: build_node_ui_states(root),
            active_id: None,
            applicator,
        }
    }

    pub fn root(&self) -> &'a TreeNode {
        self.root
    }

    pub fn selection_mode(&self) -> TreeViewSelectionMode {
        self.mode
    }

    pub fn selected_ids(&self) -> &HashSet<NodeId> {
        &self.selected
    }

    pub fn state(&self, id: NodeId) -> Option<&NodeUiState<'a, R>> {
        self.states.get(&id)
    }

    pub fn active_id(&self) -> Option<NodeId> {
        self.active_id
    }

    fn state_mut(&mut self, id: NodeId) -> Result<&mut NodeUiState<'a, R>> {
        match self.states.get_mut(&id) {
            Some(state) => Ok(state),
            None => {
                log::warn!("TreeViewState: No state for node {}.", id);
                Err(TreeViewError::NodeNotFound(id))
            }
        }
    }

    fn refresh(&mut self) {
        refresh_ui_states(
            self.applicator.as_ref(),
            self.root,
            &self.selected,
            &mut self.states,
        );
    }

    /*
     * Toggles the selection of `id` under the current mode and refreshes every node's
     * selected and indeterminate flags. Returns the node's new selected state.
     */
    pub fn toggle_selection(&mut self, id: NodeId) -> Result<bool> {
        let now_selected =
            self.applicator
                .toggle_selection(self.root, &mut self.selected, id, self.mode)?;
        self.refresh();
        Ok(now_selected)
    }

    /*
     * Replaces the whole selection set, e.g. when the caller restores a selection, and
     * refreshes the flags. Ids are taken as given; the mode's propagation rules are not
     * applied.
     */
    pub fn set_selected_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.selected = ids.into_iter().collect();
        log::debug!(
            "TreeViewState: Selection replaced with {} ids.",
            self.selected.len()
        );
        self.refresh();
    }

    // Flips `is_open` for `id` and returns the new value.
    pub fn toggle_open(&mut self, id: NodeId) -> Result<bool> {
        let state = self.state_mut(id)?;
        state.is_open = !state.is_open;
        Ok(state.is_open)
    }

    pub fn expand_all(&mut self) {
        self.set_subtree_open(true);
    }

    pub fn collapse_all(&mut self) {
        self.set_subtree_open(false);
    }

    fn set_subtree_open(&mut self, is_open: bool) {
        let root = self.root;
        let states = &mut self.states;
        if let Some(state) = states.get_mut(&root.id) {
            state.is_open = is_open;
        }
        for_each_descendant(root, |id| {
            if let Some(state) = states.get_mut(&id) {
                state.is_open = is_open;
            }
        });
    }

    /*
     * Makes `id` the single active node. The previously active node, if any, is
     * cleared. An unknown id leaves the current active node in place.
     */
    pub fn set_active(&mut self, id: NodeId) -> Result<()> {
        self.state_mut(id)?;
        if let Some(previous) = self.active_id.take() {
            if let Some(state) = self.states.get_mut(&previous) {
                state.is_active = false;
            }
        }
        self.state_mut(id)?.is_active = true;
        self.active_id = Some(id);
        Ok(())
    }

    // Attaches a UI handle to `id`, returning whatever handle it replaces.
    pub fn attach_renderable(&mut self, id: NodeId, renderable: R) -> Result<Option<R>> {
        Ok(self.state_mut(id)?.renderable.replace(renderable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection_applicator::SelectionFlags;
    use crate::core::test_support::{project_tree, sample_tree};
    use crate::core::tree_traversal::gather_all_node_ids;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    fn set(raw: &[u64]) -> HashSet<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    // --- MockSelectionApplicator ---
    // Records toggles and selects exactly the toggled id, whatever the mode.
    struct MockSelectionApplicator {
        toggle_calls: Arc<Mutex<Vec<(NodeId, TreeViewSelectionMode)>>>,
        derive_calls: Arc<Mutex<usize>>,
    }

    impl SelectionApplicatorOperations for MockSelectionApplicator {
        fn toggle_selection(
            &self,
            _root: &TreeNode,
            selected: &mut HashSet<NodeId>,
            id: NodeId,
            mode: TreeViewSelectionMode,
        ) -> Result<bool> {
            self.toggle_calls.lock().unwrap().push((id, mode));
            selected.insert(id);
            Ok(true)
        }

        fn derive_flags(
            &self,
            root: &TreeNode,
            selected: &HashSet<NodeId>,
        ) -> HashMap<NodeId, SelectionFlags> {
            *self.derive_calls.lock().unwrap() += 1;
            gather_all_node_ids(root)
                .into_iter()
                .map(|id| {
                    let flags = SelectionFlags {
                        is_selected: selected.contains(&id),
                        is_indeterminate: false,
                    };
                    (id, flags)
                })
                .collect()
        }
    }
    // --- End MockSelectionApplicator ---

    #[test]
    fn test_new_state_has_one_entry_per_node() {
        let root = project_tree();
        let view: TreeViewState<'_, ()> = TreeViewState::new(&root, TreeViewSelectionMode::Leaf);
        assert_eq!(view.selection_mode(), TreeViewSelectionMode::Leaf);
        assert!(view.selected_ids().is_empty());
        assert!(view.active_id().is_none());
        assert_eq!(view.root().id, NodeId(10));
        for id in [10, 20, 21, 22, 30, 31, 32, 33, 40] {
            assert!(view.state(NodeId(id)).is_some(), "missing state for {id}");
        }
        assert!(view.state(NodeId(11)).is_none());
    }

    #[test]
    fn test_toggle_selection_leaf_mode_updates_flags() {
        let root = project_tree();
        let mut view: TreeViewState<'_, ()> =
            TreeViewState::new(&root, TreeViewSelectionMode::Leaf);

        assert!(view.toggle_selection(NodeId(20)).unwrap());
        assert_eq!(view.selected_ids(), &set(&[20, 21, 22]));
        assert!(view.state(NodeId(21)).unwrap().is_selected);
        assert!(view.state(NodeId(10)).unwrap().is_indeterminate);
        assert!(!view.state(NodeId(20)).unwrap().is_indeterminate);

        // Deselect one leaf: its parent drops out and turns indeterminate.
        assert!(!view.toggle_selection(NodeId(22)).unwrap());
        let docs = view.state(NodeId(20)).unwrap();
        assert!(!docs.is_selected);
        assert!(docs.is_indeterminate);
    }

    #[test]
    fn test_toggle_selection_independent_mode_leaves_children_alone() {
        let root = sample_tree();
        let mut view: TreeViewState<'_, ()> =
            TreeViewState::new(&root, TreeViewSelectionMode::Independent);

        view.toggle_selection(NodeId(3)).unwrap();
        assert_eq!(view.selected_ids(), &set(&[3]));
        assert!(!view.state(NodeId(4)).unwrap().is_selected);
        // Root sees a partial subtree.
        assert!(view.state(NodeId(1)).unwrap().is_indeterminate);
        // 3 is selected, so it is not indeterminate even though 4 is not.
        assert!(!view.state(NodeId(3)).unwrap().is_indeterminate);
    }

    #[test]
    fn test_toggle_selection_unknown_node() {
        let root = sample_tree();
        let mut view: TreeViewState<'_, ()> =
            TreeViewState::new(&root, TreeViewSelectionMode::Leaf);
        assert_eq!(
            view.toggle_selection(NodeId(99)),
            Err(TreeViewError::NodeNotFound(NodeId(99)))
        );
        assert!(view.selected_ids().is_empty());
    }

    #[test]
    fn test_set_selected_ids_refreshes_flags() {
        let root = sample_tree();
        let mut view: TreeViewState<'_, ()> =
            TreeViewState::new(&root, TreeViewSelectionMode::Independent);
        view.set_selected_ids([NodeId(2), NodeId(3), NodeId(4)]);
        let root_state = view.state(NodeId(1)).unwrap();
        assert!(!root_state.is_selected);
        assert!(!root_state.is_indeterminate);

        view.set_selected_ids(Vec::new());
        assert!(!view.state(NodeId(2)).unwrap().is_selected);
    }

    #[test]
    fn test_toggle_open_and_expand_collapse_all() {
        let root = project_tree();
        let mut view: TreeViewState<'_, ()> =
            TreeViewState::new(&root, TreeViewSelectionMode::Independent);

        assert!(view.toggle_open(NodeId(30)).unwrap());
        assert!(view.state(NodeId(30)).unwrap().is_open);
        assert!(!view.toggle_open(NodeId(30)).unwrap());
        assert_eq!(
            view.toggle_open(NodeId(5)),
            Err(TreeViewError::NodeNotFound(NodeId(5)))
        );

        view.expand_all();
        for id in [10, 20, 21, 22, 30, 31, 32, 33, 40] {
            assert!(view.state(NodeId(id)).unwrap().is_open, "{id} should be open");
        }
        view.collapse_all();
        for id in [10, 20, 21, 22, 30, 31, 32, 33, 40] {
            assert!(!view.state(NodeId(id)).unwrap().is_open, "{id} should be closed");
        }
    }

    #[test]
    fn test_set_active_keeps_single_active_node() {
        let root = project_tree();
        let mut view: TreeViewState<'_, ()> =
            TreeViewState::new(&root, TreeViewSelectionMode::Independent);

        view.set_active(NodeId(21)).unwrap();
        view.set_active(NodeId(33)).unwrap();
        assert_eq!(view.active_id(), Some(NodeId(33)));
        assert!(!view.state(NodeId(21)).unwrap().is_active);
        assert!(view.state(NodeId(33)).unwrap().is_active);

        assert!(view.set_active(NodeId(404)).is_err());
        assert_eq!(view.active_id(), Some(NodeId(33)));
        assert!(view.state(NodeId(33)).unwrap().is_active);
    }

    #[test]
    fn test_attach_renderable_returns_previous_handle() {
        let root = sample_tree();
        let mut view: TreeViewState<'_, String> =
            TreeViewState::new(&root, TreeViewSelectionMode::Independent);

        assert_eq!(view.attach_renderable(NodeId(4), "row-4".to_string()), Ok(None));
        assert_eq!(
            view.attach_renderable(NodeId(4), "row-4b".to_string()),
            Ok(Some("row-4".to_string()))
        );
        assert_eq!(
            view.state(NodeId(4)).unwrap().renderable.as_deref(),
            Some("row-4b")
        );
        assert!(view.attach_renderable(NodeId(8), "x".to_string()).is_err());
    }

    #[test]
    fn test_selection_goes_through_applicator() {
        let root = sample_tree();
        let toggle_calls = Arc::new(Mutex::new(Vec::new()));
        let derive_calls = Arc::new(Mutex::new(0));
        let applicator = MockSelectionApplicator {
            toggle_calls: Arc::clone(&toggle_calls),
            derive_calls: Arc::clone(&derive_calls),
        };
        let mut view: TreeViewState<'_, ()> = TreeViewState::with_applicator(
            &root,
            TreeViewSelectionMode::Leaf,
            Box::new(applicator),
        );

        // The mock does not cascade, so only 3 ends up selected.
        assert!(view.toggle_selection(NodeId(3)).unwrap());
        assert_eq!(view.selected_ids(), &set(&[3]));
        assert!(!view.state(NodeId(4)).unwrap().is_selected);

        assert_eq!(
            *toggle_calls.lock().unwrap(),
            vec![(NodeId(3), TreeViewSelectionMode::Leaf)]
        );
        assert_eq!(*derive_calls.lock().unwrap(), 1);
    }
}
