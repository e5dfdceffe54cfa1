//! Layout tree collaborators
//!
//! The tree engine that arranges placeholders into splits and tabs lives
//! outside this crate. Placeholders only see the narrow surface below and
//! hold their node through a non-owning `Weak` reference.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::placeholder::PlaceholderId;

/// Whether widgets are embedded in the main window or floated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DockingMode {
    #[default]
    Docking,
    Floating,
}

impl DockingMode {
    pub fn is_docking(&self) -> bool {
        matches!(self, DockingMode::Docking)
    }
}

/// A layout-tree position (split region, tab group, or detached window)
/// that owns zero or more placeholders
pub trait TreeNode {
    /// Drop cached layout so the renderer re-queries this node
    fn invalidate_layout(&self);

    /// A child placeholder's title changed; tab labels may need a refresh
    fn title_changed(&self, placeholder: PlaceholderId);

    /// A child placeholder's icon changed; tabs may need a redraw
    fn icon_changed(&self, placeholder: PlaceholderId);

    /// True if the node shows its children as tabs in one pane
    fn is_stacked(&self) -> bool;

    fn make_selected_tab(&self, placeholder: PlaceholderId);

    /// The window that ultimately contains this node
    fn top_level_node(&self) -> Option<Rc<dyn WindowNode>>;

    fn docking_mode(&self) -> DockingMode;

    /// Remove a child placeholder from this node
    fn remove(&self, placeholder: PlaceholderId);
}

/// Top-level window container (main frame or detached window)
pub trait WindowNode {
    /// A placeholder below this window was disposed
    fn component_removed(&self, placeholder: PlaceholderId);

    fn is_minimized(&self) -> bool {
        false
    }

    /// Bring a minimized window back to its normal state
    fn restore(&self) {}
}
