//! Placeholder - a provider's position in the docking tree
//!
//! A placeholder records where a logical panel sits in the layout tree and
//! what it looks like (title, icon, local actions), independent of whether
//! the panel's widget currently exists. It can outlive its provider: a
//! placeholder restored from a saved layout waits, as a "ghost", until a
//! matching provider is bound with [`Placeholder::set_provider`].
//!
//! ## Visibility
//!
//! ```text
//!            show(true)                 widget()
//!  Unshown ──────────────▶ ShowingNoWidget ──────▶ ShowingWithWidget
//!     ▲                          │                        │
//!     └──── show(false) / reset ─┴────────────────────────┘
//!
//!  any state ── dispose() ──▶ Disposed (terminal)
//! ```
//!
//! The widget is only ever built lazily by [`Placeholder::widget`] and is
//! torn down synchronously whenever visibility drops, the provider changes,
//! or the placeholder is disposed. A widget never exists while
//! [`Placeholder::is_showing`] is false.

use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::action::{same_action, ActionContext, DockingAction};
use crate::commands::{Cmd, FocusRetry};
use crate::error::{DockingError, Result};
use crate::icon::{scale_icon_as_needed, Icon};
use crate::node::{TreeNode, WindowNode};
use crate::provider::{full_title, resolve_group, Content, InstanceId, Provider};
use crate::widget::{Toolkit, Widget, WidgetSlot};

/// Process-unique handle used when talking to tree nodes about a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceholderId(pub u64);

impl PlaceholderId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        PlaceholderId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Observable visibility state, derived from the placeholder's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderState {
    Unshown,
    ShowingNoWidget,
    ShowingWithWidget,
    Disposed,
}

/// Identity fields kept when a layout is saved
///
/// Enough to rebuild a ghost placeholder and later match it to a provider
/// by name, owner and instance id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderRecord {
    pub name: String,
    pub owner: String,
    pub group: String,
    pub title: String,
    pub showing: bool,
    #[serde(default)]
    pub instance_id: InstanceId,
}

pub struct Placeholder {
    id: PlaceholderId,

    // Cached from the provider by `refresh`
    name: String,
    owner: String,
    group: String,
    title: String,
    sub_title: Option<String>,
    tab_text: String,
    icon: Option<Icon>,
    instance_id: InstanceId,

    provider: Option<Rc<dyn Provider>>,
    node: Option<Weak<dyn TreeNode>>,
    widget: Option<Rc<WidgetSlot>>,
    toolkit: Rc<Toolkit>,

    /// Wants-to-show flag; see `is_showing` for the effective state
    visible: bool,
    actions: Vec<Rc<dyn DockingAction>>,
    header_visible: bool,
    disposed: bool,
}

impl Placeholder {
    /// Create a placeholder bound to a live provider, capturing its metadata
    pub fn new(provider: Rc<dyn Provider>, toolkit: Rc<Toolkit>) -> Self {
        let header_visible = toolkit.config().show_headers;
        let mut placeholder = Self {
            id: PlaceholderId::next(),
            name: String::new(),
            owner: String::new(),
            group: String::new(),
            title: String::new(),
            sub_title: None,
            tab_text: String::new(),
            icon: None,
            instance_id: provider.instance_id(),
            provider: Some(provider),
            node: None,
            widget: None,
            toolkit,
            visible: false,
            actions: Vec::new(),
            header_visible,
            disposed: false,
        };
        placeholder.refresh();
        placeholder
    }

    /// Rebuild a ghost placeholder from a saved layout
    ///
    /// No provider is bound, so the placeholder does not count as showing
    /// even if the record says it was.
    pub fn restore(
        record: PlaceholderRecord,
        node: Option<&Rc<dyn TreeNode>>,
        toolkit: Rc<Toolkit>,
    ) -> Self {
        let header_visible = toolkit.config().show_headers;
        let tab_text = record.title.clone();
        Self {
            id: PlaceholderId::next(),
            name: record.name,
            owner: record.owner,
            group: record.group,
            title: record.title,
            sub_title: None,
            tab_text,
            icon: None,
            instance_id: record.instance_id,
            provider: None,
            node: node.map(Rc::downgrade),
            widget: None,
            toolkit,
            visible: record.showing,
            actions: Vec::new(),
            header_visible,
            disposed: false,
        }
    }

    /// Snapshot of the identity fields for persistence
    pub fn record(&self) -> PlaceholderRecord {
        PlaceholderRecord {
            name: self.name.clone(),
            owner: self.owner.clone(),
            group: self.group(),
            title: self.title.clone(),
            showing: self.visible,
            instance_id: self.instance_id,
        }
    }

    pub fn id(&self) -> PlaceholderId {
        self.id
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    // ------------------------------------------------------------------
    // Tree position
    // ------------------------------------------------------------------

    /// The tree node holding this placeholder, if it still exists
    pub fn node(&self) -> Option<Rc<dyn TreeNode>> {
        self.node.as_ref()?.upgrade()
    }

    pub fn set_node(&mut self, node: Option<&Rc<dyn TreeNode>>) {
        self.node = node.map(Rc::downgrade);
    }

    pub fn is_parented(&self) -> bool {
        self.node().is_some()
    }

    pub fn top_level_node(&self) -> Option<Rc<dyn WindowNode>> {
        self.node()?.top_level_node()
    }

    /// True if this placeholder shares a tabbed pane with others
    pub fn is_stacked(&self) -> bool {
        self.node().is_some_and(|node| node.is_stacked())
    }

    fn invalidate_node(&self) {
        if let Some(node) = self.node() {
            node.invalidate_layout();
        }
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Visible and backed by a provider
    pub fn is_showing(&self) -> bool {
        self.visible && self.provider.is_some()
    }

    /// The raw visibility flag, used to re-show providers after a restore
    pub fn wants_to_be_showing(&self) -> bool {
        self.visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn state(&self) -> PlaceholderState {
        if self.disposed {
            PlaceholderState::Disposed
        } else if !self.is_showing() {
            PlaceholderState::Unshown
        } else if self.widget.is_some() {
            PlaceholderState::ShowingWithWidget
        } else {
            PlaceholderState::ShowingNoWidget
        }
    }

    /// Show or hide; repeated calls with the same value do nothing
    ///
    /// Showing does not build the widget. That waits for the first call to
    /// [`Placeholder::widget`], once the layout decides to realize it.
    pub fn show(&mut self, show: bool) {
        if show == self.visible {
            return;
        }

        tracing::debug!(placeholder = %self.name, show, "Placeholder visibility changed");
        self.visible = show;
        self.invalidate();
    }

    /// Mark as not showing after a restore found no matching provider
    pub fn reset(&mut self) {
        tracing::debug!(placeholder = %self.name, "Placeholder reset");
        self.visible = false;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.dispose_widget();
        self.invalidate_node();

        if let Some(provider) = &self.provider {
            if self.visible {
                provider.on_shown();
            } else {
                provider.on_hidden();
            }
        }
    }

    pub fn show_header(&mut self, show: bool) {
        self.header_visible = show;
        self.invalidate_node();
    }

    pub fn is_header_showing(&self) -> bool {
        self.header_visible
    }

    /// Release the widget and detach from the tree; the placeholder cannot
    /// be realized again afterwards
    pub fn dispose(&mut self) {
        if !self.disposed {
            tracing::debug!(placeholder = %self.name, "Disposing placeholder");
        }
        self.disposed = true;
        self.dispose_widget();

        let Some(node) = self.node.take().and_then(|weak| weak.upgrade()) else {
            return;
        };

        if let Some(window) = node.top_level_node() {
            window.component_removed(self.id);
        }
        node.remove(self.id);
    }

    fn dispose_widget(&mut self) {
        if let Some(slot) = self.widget.take() {
            tracing::trace!(placeholder = %self.name, "Disposing widget");
            slot.widget().dispose();
        }
    }

    // ------------------------------------------------------------------
    // Widget
    // ------------------------------------------------------------------

    /// The realized widget, building it on first request while showing
    ///
    /// Returns `Ok(None)` when the placeholder is hidden or has no provider.
    pub fn widget(&mut self) -> Result<Option<Rc<dyn Widget>>> {
        if self.disposed {
            tracing::warn!(placeholder = %self.name, "Widget requested for disposed placeholder");
            return Err(DockingError::InvalidState {
                placeholder: self.name.clone(),
            });
        }

        if let Some(slot) = &self.widget {
            return Ok(Some(Rc::clone(slot.widget())));
        }

        if !self.is_showing() {
            return Ok(None);
        }

        let mode = self
            .node()
            .map(|node| node.docking_mode())
            .unwrap_or(self.toolkit.config().default_docking_mode);

        let toolkit = Rc::clone(&self.toolkit);
        let widget = toolkit.create_widget(self, mode);
        tracing::debug!(placeholder = %self.name, ?mode, "Widget created");
        self.widget = Some(WidgetSlot::new(Rc::clone(&widget)));
        Ok(Some(widget))
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }

    fn current_widget(&self) -> Option<&Rc<dyn Widget>> {
        self.widget.as_ref().map(|slot| slot.widget())
    }

    // ------------------------------------------------------------------
    // Provider and metadata
    // ------------------------------------------------------------------

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider(&self) -> Option<&Rc<dyn Provider>> {
        self.provider.as_ref()
    }

    /// The provider's view, or [`Content::Empty`] for a ghost
    pub fn provider_component(&self) -> Content {
        match &self.provider {
            Some(provider) => provider.component(),
            None => Content::Empty,
        }
    }

    /// Bind a new provider (or none)
    ///
    /// Local actions belong to the old provider and are dropped, as is any
    /// widget. Visibility is left unchanged.
    pub fn set_provider(&mut self, provider: Option<Rc<dyn Provider>>) {
        tracing::debug!(
            placeholder = %self.name,
            bound = provider.is_some(),
            "Placeholder provider changed"
        );
        self.provider = provider;
        self.actions.clear();
        self.dispose_widget();
        self.refresh();
    }

    /// Re-read every cached field from the bound provider
    pub fn refresh(&mut self) {
        let Some(provider) = self.provider.clone() else {
            return;
        };

        self.refresh_title(&*provider);

        self.owner = provider.owner();
        self.name = provider.name();
        self.group = resolve_group(provider.window_group().as_deref());
        self.set_icon(provider.icon());
        self.instance_id = provider.instance_id();

        tracing::trace!(placeholder = %self.name, group = %self.group, "Placeholder refreshed");
    }

    fn refresh_title(&mut self, provider: &dyn Provider) {
        self.title = provider.title();
        self.sub_title = provider.sub_title();
        self.tab_text = provider.tab_text().unwrap_or_else(|| self.title.clone());

        if let Some(widget) = self.current_widget() {
            widget.set_title(&self.full_title());
        }
        if let Some(node) = self.node() {
            node.title_changed(self.id);
        }
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = scale_icon_as_needed(icon, self.toolkit.config().tab_icon_size);

        if let Some(widget) = self.current_widget() {
            widget.set_icon(self.icon.as_ref());
        }
        if let Some(node) = self.node() {
            node.icon_changed(self.id);
        }
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sub_title(&self) -> Option<&str> {
        self.sub_title.as_deref()
    }

    pub fn tab_text(&self) -> &str {
        &self.tab_text
    }

    /// `title`, or `title - subtitle` when there is a subtitle
    pub fn full_title(&self) -> String {
        full_title(&self.title, self.sub_title.as_deref())
    }

    /// Window group, resolved from the provider when one is bound
    pub fn group(&self) -> String {
        match &self.provider {
            Some(provider) => resolve_group(provider.window_group().as_deref()),
            None => self.group.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Register a local action; registering the same action twice is an error
    pub fn add_action(&mut self, action: Rc<dyn DockingAction>) -> Result<()> {
        if self.has_action(&action) {
            tracing::warn!(
                placeholder = %self.name,
                action = %action.name(),
                "Duplicate action added"
            );
            return Err(DockingError::DuplicateRegistration {
                action: action.name(),
            });
        }

        self.actions.push(Rc::clone(&action));
        if let Some(widget) = self.current_widget() {
            widget.action_added(&action);
        }
        Ok(())
    }

    /// Unregister a local action; returns false if it was not registered
    pub fn remove_action(&mut self, action: &Rc<dyn DockingAction>) -> bool {
        let Some(index) = self.actions.iter().position(|a| same_action(a, action)) else {
            return false;
        };

        let removed = self.actions.remove(index);
        if let Some(widget) = self.current_widget() {
            widget.action_removed(&removed);
        }
        true
    }

    pub fn has_action(&self, action: &Rc<dyn DockingAction>) -> bool {
        self.actions.iter().any(|a| same_action(a, action))
    }

    /// Local actions in registration order
    pub fn actions(&self) -> impl Iterator<Item = &Rc<dyn DockingAction>> {
        self.actions.iter()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Re-evaluate the enabled state of every local action
    pub fn context_changed(&self) {
        let context = match &self.provider {
            Some(provider) => provider
                .action_context(None)
                .unwrap_or_else(|| ActionContext::new(Rc::clone(provider))),
            None => ActionContext::default(),
        };

        for action in &self.actions {
            let enabled =
                action.is_valid_context(&context) && action.is_enabled_for_context(&context);
            tracing::trace!(action = %action.name(), enabled, "Action context evaluated");
            action.set_enabled(enabled);
        }
    }

    // ------------------------------------------------------------------
    // Focus and activation
    // ------------------------------------------------------------------

    /// Select this placeholder's tab and focus its widget
    ///
    /// Returns a follow-up command that repeats the focus request once the
    /// tab switch has settled; hand it to the UI queue. Does nothing without
    /// a widget.
    pub fn request_focus(&self) -> Cmd {
        let Some(slot) = &self.widget else {
            return Cmd::None;
        };

        if let Some(node) = self.node() {
            node.make_selected_tab(self.id);
        }
        self.activate_window();

        slot.widget().request_focus();
        Cmd::FocusLater(FocusRetry::new(Rc::downgrade(slot)))
    }

    // Make sure the containing window is not minimized
    fn activate_window(&self) {
        if let Some(window) = self.top_level_node() {
            if window.is_minimized() {
                window.restore();
            }
        }
    }

    /// Select this placeholder's tab without taking focus
    pub fn to_front(&self) {
        if self.widget.is_none() {
            return;
        }
        if let Some(node) = self.node() {
            node.make_selected_tab(self.id);
        }
    }

    /// Mark the widget selected and tell the provider it was (de)activated
    pub fn set_selected(&self, selected: bool) {
        let Some(widget) = self.current_widget() else {
            return;
        };

        widget.set_selected(selected);
        if let Some(provider) = &self.provider {
            if selected {
                provider.on_activated();
            } else {
                provider.on_deactivated();
            }
        }
    }

    /// Make the widget stand out from its siblings
    pub fn emphasize(&self) {
        if let Some(widget) = self.current_widget() {
            widget.emphasize();
        }
    }

    /// Ask the provider to close itself
    pub fn close(&self) {
        if let Some(provider) = &self.provider {
            provider.on_close_requested();
        }
    }
}

impl Drop for Placeholder {
    fn drop(&mut self) {
        self.dispose_widget();
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name=\"{}\", fullTitle=\"{}\"",
            self.name,
            self.full_title()
        )
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placeholder")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("title", &self.full_title())
            .field("group", &self.group)
            .field("instance_id", &self.instance_id)
            .field("state", &self.state())
            .field("actions", &self.actions.len())
            .finish()
    }
}
