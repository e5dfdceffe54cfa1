//! Shared test helpers for integration tests
//!
//! Recording fakes for every collaborator a placeholder talks to. All of
//! them append to one shared event log so tests can assert ordering.
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use docking::{
    ActionContext, Content, DockingAction, DockingConfig, DockingMode, Icon, InstanceId,
    Placeholder, PlaceholderId, PointerEvent, Provider, Toolkit, TreeNode, Widget, WidgetFactory,
    WindowNode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Provider
    Shown(String),
    Hidden(String),
    Activated(String),
    Deactivated(String),
    CloseRequested(String),

    // Tree node
    NodeInvalidated,
    TitleChanged(PlaceholderId),
    IconChanged(PlaceholderId),
    SelectedTab(PlaceholderId),
    Removed(PlaceholderId),

    // Window
    ComponentRemoved(PlaceholderId),
    WindowRestored,

    // Widget
    WidgetCreated(DockingMode),
    WidgetDisposed,
    WidgetTitle(String),
    WidgetIcon(Option<Icon>),
    WidgetSelected(bool),
    WidgetEmphasized,
    WidgetActionAdded(String),
    WidgetActionRemoved(String),
    WidgetFocused,
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

// ============================================================================
// Provider
// ============================================================================

pub struct TestProvider {
    log: EventLog,
    pub name: RefCell<String>,
    pub owner: RefCell<String>,
    pub title: RefCell<String>,
    pub sub_title: RefCell<Option<String>>,
    pub tab_text: RefCell<Option<String>>,
    pub icon: RefCell<Option<Icon>>,
    pub group: RefCell<Option<String>>,
    pub instance_id: Cell<InstanceId>,
    pub context: RefCell<Option<ActionContext>>,
}

impl TestProvider {
    pub fn new(log: &EventLog, title: &str) -> Rc<Self> {
        Rc::new(Self {
            log: Rc::clone(log),
            name: RefCell::new(format!("{}Provider", title)),
            owner: RefCell::new("TestPlugin".to_string()),
            title: RefCell::new(title.to_string()),
            sub_title: RefCell::new(None),
            tab_text: RefCell::new(None),
            icon: RefCell::new(None),
            group: RefCell::new(None),
            instance_id: Cell::new(InstanceId::SINGLETON),
            context: RefCell::new(None),
        })
    }

    fn push(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }
}

impl Provider for TestProvider {
    fn name(&self) -> String {
        self.name.borrow().clone()
    }

    fn owner(&self) -> String {
        self.owner.borrow().clone()
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn sub_title(&self) -> Option<String> {
        self.sub_title.borrow().clone()
    }

    fn tab_text(&self) -> Option<String> {
        self.tab_text.borrow().clone()
    }

    fn icon(&self) -> Option<Icon> {
        self.icon.borrow().clone()
    }

    fn window_group(&self) -> Option<String> {
        self.group.borrow().clone()
    }

    fn instance_id(&self) -> InstanceId {
        self.instance_id.get()
    }

    fn on_shown(&self) {
        self.push(Event::Shown(self.title()));
    }

    fn on_hidden(&self) {
        self.push(Event::Hidden(self.title()));
    }

    fn on_activated(&self) {
        self.push(Event::Activated(self.title()));
    }

    fn on_deactivated(&self) {
        self.push(Event::Deactivated(self.title()));
    }

    fn on_close_requested(&self) {
        self.push(Event::CloseRequested(self.title()));
    }

    fn action_context(&self, _event: Option<&PointerEvent>) -> Option<ActionContext> {
        self.context.borrow().clone()
    }

    fn component(&self) -> Content {
        Content::View(Rc::new(self.title()))
    }
}

// ============================================================================
// Tree node and window
// ============================================================================

pub struct TestWindow {
    log: EventLog,
    pub minimized: Cell<bool>,
}

impl WindowNode for TestWindow {
    fn component_removed(&self, placeholder: PlaceholderId) {
        self.log
            .borrow_mut()
            .push(Event::ComponentRemoved(placeholder));
    }

    fn is_minimized(&self) -> bool {
        self.minimized.get()
    }

    fn restore(&self) {
        self.minimized.set(false);
        self.log.borrow_mut().push(Event::WindowRestored);
    }
}

pub struct TestNode {
    log: EventLog,
    pub stacked: Cell<bool>,
    pub mode: Cell<DockingMode>,
    pub window: RefCell<Option<Rc<TestWindow>>>,
    pub children: RefCell<Vec<PlaceholderId>>,
}

impl TestNode {
    /// Attach a placeholder to this node the way the tree engine would
    pub fn adopt(self: &Rc<Self>, placeholder: &mut Placeholder) {
        let node: Rc<dyn TreeNode> = Rc::clone(self) as Rc<dyn TreeNode>;
        placeholder.set_node(Some(&node));
        self.children.borrow_mut().push(placeholder.id());
    }
}

impl TreeNode for TestNode {
    fn invalidate_layout(&self) {
        self.log.borrow_mut().push(Event::NodeInvalidated);
    }

    fn title_changed(&self, placeholder: PlaceholderId) {
        self.log.borrow_mut().push(Event::TitleChanged(placeholder));
    }

    fn icon_changed(&self, placeholder: PlaceholderId) {
        self.log.borrow_mut().push(Event::IconChanged(placeholder));
    }

    fn is_stacked(&self) -> bool {
        self.stacked.get()
    }

    fn make_selected_tab(&self, placeholder: PlaceholderId) {
        self.log.borrow_mut().push(Event::SelectedTab(placeholder));
    }

    fn top_level_node(&self) -> Option<Rc<dyn WindowNode>> {
        self.window
            .borrow()
            .clone()
            .map(|window| window as Rc<dyn WindowNode>)
    }

    fn docking_mode(&self) -> DockingMode {
        self.mode.get()
    }

    fn remove(&self, placeholder: PlaceholderId) {
        self.children.borrow_mut().retain(|id| *id != placeholder);
        self.log.borrow_mut().push(Event::Removed(placeholder));
    }
}

// ============================================================================
// Widget and factory
// ============================================================================

pub struct TestWidget {
    log: EventLog,
    pub mode: DockingMode,
    pub title: RefCell<String>,
    pub initial_actions: Vec<String>,
    pub disposed: Cell<bool>,
    pub dispose_count: Cell<usize>,
    pub focus_count: Cell<usize>,
}

impl Widget for TestWidget {
    fn dispose(&self) {
        self.disposed.set(true);
        self.dispose_count.set(self.dispose_count.get() + 1);
        self.log.borrow_mut().push(Event::WidgetDisposed);
    }

    fn set_icon(&self, icon: Option<&Icon>) {
        self.log.borrow_mut().push(Event::WidgetIcon(icon.cloned()));
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
        self.log
            .borrow_mut()
            .push(Event::WidgetTitle(title.to_string()));
    }

    fn set_selected(&self, selected: bool) {
        self.log.borrow_mut().push(Event::WidgetSelected(selected));
    }

    fn emphasize(&self) {
        self.log.borrow_mut().push(Event::WidgetEmphasized);
    }

    fn action_added(&self, action: &Rc<dyn DockingAction>) {
        self.log
            .borrow_mut()
            .push(Event::WidgetActionAdded(action.name()));
    }

    fn action_removed(&self, action: &Rc<dyn DockingAction>) {
        self.log
            .borrow_mut()
            .push(Event::WidgetActionRemoved(action.name()));
    }

    fn request_focus(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
        self.log.borrow_mut().push(Event::WidgetFocused);
    }
}

pub struct TestFactory {
    log: EventLog,
    widgets: Rc<RefCell<Vec<Rc<TestWidget>>>>,
}

impl WidgetFactory for TestFactory {
    fn create(&self, placeholder: &Placeholder, mode: DockingMode) -> Rc<dyn Widget> {
        self.log.borrow_mut().push(Event::WidgetCreated(mode));
        let widget = Rc::new(TestWidget {
            log: Rc::clone(&self.log),
            mode,
            title: RefCell::new(placeholder.full_title()),
            initial_actions: placeholder.actions().map(|a| a.name()).collect(),
            disposed: Cell::new(false),
            dispose_count: Cell::new(0),
            focus_count: Cell::new(0),
        });
        self.widgets.borrow_mut().push(Rc::clone(&widget));
        widget
    }
}

// ============================================================================
// Actions
// ============================================================================

pub struct TestAction {
    pub name: String,
    pub valid: Cell<bool>,
    pub enabled_for_context: Cell<bool>,
    pub enabled: Cell<Option<bool>>,
    /// Name of the provider the last evaluated context was keyed to
    pub seen_provider: RefCell<Option<String>>,
    /// Payload of the last evaluated context, if it was a string
    pub seen_payload: RefCell<Option<String>>,
}

impl TestAction {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            valid: Cell::new(true),
            enabled_for_context: Cell::new(true),
            enabled: Cell::new(None),
            seen_provider: RefCell::new(None),
            seen_payload: RefCell::new(None),
        })
    }
}

impl DockingAction for TestAction {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn is_valid_context(&self, context: &ActionContext) -> bool {
        *self.seen_provider.borrow_mut() = context.provider.as_ref().map(|p| p.name());
        *self.seen_payload.borrow_mut() = context.payload::<String>().cloned();
        self.valid.get()
    }

    fn is_enabled_for_context(&self, _context: &ActionContext) -> bool {
        self.enabled_for_context.get()
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.set(Some(enabled));
    }
}

pub fn as_action(action: &Rc<TestAction>) -> Rc<dyn DockingAction> {
    Rc::clone(action) as Rc<dyn DockingAction>
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub log: EventLog,
    pub toolkit: Rc<Toolkit>,
    widgets: Rc<RefCell<Vec<Rc<TestWidget>>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(DockingConfig::default())
    }

    pub fn with_config(config: DockingConfig) -> Self {
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let widgets = Rc::new(RefCell::new(Vec::new()));
        let factory = TestFactory {
            log: Rc::clone(&log),
            widgets: Rc::clone(&widgets),
        };
        Self {
            toolkit: Toolkit::new(factory, config),
            log,
            widgets,
        }
    }

    pub fn provider(&self, title: &str) -> Rc<TestProvider> {
        TestProvider::new(&self.log, title)
    }

    pub fn placeholder(&self, provider: &Rc<TestProvider>) -> Placeholder {
        Placeholder::new(
            Rc::clone(provider) as Rc<dyn Provider>,
            Rc::clone(&self.toolkit),
        )
    }

    pub fn window(&self) -> Rc<TestWindow> {
        Rc::new(TestWindow {
            log: Rc::clone(&self.log),
            minimized: Cell::new(false),
        })
    }

    pub fn node(&self) -> Rc<TestNode> {
        Rc::new(TestNode {
            log: Rc::clone(&self.log),
            stacked: Cell::new(false),
            mode: Cell::new(DockingMode::Docking),
            window: RefCell::new(None),
            children: RefCell::new(Vec::new()),
        })
    }

    /// A node inside a top-level window
    pub fn node_in_window(&self) -> (Rc<TestNode>, Rc<TestWindow>) {
        let node = self.node();
        let window = self.window();
        *node.window.borrow_mut() = Some(Rc::clone(&window));
        (node, window)
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.log.borrow().iter().filter(|e| *e == event).count()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn widgets_created(&self) -> usize {
        self.widgets.borrow().len()
    }

    pub fn last_widget(&self) -> Rc<TestWidget> {
        Rc::clone(
            self.widgets
                .borrow()
                .last()
                .expect("no widget has been created"),
        )
    }
}

/// Create a placeholder that is showing and has realized its widget
pub fn showing_with_widget(harness: &Harness, title: &str) -> (Placeholder, Rc<TestProvider>) {
    let provider = harness.provider(title);
    let mut placeholder = harness.placeholder(&provider);
    placeholder.show(true);
    placeholder
        .widget()
        .expect("placeholder is not disposed")
        .expect("showing placeholder realizes a widget");
    (placeholder, provider)
}
