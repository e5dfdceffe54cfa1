//! Realized on-screen wrappers and the toolkit that builds them

use std::fmt;
use std::rc::Rc;

use crate::action::DockingAction;
use crate::config::DockingConfig;
use crate::icon::Icon;
use crate::node::DockingMode;
use crate::placeholder::Placeholder;

/// The dockable wrapper a toolkit draws for a showing placeholder
pub trait Widget {
    /// Release toolkit resources; called exactly once per widget
    fn dispose(&self);
    fn set_icon(&self, icon: Option<&Icon>);
    fn set_title(&self, title: &str);
    fn set_selected(&self, selected: bool);
    /// Draw attention to the widget (flash, highlight)
    fn emphasize(&self);
    fn action_added(&self, action: &Rc<dyn DockingAction>);
    fn action_removed(&self, action: &Rc<dyn DockingAction>);
    fn request_focus(&self);
}

/// Builds widgets on behalf of placeholders
pub trait WidgetFactory {
    /// Create the widget for `placeholder`, bound to its current metadata
    /// and local actions
    fn create(&self, placeholder: &Placeholder, mode: DockingMode) -> Rc<dyn Widget>;
}

/// Widget factory plus configuration, shared by every placeholder of a
/// window manager
pub struct Toolkit {
    factory: Box<dyn WidgetFactory>,
    config: DockingConfig,
}

impl Toolkit {
    pub fn new(factory: impl WidgetFactory + 'static, config: DockingConfig) -> Rc<Self> {
        Rc::new(Self {
            factory: Box::new(factory),
            config,
        })
    }

    pub fn with_defaults(factory: impl WidgetFactory + 'static) -> Rc<Self> {
        Self::new(factory, DockingConfig::default())
    }

    pub fn config(&self) -> &DockingConfig {
        &self.config
    }

    pub(crate) fn create_widget(
        &self,
        placeholder: &Placeholder,
        mode: DockingMode,
    ) -> Rc<dyn Widget> {
        self.factory.create(placeholder, mode)
    }
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// The placeholder's exclusive hold on its widget
///
/// Only the owning placeholder keeps a strong reference to the slot, so a
/// `Weak<WidgetSlot>` stops upgrading the moment the widget is torn down,
/// even if the toolkit still holds the widget itself.
pub(crate) struct WidgetSlot {
    widget: Rc<dyn Widget>,
}

impl WidgetSlot {
    pub(crate) fn new(widget: Rc<dyn Widget>) -> Rc<Self> {
        Rc::new(Self { widget })
    }

    pub(crate) fn widget(&self) -> &Rc<dyn Widget> {
        &self.widget
    }
}
