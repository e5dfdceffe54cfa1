//! Provider capability and the metadata rules derived from it
//!
//! A provider is the logical panel a user sees. Placeholders cache the
//! provider's metadata and route lifecycle callbacks back to it.

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::action::{ActionContext, PointerEvent};
use crate::icon::Icon;

/// Window group every placeholder falls back to when its provider names none
pub const DEFAULT_WINDOW_GROUP: &str = "Default";

/// Stable identity used to re-match a persisted placeholder to a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Shared by every provider that cannot be duplicated
    pub const SINGLETON: InstanceId = InstanceId(0);

    /// Allocate an id unique within this process
    pub fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        InstanceId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn is_singleton(&self) -> bool {
        *self == Self::SINGLETON
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::SINGLETON
    }
}

/// What a placeholder hands to the rendering layer as panel content
#[derive(Clone)]
pub enum Content {
    /// The provider's own view, opaque to the docking core
    View(Rc<dyn Any>),
    /// No provider is bound; the renderer decides how to present nothing
    Empty,
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::View(_) => f.write_str("Content::View(..)"),
            Content::Empty => f.write_str("Content::Empty"),
        }
    }
}

/// A logical panel that can be docked
///
/// Lifecycle callbacks take `&self`; implementors that need to record state
/// use interior mutability, as everything runs on the UI thread.
pub trait Provider {
    fn name(&self) -> String;
    fn owner(&self) -> String;
    fn title(&self) -> String;

    fn sub_title(&self) -> Option<String> {
        None
    }

    /// Text for the tab; the title is used when this is `None`
    fn tab_text(&self) -> Option<String> {
        None
    }

    fn icon(&self) -> Option<Icon> {
        None
    }

    fn window_group(&self) -> Option<String> {
        None
    }

    fn instance_id(&self) -> InstanceId {
        InstanceId::SINGLETON
    }

    fn on_shown(&self) {}
    fn on_hidden(&self) {}
    fn on_activated(&self) {}
    fn on_deactivated(&self) {}
    fn on_close_requested(&self) {}

    /// Context for evaluating this provider's local actions
    fn action_context(&self, _event: Option<&PointerEvent>) -> Option<ActionContext> {
        None
    }

    /// The provider's view
    fn component(&self) -> Content;
}

/// Resolve the effective window group for a provider's declared group
pub fn resolve_group(group: Option<&str>) -> String {
    match group {
        Some(group) if !group.is_empty() => group.to_string(),
        _ => DEFAULT_WINDOW_GROUP.to_string(),
    }
}

/// Title followed by the subtitle, when there is one
pub fn full_title(title: &str, sub_title: Option<&str>) -> String {
    match sub_title {
        Some(sub) if !sub.is_empty() => format!("{} - {}", title, sub),
        _ => title.to_string(),
    }
}
