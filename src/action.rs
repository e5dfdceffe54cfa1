//! Local actions and the context they are evaluated against

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::provider::Provider;

/// Pointer location that triggered a context request, in widget coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

/// Context handed to actions when deciding whether they apply
#[derive(Clone, Default)]
pub struct ActionContext {
    /// Provider the context was produced for
    pub provider: Option<Rc<dyn Provider>>,
    /// Provider-specific payload (selection, cursor location, ...)
    pub payload: Option<Rc<dyn Any>>,
}

impl ActionContext {
    pub fn new(provider: Rc<dyn Provider>) -> Self {
        Self {
            provider: Some(provider),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Rc<dyn Any>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Downcast the payload, if any
    pub fn payload<T: 'static>(&self) -> Option<&T> {
        self.payload.as_ref()?.downcast_ref::<T>()
    }
}

impl fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("payload", &self.payload.is_some())
            .finish()
    }
}

/// An action scoped to a single provider
///
/// Actions are compared by identity, never by name.
pub trait DockingAction {
    fn name(&self) -> String;
    fn is_valid_context(&self, context: &ActionContext) -> bool;
    fn is_enabled_for_context(&self, context: &ActionContext) -> bool;
    fn set_enabled(&self, enabled: bool);
}

/// Identity comparison for shared action handles
pub fn same_action(a: &Rc<dyn DockingAction>, b: &Rc<dyn DockingAction>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
