//! Deferred UI work
//!
//! Commands represent side effects that must run on a later turn of the UI
//! event queue rather than inline with the state change that produced them.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Weak;

use crate::widget::WidgetSlot;

/// A focus request to repeat once pending UI work has settled
///
/// Tab selection can finish after the synchronous focus call and steal
/// focus back; the retry corrects that. It holds only a weak reference to
/// the widget and does nothing if the widget has been torn down since.
pub struct FocusRetry {
    slot: Weak<WidgetSlot>,
}

impl FocusRetry {
    pub(crate) fn new(slot: Weak<WidgetSlot>) -> Self {
        Self { slot }
    }

    /// True if the widget this retry targets no longer exists
    pub fn is_stale(&self) -> bool {
        self.slot.strong_count() == 0
    }

    /// Request focus again if the widget is still live; returns whether it acted
    pub fn run(self) -> bool {
        match self.slot.upgrade() {
            Some(slot) => {
                slot.widget().request_focus();
                true
            }
            None => {
                tracing::trace!("Skipping focus retry: widget was disposed");
                false
            }
        }
    }
}

impl std::fmt::Debug for FocusRetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusRetry")
            .field("stale", &self.is_stale())
            .finish()
    }
}

/// Commands returned by placeholder operations
#[derive(Debug, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request focus on a widget after pending UI work completes
    FocusLater(FocusRetry),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::FocusLater(_) => false,
            Cmd::Batch(cmds) => cmds.iter().all(Cmd::is_none),
        }
    }

    /// Run the command; returns how many effects actually took place
    pub fn execute(self) -> usize {
        match self {
            Cmd::None => 0,
            Cmd::FocusLater(retry) => usize::from(retry.run()),
            Cmd::Batch(cmds) => cmds.into_iter().map(Cmd::execute).sum(),
        }
    }
}

/// FIFO of commands waiting for the next turn of the UI thread
///
/// Single-threaded by construction: the queue is not `Sync`.
#[derive(Debug, Default)]
pub struct UiQueue {
    pending: RefCell<VecDeque<Cmd>>,
}

impl UiQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a command; `Cmd::None` is dropped
    pub fn invoke_later(&self, cmd: Cmd) {
        if !cmd.is_none() {
            self.pending.borrow_mut().push_back(cmd);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Run every command queued before this call
    ///
    /// Commands scheduled while running wait for the next turn. Returns the
    /// number of effects that took place.
    pub fn run_pending(&self) -> usize {
        let batch: Vec<Cmd> = self.pending.borrow_mut().drain(..).collect();
        batch.into_iter().map(Cmd::execute).sum()
    }
}
