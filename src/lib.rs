//! Docking - placeholder core for a docking window manager
//!
//! A [`Placeholder`] tracks where a logical panel ([`Provider`]) sits in the
//! layout tree, independent of whether its on-screen [`Widget`] exists. It
//! mediates show/hide/dispose transitions, keeps cached title, icon and
//! local actions in sync with the tree node that renders it, and schedules
//! the one piece of deferred UI work (a focus retry) through [`Cmd`].
//!
//! The widget toolkit, the layout tree engine and layout persistence are
//! collaborators, reached through the traits in [`node`], [`widget`] and
//! [`provider`]. Everything runs on a single UI thread.

pub mod action;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod icon;
pub mod node;
pub mod placeholder;
pub mod provider;
pub mod tracing;
pub mod widget;

// Re-export commonly used types
pub use action::{ActionContext, DockingAction, PointerEvent};
pub use commands::{Cmd, FocusRetry, UiQueue};
pub use config::DockingConfig;
pub use error::{DockingError, Result};
pub use icon::Icon;
pub use node::{DockingMode, TreeNode, WindowNode};
pub use placeholder::{Placeholder, PlaceholderId, PlaceholderRecord, PlaceholderState};
pub use provider::{Content, InstanceId, Provider, DEFAULT_WINDOW_GROUP};
pub use widget::{Toolkit, Widget, WidgetFactory};
