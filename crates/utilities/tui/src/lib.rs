#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/logscope/logscope/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

/// TUI events.
///
/// The [`TuiEvent`] enum carries search completions from spawned tasks back
/// to the event loop. The [`UiEvent`] enum names every user intent the key
/// map can produce.
mod events;
pub use events::{TuiEvent, UiEvent};

/// TUI event handle.
///
/// The [`TuiHandle`] struct provides a handle for sending events to the TUI.
/// It wraps an unbounded channel sender and is cloned into each search task.
mod handle;
pub use handle::TuiHandle;

/// Application state.
///
/// The [`App`] struct holds the search form, the focused [`Field`] and the
/// search controller. [`App::dispatch`] turns a [`UiEvent`] into an
/// [`Effect`] for the event loop.
mod app;
pub use app::{App, Effect, Field};

/// Key map.
mod input;
pub use input::map_key;

/// TUI implementation.
///
/// The [`LogscopeTui`] struct manages the TUI event loop and rendering. The
/// [`create_tui`] function creates both a TUI instance and a handle for sending
/// events.
mod tui;
pub use tui::{LogscopeTui, create_tui};
