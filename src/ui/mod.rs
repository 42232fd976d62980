//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard and mouse event loop, held disk
//! - **[`panes`]**: stateless render functions for the towers, game info, and status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`GameConfig`] and
//! call [`App::run`] to start the event loop.
//!
//! [`GameConfig`]: crate::config::GameConfig
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
