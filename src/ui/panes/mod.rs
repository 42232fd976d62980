//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`towers`]: The three pegs with their disks, one bordered column each
//! - [`info`]: Move counter, minimum moves, clock, and notices
//! - [`status`]: Status bar with keybindings and the game mode badge
//!
//! Each pane module exports a `render_*` function taking a small
//! `*RenderData` struct, so panes never reach into the session directly.

pub mod info;
pub mod status;
pub mod towers;

// Re-export render functions for convenience
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, GameMode};
pub use towers::{render_tower_pane, tower_areas, TowerRenderData};
