//! Line protocol spoken with TCP clients.

pub mod command;
pub mod render;

pub use command::{parse_line, Inbound};
pub use render::{hand_grid, render_event, Viewer};
