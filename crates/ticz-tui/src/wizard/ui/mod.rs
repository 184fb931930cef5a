//! Rendering for the booking wizard, shared by the live TUI and the text dump.

mod content;
mod dump;
mod render;

pub use dump::dump_step;
pub use render::draw;
