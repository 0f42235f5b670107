//! One-shot report writers over the derived dashboard view.

pub mod json;
pub mod terminal;

use crate::view::DashboardView;

pub use json::JsonWriter;
pub use terminal::TerminalWriter;

/// A sink for the derived dashboard view.
pub trait OutputWriter {
    fn write_dashboard(&mut self, view: &DashboardView) -> anyhow::Result<()>;
}
