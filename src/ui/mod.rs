//! UI layer: row materialization and CLI output.

pub mod labels;
mod list_items;
pub mod report;
pub mod rows;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
