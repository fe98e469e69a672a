//! Use case layer: list update loops and snapshot workflows.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod diff_snapshots;
pub mod list_updates;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
