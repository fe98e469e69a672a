//! Domain layer: list entries, reconciliation and the screens' snapshot producers.

pub mod admin_rights;
pub mod command_suggestions;
pub mod entry;
pub mod reconcile;
pub mod recent_actions;
pub mod transition;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
