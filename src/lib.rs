//! Stable-identity list reconciliation for the RTG client's list screens.
//!
//! [`domain::reconcile::reconcile`] turns two ordered snapshots into the
//! deletions, insertions and updates a list view applies to animate between
//! them. The screens build their snapshots in [`domain`] and drive updates
//! through [`usecases::list_updates::ListUpdates`].

pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;
#[cfg(test)]
mod test_support;
pub mod ui;
pub mod usecases;

pub use domain::{
    entry::{ListEntry, RenderRow},
    reconcile::reconcile,
    transition::{Insertion, ListOperation, ListTransition, Update},
};
