//! The two enforcement hooks the host engine calls into.
//!
//! - `interceptor`: inline allow/veto decisions for attempted actions
//! - `reconcile`: the periodic inventory-correction sweep
mod interceptor;
mod reconcile;

pub use interceptor::decide;
pub use reconcile::{Reconciler, SweepReport};
