//! Traits describing the external collaborators the warden depends on.
//!
//! The only one is the permission-policy oracle. Keeping it a trait lets
//! tests substitute a double without touching the interceptor or the
//! reconciler.
mod restrictions;

pub use restrictions::RestrictionOracle;
