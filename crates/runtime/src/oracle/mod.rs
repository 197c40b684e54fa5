//! Bundled restriction-oracle implementations.
mod tables;

pub use tables::TableRestrictionOracle;
