//! Unit test modules.

mod catalog_test;
mod milestone_test;
mod snapshot_test;
mod tier_weighting_test;
