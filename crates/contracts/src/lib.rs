//! Shared contracts for the admin dashboard.
//!
//! Everything in this crate is pure and host-testable: the order data model
//! with its synthetic data set, the filter/search/sort/paginate pipeline the
//! order list is built on, and the ring chart geometry engine. No UI types
//! leak in here; the frontend consumes these modules through plain function
//! calls and owns all reactivity itself.

pub mod charts;
pub mod domain;
