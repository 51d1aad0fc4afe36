//! Domain data model.

pub mod orders;
