//! Chart geometry, kept free of any rendering concern.

pub mod ring;
