//! Order history browser.

pub mod ui;
