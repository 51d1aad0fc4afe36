pub mod info_panel;

pub use info_panel::InfoPanel;
