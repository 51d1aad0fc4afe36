pub mod ecommerce;

pub use ecommerce::ui::EcommerceDashboard;
