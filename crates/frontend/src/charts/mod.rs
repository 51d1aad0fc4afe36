//! SVG chart components. All geometry for the donut comes from
//! `contracts::charts::ring`; the bar and line charts lay themselves out
//! against a fixed 0..30 value domain.

pub mod bar_chart;
pub mod donut;
pub mod line_chart;

pub use bar_chart::{BarChart, BarPoint};
pub use donut::DonutChart;
pub use line_chart::{LineChart, LinePoint};
