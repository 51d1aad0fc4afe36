use leptos::prelude::*;

const VIEW_W: f64 = 472.0;
const VIEW_H: f64 = 180.0;
const PAD_LEFT: f64 = 36.0;
const PAD_RIGHT: f64 = 8.0;
const PAD_TOP: f64 = 8.0;
const PAD_BOTTOM: f64 = 26.0;
const Y_MAX: f64 = 30.0;
const Y_TICKS: [f64; 4] = [0.0, 10.0, 20.0, 30.0];
const BAR_WIDTH: f64 = 24.0;
const CAP_RADIUS: f64 = 3.5;
const BAR_COLOR: &str = "#A8C5DA";
const GRID_COLOR: &str = "#E5E7EB";
const AXIS_COLOR: &str = "#D1D5DB";

/// One month of the projections chart: the realized value and the
/// projected headroom stacked on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub actual: f64,
    pub cap: f64,
}

impl BarPoint {
    pub fn new(label: &str, actual: f64, cap: f64) -> Self {
        Self {
            label: label.to_string(),
            actual,
            cap,
        }
    }
}

fn plot_w() -> f64 {
    VIEW_W - PAD_LEFT - PAD_RIGHT
}

fn plot_h() -> f64 {
    VIEW_H - PAD_TOP - PAD_BOTTOM
}

/// Vertical position for a value on the fixed 0..30 domain.
fn y_for(value: f64) -> f64 {
    PAD_TOP + plot_h() * (1.0 - value / Y_MAX)
}

/// Horizontal center of the `i`-th of `n` category slots.
fn slot_center(i: usize, n: usize) -> f64 {
    PAD_LEFT + plot_w() / n as f64 * (i as f64 + 0.5)
}

/// Bar outline with only the top corners rounded.
fn rounded_top_bar(x: f64, y: f64, w: f64, h: f64, radius: f64) -> String {
    let r = radius.min(h).min(w / 2.0);
    format!(
        "M {x:.2} {:.2} a {r:.2} {r:.2} 0 0 1 {r:.2} -{r:.2} h {:.2} a {r:.2} {r:.2} 0 0 1 {r:.2} {r:.2} v {:.2} h -{w:.2} Z",
        y + r,
        w - 2.0 * r,
        h - r,
    )
}

/// Stacked bar chart: solid realized bars with a half-transparent
/// projection cap rounded at the top. Horizontal grid only, 0..30 domain
/// with "M"-suffixed ticks.
#[component]
pub fn BarChart(
    /// One entry per category slot
    data: Vec<BarPoint>,
) -> impl IntoView {
    let n = data.len().max(1);

    let grid = Y_TICKS
        .iter()
        .filter(|tick| **tick > 0.0)
        .map(|tick| {
            let y = y_for(*tick);
            view! {
                <line
                    x1=PAD_LEFT
                    y1=y
                    x2=VIEW_W - PAD_RIGHT
                    y2=y
                    stroke=GRID_COLOR
                />
            }
        })
        .collect_view();

    let y_labels = Y_TICKS
        .iter()
        .map(|tick| {
            view! {
                <text
                    class="chart__tick"
                    x=PAD_LEFT - 8.0
                    y=y_for(*tick)
                    text-anchor="end"
                    dominant-baseline="central"
                >
                    {format!("{tick:.0}M")}
                </text>
            }
        })
        .collect_view();

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = slot_center(i, n) - BAR_WIDTH / 2.0;
            let actual_h = plot_h() * point.actual / Y_MAX;
            let cap_h = plot_h() * point.cap / Y_MAX;
            let cap_d = rounded_top_bar(
                x,
                y_for(point.actual + point.cap),
                BAR_WIDTH,
                cap_h,
                CAP_RADIUS,
            );
            view! {
                <rect
                    x=x
                    y=y_for(point.actual)
                    width=BAR_WIDTH
                    height=actual_h
                    fill=BAR_COLOR
                />
                <path d=cap_d fill=BAR_COLOR fill-opacity="0.5"/>
            }
        })
        .collect_view();

    let x_labels = data
        .iter()
        .enumerate()
        .map(|(i, point)| {
            view! {
                <text
                    class="chart__tick"
                    x=slot_center(i, n)
                    y=VIEW_H - 8.0
                    text-anchor="middle"
                >
                    {point.label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {VIEW_W} {VIEW_H}")>
            {grid}
            <line
                x1=PAD_LEFT
                y1=y_for(0.0)
                x2=VIEW_W - PAD_RIGHT
                y2=y_for(0.0)
                stroke=AXIS_COLOR
            />
            {y_labels}
            {bars}
            {x_labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_scale_spans_the_plot_area() {
        assert_eq!(y_for(0.0), VIEW_H - PAD_BOTTOM);
        assert_eq!(y_for(Y_MAX), PAD_TOP);
        assert!(y_for(10.0) > y_for(20.0));
    }

    #[test]
    fn slot_centers_are_evenly_spaced() {
        let step = slot_center(1, 6) - slot_center(0, 6);
        for i in 1..5 {
            let d = slot_center(i + 1, 6) - slot_center(i, 6);
            assert!((d - step).abs() < 1e-9);
        }
        assert!(slot_center(0, 6) > PAD_LEFT);
        assert!(slot_center(5, 6) < VIEW_W - PAD_RIGHT);
    }

    #[test]
    fn rounded_top_bar_is_a_closed_two_arc_outline() {
        let d = rounded_top_bar(10.0, 20.0, 24.0, 40.0, 3.5);
        assert!(d.starts_with("M "));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches(" a ").count(), 2);
    }

    #[test]
    fn rounded_top_bar_clamps_radius_to_tiny_bars() {
        // Radius cannot exceed the bar height
        let d = rounded_top_bar(10.0, 20.0, 24.0, 1.0, 3.5);
        assert!(d.contains("a 1.00 1.00"));
    }
}
