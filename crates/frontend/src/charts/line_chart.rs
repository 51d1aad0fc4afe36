use leptos::prelude::*;

const VIEW_W: f64 = 620.0;
const VIEW_H: f64 = 222.0;
const PAD_LEFT: f64 = 36.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 26.0;
const Y_MAX: f64 = 30.0;
const Y_TICKS: [f64; 4] = [0.0, 10.0, 20.0, 30.0];
const CURRENT_COLOR: &str = "#A8C5DA";
const AXIS_COLOR: &str = "#D1D5DB";

/// One month of the revenue chart. The comparison series is split into a
/// solid stretch and a dashed projection stretch; both are optional per
/// point and the two overlap on the hand-off month.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub current: f64,
    pub prev_solid: Option<f64>,
    pub prev_dashed: Option<f64>,
}

impl LinePoint {
    pub fn new(
        label: &str,
        current: f64,
        prev_solid: Option<f64>,
        prev_dashed: Option<f64>,
    ) -> Self {
        Self {
            label: label.to_string(),
            current,
            prev_solid,
            prev_dashed,
        }
    }
}

fn plot_w() -> f64 {
    VIEW_W - PAD_LEFT - PAD_RIGHT
}

fn plot_h() -> f64 {
    VIEW_H - PAD_TOP - PAD_BOTTOM
}

fn y_for(value: f64) -> f64 {
    PAD_TOP + plot_h() * (1.0 - value / Y_MAX)
}

/// Points span the plot edge to edge.
fn x_for(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return PAD_LEFT;
    }
    PAD_LEFT + plot_w() * i as f64 / (n - 1) as f64
}

/// Catmull-Rom smoothing through every point, emitted as cubic Béziers.
fn smooth_path(points: &[(f64, f64)]) -> String {
    match points {
        [] => String::new(),
        [p] => format!("M {:.2} {:.2}", p.0, p.1),
        _ => {
            let n = points.len();
            let mut d = format!("M {:.2} {:.2}", points[0].0, points[0].1);
            for i in 0..n - 1 {
                let p0 = if i == 0 { points[0] } else { points[i - 1] };
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = if i + 2 < n { points[i + 2] } else { p2 };
                let c1 = (p1.0 + (p2.0 - p0.0) / 6.0, p1.1 + (p2.1 - p0.1) / 6.0);
                let c2 = (p2.0 - (p3.0 - p1.0) / 6.0, p2.1 - (p3.1 - p1.1) / 6.0);
                d.push_str(&format!(
                    " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
                ));
            }
            d
        }
    }
}

/// Splits an optional series into contiguous runs, dropping gaps instead of
/// connecting across them.
fn series_runs(xs: &[f64], values: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut run = Vec::new();
    for (x, value) in xs.iter().zip(values) {
        match value {
            Some(v) => run.push((*x, y_for(*v))),
            None => {
                if !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
            }
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

/// Revenue line chart: a smoothed area-backed series plus a comparison
/// line that switches from solid to dashed where history ends.
#[component]
pub fn LineChart(
    /// One entry per category slot
    data: Vec<LinePoint>,
) -> impl IntoView {
    let n = data.len().max(1);
    let xs: Vec<f64> = (0..data.len()).map(|i| x_for(i, n)).collect();

    let current: Vec<(f64, f64)> = data
        .iter()
        .zip(&xs)
        .map(|(p, x)| (*x, y_for(p.current)))
        .collect();
    let current_d = smooth_path(&current);
    let area_d = match (current.first(), current.last()) {
        (Some(first), Some(last)) => format!(
            "{} L {:.2} {:.2} L {:.2} {:.2} Z",
            current_d,
            last.0,
            y_for(0.0),
            first.0,
            y_for(0.0)
        ),
        _ => String::new(),
    };

    let solid: Vec<Option<f64>> = data.iter().map(|p| p.prev_solid).collect();
    let dashed: Vec<Option<f64>> = data.iter().map(|p| p.prev_dashed).collect();
    let solid_paths = series_runs(&xs, &solid)
        .iter()
        .map(|run| {
            let d = smooth_path(run);
            view! { <path class="chart__prev-line" d=d fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round"/> }
        })
        .collect_view();
    let dashed_paths = series_runs(&xs, &dashed)
        .iter()
        .map(|run| {
            let d = smooth_path(run);
            view! { <path class="chart__prev-line" d=d fill="none" stroke="currentColor" stroke-width="4" stroke-linecap="round" stroke-dasharray="6 6"/> }
        })
        .collect_view();

    let grid = Y_TICKS
        .iter()
        .filter(|tick| **tick > 0.0)
        .map(|tick| {
            let y = y_for(*tick);
            view! {
                <line
                    class="chart__grid-line"
                    x1=PAD_LEFT
                    y1=y
                    x2=VIEW_W - PAD_RIGHT
                    y2=y
                    stroke-dasharray="3 3"
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

    let x_labels = data
        .iter()
        .enumerate()
        .map(|(i, point)| {
            view! {
                <text
                    class="chart__tick"
                    x=x_for(i, n)
                    y=VIEW_H - 8.0
                    text-anchor="middle"
                >
                    {point.label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--line" viewBox=format!("0 0 {VIEW_W} {VIEW_H}")>
            <defs>
                <linearGradient id="revenue-fill" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color=CURRENT_COLOR stop-opacity="0.5"/>
                    <stop offset="100%" stop-color=CURRENT_COLOR stop-opacity="0"/>
                </linearGradient>
            </defs>
            {grid}
            <line
                x1=PAD_LEFT
                y1=y_for(0.0)
                x2=VIEW_W - PAD_RIGHT
                y2=y_for(0.0)
                stroke=AXIS_COLOR
            />
            {y_labels}
            <path d=area_d fill="url(#revenue-fill)" stroke="none"/>
            <path
                d=current_d
                fill="none"
                stroke=CURRENT_COLOR
                stroke-width="5"
                stroke-linecap="round"
            />
            {solid_paths}
            {dashed_paths}
            {x_labels}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_positions_span_edge_to_edge() {
        assert_eq!(x_for(0, 6), PAD_LEFT);
        assert_eq!(x_for(5, 6), VIEW_W - PAD_RIGHT);
        assert_eq!(x_for(0, 1), PAD_LEFT);
    }

    #[test]
    fn smooth_path_passes_through_endpoints() {
        let d = smooth_path(&[(0.0, 0.0), (10.0, 20.0), (20.0, 5.0)]);
        assert!(d.starts_with("M 0.00 0.00"));
        assert!(d.ends_with("20.00 5.00"));
        assert_eq!(d.matches(" C ").count(), 2);
    }

    #[test]
    fn series_runs_split_on_gaps() {
        let xs = [0.0, 10.0, 20.0, 30.0, 40.0];
        let vals = [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)];
        let runs = series_runs(&xs, &vals);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 2);
        assert_eq!(runs[1][0].0, 30.0);
    }

    #[test]
    fn series_runs_of_all_none_is_empty() {
        let runs = series_runs(&[0.0, 10.0], &[None, None]);
        assert!(runs.is_empty());
    }
}
