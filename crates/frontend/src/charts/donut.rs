use contracts::charts::ring::{
    hover_percent, label_anchor, layout_arcs, slice_path, RingConfig, RingSegment,
};
use leptos::prelude::*;

/// Donut chart with rounded asymmetric caps and a floating hover badge.
///
/// Slices are filled annulus paths, not strokes; the hovered slice is
/// redrawn slightly thicker. The badge keeps its last position while
/// fading out so it never jumps mid-transition. With an all-zero dataset
/// only the background trough renders.
#[component]
pub fn DonutChart(
    /// Slice inputs, drawn clockwise from 12 o'clock
    segments: Vec<RingSegment>,
    /// Geometry settings
    #[prop(optional)]
    config: RingConfig,
) -> impl IntoView {
    let total: f64 = segments.iter().map(|s| s.amount).sum();
    let arcs = layout_arcs(&segments, &config);

    let size = config.size;
    let center = size / 2.0;
    let radius = config.center_radius();
    let thickness = config.thickness;
    let cap_start = config.cap_start;
    let cap_end = config.cap_end;
    let trough_color = config.bg.clone();
    // Trough drawn thinner than the slices
    let trough_width = (thickness - 4.0).max(1.0);

    let hovered = RwSignal::new(None::<usize>);
    let label_visible = RwSignal::new(false);
    let label_text = RwSignal::new(String::new());
    let label_pos = RwSignal::new((50.0_f64, 50.0_f64));

    let slices = segments
        .iter()
        .zip(&arcs)
        .enumerate()
        .map(|(i, (segment, arc))| {
            let color = segment.color.clone();
            let amount = segment.amount;
            let arc = *arc;
            let anchor = label_anchor(&config, &arc);
            let d = move || {
                let t = if hovered.get() == Some(i) {
                    thickness + 2.0
                } else {
                    thickness
                };
                slice_path(center, center, radius, t, arc.start, arc.end, cap_start, cap_end)
            };
            view! {
                <path
                    class="donut__slice"
                    d=d
                    fill=color
                    on:mouseenter=move |_| {
                        label_text.set(format!("{:.1}%", hover_percent(amount, total)));
                        label_pos.set((anchor.x_pct, anchor.y_pct));
                        label_visible.set(true);
                        hovered.set(Some(i));
                    }
                    on:mouseleave=move |_| {
                        label_visible.set(false);
                        hovered.set(None);
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="donut" style=format!("width: {size}px; height: {size}px;")>
            <svg viewBox=format!("0 0 {size} {size}") width=size height=size>
                <circle
                    cx=center
                    cy=center
                    r=radius
                    fill="none"
                    stroke=trough_color
                    stroke-width=trough_width
                />
                <g>{slices}</g>
            </svg>
            <div
                class=move || {
                    if label_visible.get() {
                        "donut__badge donut__badge--visible"
                    } else {
                        "donut__badge"
                    }
                }
                style=move || {
                    let (x, y) = label_pos.get();
                    format!("left: {x:.3}%; top: {y:.3}%;")
                }
            >
                {move || label_text.get()}
            </div>
        </div>
    }
}
