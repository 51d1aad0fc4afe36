//! Ring (donut) chart geometry engine.
//!
//! Converts `(name, color, amount)` segments into renderable annulus slices:
//! angular sweep proportional to the amount, a fixed visual gap between
//! neighbours, and a filled outline path with independently configurable
//! rounded caps at each end. The frontend only formats the results into SVG
//! attributes; every number comes from here.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Sweep floor in radians so zero/near-zero segments stay visible as a
/// sliver instead of vanishing.
pub const MIN_SWEEP: f64 = 0.04;

/// Extra radial offset of the hover label beyond the outer edge, in px.
const LABEL_OFFSET: f64 = 4.0;

/// One slice input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegment {
    pub name: String,
    pub color: String,
    pub amount: f64,
}

impl RingSegment {
    pub fn new(name: &str, color: &str, amount: f64) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            amount,
        }
    }
}

/// Cap shape at a slice end: `Outer` bulges outward (convex), `Inner` curves
/// inward (concave).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStyle {
    Outer,
    Inner,
}

/// Layout configuration. `size` is the square bounding box edge in px;
/// `bg` is the trough color behind the slices.
#[derive(Debug, Clone, PartialEq)]
pub struct RingConfig {
    pub size: f64,
    pub thickness: f64,
    pub gap_px: f64,
    pub bg: String,
    pub cap_start: CapStyle,
    pub cap_end: CapStyle,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            size: 112.0,
            thickness: 18.0,
            gap_px: 4.0,
            bg: "#F7F9FB".to_string(),
            cap_start: CapStyle::Outer,
            cap_end: CapStyle::Inner,
        }
    }
}

impl RingConfig {
    /// Centerline radius, leaving room so the caps don't clip the box.
    pub fn center_radius(&self) -> f64 {
        (self.size - self.thickness) / 2.0
    }

    /// Effective angular gap at the centerline.
    ///
    /// Not simply `gap_px / r`: the rounded caps visually eat into the gap,
    /// so it is widened by 30% of the thickness before converting to
    /// radians. The 0.3 factor is a visual tunable, not a derivation.
    pub fn gap_angle(&self) -> f64 {
        (self.gap_px + self.thickness * 0.3) / self.center_radius()
    }
}

/// Angular span of one laid-out slice, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingArc {
    pub start: f64,
    pub end: f64,
    /// Mid angle, where the hover label anchors.
    pub center: f64,
    /// Rendered span (`end - start`), post gap adjustment and sliver floor.
    pub sweep: f64,
}

/// Hover label position as percentages of the bounding box, for absolute
/// overlay placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub x_pct: f64,
    pub y_pct: f64,
}

pub fn polar_point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Lays segments out consecutively starting at 12 o'clock (`-π/2`).
///
/// Each segment's raw allocation is `amount/total * 2π`; the rendered arc is
/// that allocation minus the gap (floored at [`MIN_SWEEP`]) and centered
/// within it, so half the gap sits on each side. Returns one arc per input
/// segment, index-aligned.
///
/// When the total amount is zero (or negative) there is nothing to allocate:
/// the result is empty and the caller renders only the background trough.
/// No division happens in that case.
pub fn layout_arcs(segments: &[RingSegment], config: &RingConfig) -> Vec<RingArc> {
    let total: f64 = segments.iter().map(|s| s.amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let gap_angle = config.gap_angle();
    let mut cursor = -PI / 2.0;

    segments
        .iter()
        .map(|segment| {
            let raw = (segment.amount / total) * TAU;
            let sweep = (raw - gap_angle).max(MIN_SWEEP);
            let start = cursor + gap_angle / 2.0;
            let end = start + sweep;
            cursor += raw;
            RingArc {
                start,
                end,
                center: start + sweep / 2.0,
                sweep,
            }
        })
        .collect()
}

/// SVG large-arc flag: needed once a perimeter arc spans more than half the
/// circle.
fn large_arc(a0: f64, a1: f64) -> u8 {
    if a1 - a0 > PI {
        1
    } else {
        0
    }
}

/// Builds the filled outline of one annulus slice with asymmetric caps.
///
/// Outline order: outer perimeter from start to end, end cap across the
/// thickness, inner perimeter back, start cap closing the shape. Cap sweep
/// flags pick the bulge direction per [`CapStyle`].
pub fn slice_path(
    cx: f64,
    cy: f64,
    r_center: f64,
    thickness: f64,
    a0: f64,
    a1: f64,
    cap_start: CapStyle,
    cap_end: CapStyle,
) -> String {
    let r_out = r_center + thickness / 2.0;
    let r_in = r_center - thickness / 2.0;
    // Half-circle cap radius.
    let rc = thickness / 2.0;
    let large = large_arc(a0, a1);

    let (out0_x, out0_y) = polar_point(cx, cy, r_out, a0);
    let (out1_x, out1_y) = polar_point(cx, cy, r_out, a1);
    let (in1_x, in1_y) = polar_point(cx, cy, r_in, a1);
    let (in0_x, in0_y) = polar_point(cx, cy, r_in, a0);

    let end_cap_sweep = match cap_end {
        CapStyle::Outer => 0,
        CapStyle::Inner => 1,
    };
    let start_cap_sweep = match cap_start {
        CapStyle::Outer => 1,
        CapStyle::Inner => 0,
    };

    format!(
        "M {out0_x:.3} {out0_y:.3} \
         A {r_out:.3} {r_out:.3} 0 {large} 1 {out1_x:.3} {out1_y:.3} \
         A {rc:.3} {rc:.3} 0 0 {end_cap_sweep} {in1_x:.3} {in1_y:.3} \
         A {r_in:.3} {r_in:.3} 0 {large} 0 {in0_x:.3} {in0_y:.3} \
         A {rc:.3} {rc:.3} 0 0 {start_cap_sweep} {out0_x:.3} {out0_y:.3} \
         Z"
    )
}

/// Hover label anchor: a point just past the outer edge along the arc's
/// center angle, as percentages of the bounding box.
pub fn label_anchor(config: &RingConfig, arc: &RingArc) -> LabelAnchor {
    let radius = config.center_radius() + config.thickness / 2.0 + LABEL_OFFSET;
    let (x, y) = polar_point(config.size / 2.0, config.size / 2.0, radius, arc.center);
    LabelAnchor {
        x_pct: x / config.size * 100.0,
        y_pct: y / config.size * 100.0,
    }
}

/// Displayed hover percentage, rounded to one decimal. Zero total shows 0.
pub fn hover_percent(amount: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (amount / total * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    fn gapless_config() -> RingConfig {
        // Zero thickness zeroes out the cap widening, so the gap vanishes
        // entirely and sweeps equal the raw proportional allocation.
        RingConfig {
            thickness: 0.0,
            gap_px: 0.0,
            ..RingConfig::default()
        }
    }

    fn segments(amounts: &[f64]) -> Vec<RingSegment> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, amount)| RingSegment::new(&format!("s{i}"), "#000000", *amount))
            .collect()
    }

    #[test]
    fn sweeps_are_proportional_without_gap() {
        let arcs = layout_arcs(&segments(&[1.0, 1.0, 2.0]), &gapless_config());
        assert_eq!(arcs.len(), 3);
        approx(arcs[0].sweep, PI / 2.0);
        approx(arcs[1].sweep, PI / 2.0);
        approx(arcs[2].sweep, PI);
    }

    #[test]
    fn layout_starts_at_twelve_o_clock_and_advances_by_raw_allocation() {
        let arcs = layout_arcs(&segments(&[1.0, 1.0, 2.0]), &gapless_config());
        approx(arcs[0].start, -PI / 2.0);
        approx(arcs[1].start, 0.0);
        approx(arcs[2].start, PI / 2.0);
        approx(arcs[2].end, 3.0 * PI / 2.0);
    }

    #[test]
    fn gap_trims_half_from_each_side() {
        let config = RingConfig::default();
        let gap = config.gap_angle();
        let arcs = layout_arcs(&segments(&[1.0, 1.0]), &config);
        approx(arcs[0].start, -PI / 2.0 + gap / 2.0);
        approx(arcs[0].sweep, PI - gap);
        approx(arcs[0].center, arcs[0].start + arcs[0].sweep / 2.0);
    }

    #[test]
    fn near_zero_segment_keeps_the_sliver_floor() {
        let arcs = layout_arcs(&segments(&[1000.0, 0.001]), &RingConfig::default());
        approx(arcs[1].sweep, MIN_SWEEP);
    }

    #[test]
    fn zero_total_produces_no_arcs_and_no_panic() {
        assert!(layout_arcs(&segments(&[0.0, 0.0]), &RingConfig::default()).is_empty());
        assert!(layout_arcs(&[], &RingConfig::default()).is_empty());
    }

    #[test]
    fn hover_percent_rounds_to_one_decimal() {
        approx(hover_percent(135.18, 638.72), 21.2);
        approx(hover_percent(300.56, 638.72), 47.1);
        approx(hover_percent(1.0, 3.0), 33.3);
    }

    #[test]
    fn hover_percent_guards_zero_total() {
        approx(hover_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn large_arc_flag_set_past_half_circle() {
        assert_eq!(large_arc(0.0, PI - 0.01), 0);
        assert_eq!(large_arc(0.0, PI + 0.01), 1);
    }

    #[test]
    fn slice_path_outline_has_four_arc_commands() {
        let path = slice_path(
            56.0,
            56.0,
            47.0,
            18.0,
            -PI / 2.0,
            0.0,
            CapStyle::Outer,
            CapStyle::Inner,
        );
        assert!(path.starts_with("M "));
        assert!(path.ends_with("Z"));
        assert_eq!(path.matches(" A ").count(), 4);
        // Path closes back on its starting point.
        let start = path.trim_start_matches("M ").split(" A ").next();
        assert!(start.is_some());
    }

    #[test]
    fn cap_styles_pick_the_sweep_flags() {
        let base = slice_path(
            56.0,
            56.0,
            47.0,
            18.0,
            0.0,
            1.0,
            CapStyle::Outer,
            CapStyle::Inner,
        );
        // Sweep-1 commands: outer perimeter, inner end cap, outer start cap.
        assert_eq!(base.matches(" 0 0 1 ").count(), 3);
        assert_eq!(base.matches(" 0 0 0 ").count(), 1);
        let flipped = slice_path(
            56.0,
            56.0,
            47.0,
            18.0,
            0.0,
            1.0,
            CapStyle::Inner,
            CapStyle::Outer,
        );
        // Both cap flags flip to 0, leaving only the outer perimeter at 1.
        assert_eq!(flipped.matches(" 0 0 1 ").count(), 1);
        assert_eq!(flipped.matches(" 0 0 0 ").count(), 3);
        assert_ne!(base, flipped);
    }

    #[test]
    fn label_anchor_sits_just_past_the_outer_edge() {
        let config = RingConfig::default();
        // Arc centered at 3 o'clock.
        let arc = RingArc {
            start: -0.5,
            end: 0.5,
            center: 0.0,
            sweep: 1.0,
        };
        let anchor = label_anchor(&config, &arc);
        // y stays centered, x is pushed right of center.
        approx(anchor.y_pct, 50.0);
        let expected_x = (56.0 + 47.0 + 9.0 + 4.0) / 112.0 * 100.0;
        approx(anchor.x_pct, expected_x);
    }
}
