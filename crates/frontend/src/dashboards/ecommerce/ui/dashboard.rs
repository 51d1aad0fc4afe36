//! eCommerce dashboard with fixed display data: stat tiles, projections
//! bar chart, revenue line chart, revenue by location, top selling
//! products and the total sales donut.

use contracts::charts::ring::{RingConfig, RingSegment};
use leptos::prelude::*;

use crate::charts::{BarChart, BarPoint, DonutChart, LineChart, LinePoint};
use crate::shared::components::ui::Card;
use crate::shared::components::{StatCard, StatTint};

const TOP_SELLING: [(&str, &str, u32, &str); 5] = [
    ("ASOS Ridley High Waist", "$79.49", 82, "$6,518.18"),
    ("Marco Lightweight Shirt", "$128.50", 37, "$4,754.50"),
    ("Half Sleeve Shirt", "$39.99", 64, "$2,559.36"),
    ("Lightweight Jacket", "$20.00", 184, "$3,680.00"),
    ("Marco Shoes", "$79.49", 64, "$1,965.81"),
];

const LOCATIONS: [(&str, &str, f64); 4] = [
    ("New York", "72K", 72.0),
    ("San Francisco", "39K", 39.0),
    ("Sydney", "25K", 25.0),
    ("Singapore", "61K", 61.0),
];

fn stats() -> Vec<(&'static str, &'static str, &'static str, bool, StatTint)> {
    vec![
        ("Customers", "3,781", "+11.01%", true, StatTint::Blue),
        ("Orders", "1,219", "-0.03%", false, StatTint::Plain),
        ("Revenue", "$695", "+15.03%", true, StatTint::Plain),
        ("Growth", "30.1%", "+6.08%", true, StatTint::Periwinkle),
    ]
}

fn projection_data() -> Vec<BarPoint> {
    vec![
        BarPoint::new("Jan", 16.0, 4.0),
        BarPoint::new("Feb", 19.0, 6.0),
        BarPoint::new("Mar", 17.0, 4.0),
        BarPoint::new("Apr", 22.0, 6.0),
        BarPoint::new("May", 14.0, 3.0),
        BarPoint::new("Jun", 20.0, 5.0),
    ]
}

fn revenue_data() -> Vec<LinePoint> {
    // The comparison series hands off from solid history to a dashed
    // projection in April; both carry a value there so the runs join up.
    vec![
        LinePoint::new("Jan", 7.0, Some(12.0), None),
        LinePoint::new("Feb", 17.0, Some(10.0), None),
        LinePoint::new("Mar", 13.0, Some(8.0), None),
        LinePoint::new("Apr", 12.0, Some(12.0), Some(12.0)),
        LinePoint::new("May", 10.0, None, Some(18.0)),
        LinePoint::new("Jun", 24.0, None, Some(20.0)),
    ]
}

fn sales_breakdown() -> Vec<RingSegment> {
    vec![
        RingSegment::new("Direct", "#111111", 300.56),
        RingSegment::new("Affiliate", "#B7EFC5", 135.18),
        RingSegment::new("Sponsored", "#98A8FF", 154.02),
        RingSegment::new("E-mail", "#CFE8F6", 48.96),
    ]
}

/// eCommerce dashboard view.
#[component]
pub fn EcommerceDashboard() -> impl IntoView {
    let stat_cards = stats()
        .into_iter()
        .map(|(label, value, delta, up, tint)| {
            view! {
                <StatCard
                    label=label.to_string()
                    value=value.to_string()
                    delta=delta.to_string()
                    up=up
                    tint=tint
                />
            }
        })
        .collect_view();

    let max_location = LOCATIONS.iter().map(|(_, _, v)| *v).fold(0.0_f64, f64::max);
    let locations = LOCATIONS
        .iter()
        .map(|(name, label, value)| {
            let width = if max_location > 0.0 {
                value / max_location * 100.0
            } else {
                0.0
            };
            view! {
                <li class="location-list__row">
                    <span class="location-list__head">
                        <span>{*name}</span>
                        <span>{*label}</span>
                    </span>
                    <span class="location-list__track">
                        <span
                            class="location-list__fill"
                            style=format!("width: {width:.0}%;")
                        ></span>
                    </span>
                </li>
            }
        })
        .collect_view();

    let product_rows = TOP_SELLING
        .iter()
        .map(|(name, price, qty, amount)| {
            view! {
                <tr>
                    <td>{*name}</td>
                    <td>{*price}</td>
                    <td>{*qty}</td>
                    <td>{*amount}</td>
                </tr>
            }
        })
        .collect_view();

    let breakdown = sales_breakdown();
    let donut_legend = breakdown
        .iter()
        .map(|segment| {
            let dot_style = format!("background: {};", segment.color);
            view! {
                <li class="donut-legend__row">
                    <span class="donut-legend__name">
                        <span class="donut-legend__dot" style=dot_style></span>
                        {segment.name.clone()}
                    </span>
                    <span>{format!("${:.2}", segment.amount)}</span>
                </li>
            }
        })
        .collect_view();
    let donut_config = RingConfig {
        size: 112.0,
        thickness: 22.0,
        gap_px: 18.0,
        bg: "#F7F9FB".to_string(),
        ..RingConfig::default()
    };

    view! {
        <div class="dashboard">
            <div class="dashboard__heading">"eCommerce"</div>

            // Row 1: stat tiles + projections
            <div class="dashboard__row dashboard__row--top">
                <div class="dashboard__stats">{stat_cards}</div>
                <Card title="Projections vs Actuals" class="dashboard__panel dashboard__panel--wide">
                    <BarChart data=projection_data()/>
                </Card>
            </div>

            // Row 2: revenue line + locations
            <div class="dashboard__row">
                <Card class="dashboard__panel dashboard__panel--wide">
                    <div class="dashboard__revenue-head">
                        <h3 class="card__title">"Revenue"</h3>
                        <span class="dashboard__divider"></span>
                        <div class="chart-legend">
                            <span class="chart-legend__item">
                                <span class="chart-legend__dot chart-legend__dot--current"></span>
                                <span>"Current Week "<b>"$58,211"</b></span>
                            </span>
                            <span class="chart-legend__item">
                                <span class="chart-legend__dot chart-legend__dot--previous"></span>
                                <span>"Previous Week "<b>"$68,768"</b></span>
                            </span>
                        </div>
                    </div>
                    <LineChart data=revenue_data()/>
                </Card>
                <Card title="Revenue by Location" class="dashboard__panel dashboard__panel--narrow">
                    <img class="dashboard__map" src="/static/map.png" alt="World Map"/>
                    <ul class="location-list">{locations}</ul>
                </Card>
            </div>

            // Row 3: top products + total sales donut
            <div class="dashboard__row">
                <Card title="Top Selling Products" class="dashboard__panel dashboard__panel--wide">
                    <table class="products-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Price"</th>
                                <th>"Quantity"</th>
                                <th>"Amount"</th>
                            </tr>
                        </thead>
                        <tbody>{product_rows}</tbody>
                    </table>
                </Card>
                <Card title="Total Sales" class="dashboard__panel dashboard__panel--narrow">
                    <div class="dashboard__total-sales">
                        <DonutChart segments=breakdown config=donut_config/>
                        <ul class="donut-legend">{donut_legend}</ul>
                    </div>
                </Card>
            </div>
        </div>
    }
}
