use crate::shared::icons::icon;
use leptos::prelude::*;

/// Background tint of a stat card.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatTint {
    /// Neutral panel tint
    #[default]
    Plain,
    Blue,
    Periwinkle,
}

impl StatTint {
    fn class(self) -> &'static str {
        match self {
            StatTint::Plain => "stat-card",
            StatTint::Blue => "stat-card stat-card--blue",
            StatTint::Periwinkle => "stat-card stat-card--periwinkle",
        }
    }
}

/// Headline metric tile: label, value and a trend delta.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Pre-formatted value, e.g. "3,781" or "$695"
    value: String,
    /// Pre-formatted delta, e.g. "+11.01%"
    delta: String,
    /// Whether the delta points up
    up: bool,
    /// Background tint
    #[prop(optional)]
    tint: StatTint,
) -> impl IntoView {
    let trend_icon = if up { "trending-up" } else { "trending-down" };

    view! {
        <div class=tint.class()>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__row">
                <span class="stat-card__value">{value}</span>
                <span class="stat-card__delta">
                    {delta}
                    {icon(trend_icon)}
                </span>
            </div>
        </div>
    }
}
