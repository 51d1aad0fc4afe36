use contracts::domain::orders::OrderStatus;
use leptos::prelude::*;

/// CSS modifier for an order status pill.
fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::InProgress => "status-pill--in-progress",
        OrderStatus::Complete => "status-pill--complete",
        OrderStatus::Pending => "status-pill--pending",
        OrderStatus::Approved => "status-pill--approved",
        OrderStatus::Rejected => "status-pill--rejected",
    }
}

/// Status pill for order rows: colored dot plus the status label.
#[component]
pub fn StatusPill(
    /// Order status to display
    #[prop(into)]
    status: Signal<OrderStatus>,
) -> impl IntoView {
    let pill_class = move || format!("status-pill {}", status_class(status.get()));

    view! {
        <span class=pill_class>
            <span class="status-pill__dot"></span>
            {move || status.get().label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_gets_a_distinct_class() {
        let classes: Vec<&str> = OrderStatus::ALL.iter().map(|s| status_class(*s)).collect();
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
