//! Order history data model.
//!
//! An [`OrderRecord`] is immutable after construction. The base record set is
//! fixed-size and never mutated in place; every list view the UI shows
//! (filtered, sorted, paged) is a derived read-only projection built by
//! [`query`]. Row identity for selection is the synthetic `uid`, never the
//! display order code, so reordering the list can not break checkbox state.

pub mod dataset;
pub mod query;
pub mod selection;

pub use dataset::{BASE_ROWS, ROW_COUNT};
pub use query::{run_query, OrderPage, OrderQuery, SortDir, SortKey, PAGE_SIZE};
pub use selection::{header_state, set_row_selected, toggle_page_selection, HeaderState};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an order.
///
/// Serialized as the display label so the JSON form matches what the table
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// All statuses in menu order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::InProgress,
        OrderStatus::Complete,
        OrderStatus::Pending,
        OrderStatus::Approved,
        OrderStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Complete => "Complete",
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed set of date labels used by the synthetic data.
///
/// These are display strings; their ordering semantics live in
/// [`query::date_sort_value`].
pub const DATE_LABELS: [&str; 5] = [
    "Just now",
    "A minute ago",
    "1 hour ago",
    "Yesterday",
    "Feb 2, 2023",
];

/// Customer shown in the order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    pub name: String,
    /// Asset path of the avatar image.
    pub avatar: String,
}

/// One row of the order history data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Stable unique identifier, assigned once at data-set construction and
    /// never reused. The sole key for selection state and list identity.
    pub uid: u32,

    /// Display order code (`#CMxxxx`). Not guaranteed unique, never a key.
    pub id: String,

    pub user: OrderUser,

    pub project: String,

    pub address: String,

    /// One of [`DATE_LABELS`] in the synthetic set; open string otherwise.
    #[serde(rename = "dateLabel")]
    pub date_label: String,

    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_as_display_label() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: OrderStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(back, OrderStatus::InProgress);
    }

    #[test]
    fn record_uses_camel_case_date_label() {
        let record = OrderRecord {
            uid: 7,
            id: "#CM9808".to_string(),
            user: OrderUser {
                name: "Kate Morrison".to_string(),
                avatar: "/static/contacts/kate.png".to_string(),
            },
            project: "CRM Admin pages".to_string(),
            address: "Larry San Francisco".to_string(),
            date_label: "Yesterday".to_string(),
            status: OrderStatus::Approved,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["dateLabel"], "Yesterday");
        assert_eq!(json["status"], "Approved");
        assert_eq!(json["uid"], 7);
    }
}
