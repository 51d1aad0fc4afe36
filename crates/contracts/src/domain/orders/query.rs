//! Order list pipeline: filter, search, sort, paginate.
//!
//! Pure function chain over the immutable base set. The UI re-runs
//! [`run_query`] whenever any input signal changes; nothing here holds state
//! and nothing here errors. Degradation policy: unparseable date labels sort
//! as epoch 0, an out-of-range page clamps into `[1, total_pages]`.

use super::OrderRecord;
use super::OrderStatus;
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Rows per page. The table shows five pages for the fifty-row base set.
pub const PAGE_SIZE: usize = 10;

/// Sortable columns of the order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    User,
    Project,
    Address,
    Date,
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    }
}

/// View state fed into the pipeline. Owned by the list UI, `None` filters
/// mean "ALL".
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuery {
    pub search: String,
    pub status_filter: Option<OrderStatus>,
    pub date_filter: Option<String>,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    /// 1-based; clamped during evaluation.
    pub page: usize,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_filter: None,
            date_filter: None,
            sort_key: SortKey::Date,
            sort_dir: SortDir::Asc,
            page: 1,
        }
    }
}

/// One evaluated page of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPage {
    /// Rows of the effective page, at most [`PAGE_SIZE`].
    pub rows: Vec<OrderRecord>,
    /// Effective page after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Filtered row count across all pages.
    pub total_rows: usize,
}

impl OrderPage {
    /// uids of the rows visible on this page, in display order.
    pub fn uids(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.uid).collect()
    }
}

/// Filter stage. A row passes iff it matches the status filter AND the date
/// filter; `None` passes everything. An empty result is valid.
pub fn filter_rows<'a>(
    rows: &'a [OrderRecord],
    status: Option<OrderStatus>,
    date: Option<&str>,
) -> Vec<&'a OrderRecord> {
    rows.iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .filter(|r| date.is_none_or(|d| r.date_label == d))
        .collect()
}

/// Search stage. Trimmed empty query passes rows through unchanged;
/// otherwise the lowercased query must be a substring of any searchable
/// field (OR across fields).
pub fn search_rows<'a>(rows: Vec<&'a OrderRecord>, query: &str) -> Vec<&'a OrderRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows;
    }
    rows.into_iter().filter(|r| matches_search(r, &q)).collect()
}

fn matches_search(row: &OrderRecord, q: &str) -> bool {
    row.id.to_lowercase().contains(q)
        || row.user.name.to_lowercase().contains(q)
        || row.project.to_lowercase().contains(q)
        || row.address.to_lowercase().contains(q)
        || row.date_label.to_lowercase().contains(q)
        || row.status.label().to_lowercase().contains(q)
}

/// Sort stage. `slice::sort_by` is stable, so equal keys keep their relative
/// input order; the direction only flips the comparator result.
pub fn sort_rows(rows: &mut [&OrderRecord], key: SortKey, dir: SortDir, now: DateTime<Utc>) {
    rows.sort_by(|a, b| dir.apply(compare(a, b, key, now)));
}

fn compare(a: &OrderRecord, b: &OrderRecord, key: SortKey, now: DateTime<Utc>) -> Ordering {
    match key {
        SortKey::Id => a.id.to_lowercase().cmp(&b.id.to_lowercase()),
        SortKey::User => a.user.name.to_lowercase().cmp(&b.user.name.to_lowercase()),
        SortKey::Project => a.project.to_lowercase().cmp(&b.project.to_lowercase()),
        SortKey::Address => a.address.to_lowercase().cmp(&b.address.to_lowercase()),
        SortKey::Date => {
            date_sort_value(&a.date_label, now).cmp(&date_sort_value(&b.date_label, now))
        }
        SortKey::Status => a
            .status
            .label()
            .to_lowercase()
            .cmp(&b.status.label().to_lowercase()),
    }
}

/// Maps a date label to a comparable instant in epoch milliseconds.
///
/// Relative labels resolve against the supplied `now`; anything else is
/// parsed as a calendar date at UTC midnight, and unparseable labels fall
/// back to epoch 0 so they sort before everything real.
pub fn date_sort_value(label: &str, now: DateTime<Utc>) -> i64 {
    let lower = label.trim().to_lowercase();
    let now_ms = now.timestamp_millis();
    if lower == "just now" {
        return now_ms;
    }
    if lower.contains("minute") {
        return now_ms - 60 * 1000;
    }
    if lower.contains("hour") {
        return now_ms - 60 * 60 * 1000;
    }
    if lower == "yesterday" {
        return now_ms - 24 * 60 * 60 * 1000;
    }
    NaiveDate::parse_from_str(label.trim(), "%b %d, %Y")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// `max(1, ceil(count / PAGE_SIZE))`; an empty result still has one page.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Clamps a requested 1-based page into the valid range. Never reports the
/// overflow; the caller just gets the nearest valid page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Runs the whole pipeline and slices out the effective page.
pub fn run_query(rows: &[OrderRecord], query: &OrderQuery, now: DateTime<Utc>) -> OrderPage {
    let filtered = filter_rows(rows, query.status_filter, query.date_filter.as_deref());
    let mut matched = search_rows(filtered, &query.search);
    sort_rows(&mut matched, query.sort_key, query.sort_dir, now);

    let total_rows = matched.len();
    let pages = total_pages(total_rows);
    let page = clamp_page(query.page, pages);
    let start = (page - 1) * PAGE_SIZE;

    OrderPage {
        rows: matched
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect(),
        page,
        total_pages: pages,
        total_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::dataset;
    use crate::domain::orders::OrderUser;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn row(uid: u32, project: &str, date_label: &str, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            uid,
            id: format!("#CM{:04}", 9801 + uid),
            user: OrderUser {
                name: "Natali Craig".to_string(),
                avatar: "/contacts/natali.png".to_string(),
            },
            project: project.to_string(),
            address: "Meadow Lane Oakland".to_string(),
            date_label: date_label.to_string(),
            status,
        }
    }

    #[test]
    fn filtered_rows_are_a_subset_matching_the_predicate() {
        let rows = dataset::build_rows();
        let filtered = filter_rows(&rows, Some(OrderStatus::Pending), Some("Just now"));
        assert!(filtered.len() <= rows.len());
        for r in &filtered {
            assert_eq!(r.status, OrderStatus::Pending);
            assert_eq!(r.date_label, "Just now");
            assert!(rows.iter().any(|base| base.uid == r.uid));
        }
    }

    #[test]
    fn none_filters_pass_everything() {
        let rows = dataset::build_rows();
        assert_eq!(filter_rows(&rows, None, None).len(), rows.len());
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let rows = vec![
            row(0, "Landing Page", "Just now", OrderStatus::Complete),
            row(1, "Client Project", "Yesterday", OrderStatus::Pending),
        ];
        let refs: Vec<&OrderRecord> = rows.iter().collect();

        // Project field, mixed case.
        let hit = search_rows(refs.clone(), "lAnDiNg");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].uid, 0);

        // Status label.
        let hit = search_rows(refs.clone(), "pending");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].uid, 1);

        // Date label.
        let hit = search_rows(refs.clone(), "yesterday");
        assert_eq!(hit.len(), 1);

        // Order code.
        let hit = search_rows(refs.clone(), "#cm9801");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].uid, 0);

        // User name matches both rows.
        let hit = search_rows(refs, "natali");
        assert_eq!(hit.len(), 2);
    }

    #[test]
    fn blank_or_whitespace_query_passes_through() {
        let rows = vec![row(0, "Landing Page", "Just now", OrderStatus::Complete)];
        let refs: Vec<&OrderRecord> = rows.iter().collect();
        assert_eq!(search_rows(refs.clone(), "").len(), 1);
        assert_eq!(search_rows(refs, "   ").len(), 1);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![
            row(0, "Same", "Just now", OrderStatus::Complete),
            row(1, "Same", "Just now", OrderStatus::Complete),
            row(2, "Same", "Just now", OrderStatus::Complete),
        ];
        let mut refs: Vec<&OrderRecord> = rows.iter().collect();
        sort_rows(&mut refs, SortKey::Project, SortDir::Asc, fixed_now());
        let uids: Vec<u32> = refs.iter().map(|r| r.uid).collect();
        assert_eq!(uids, vec![0, 1, 2]);

        sort_rows(&mut refs, SortKey::Project, SortDir::Desc, fixed_now());
        let uids: Vec<u32> = refs.iter().map(|r| r.uid).collect();
        assert_eq!(uids, vec![0, 1, 2]);
    }

    #[test]
    fn sort_is_idempotent() {
        let rows = dataset::build_rows();
        let now = fixed_now();
        let mut first: Vec<&OrderRecord> = rows.iter().collect();
        sort_rows(&mut first, SortKey::User, SortDir::Desc, now);
        let mut second = first.clone();
        sort_rows(&mut second, SortKey::User, SortDir::Desc, now);
        let a: Vec<u32> = first.iter().map(|r| r.uid).collect();
        let b: Vec<u32> = second.iter().map(|r| r.uid).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn date_labels_order_from_oldest_to_newest() {
        let now = fixed_now();
        let calendar = date_sort_value("Feb 2, 2023", now);
        let yesterday = date_sort_value("Yesterday", now);
        let hour = date_sort_value("1 hour ago", now);
        let minute = date_sort_value("A minute ago", now);
        let just_now = date_sort_value("Just now", now);
        assert!(calendar < yesterday);
        assert!(yesterday < hour);
        assert!(hour < minute);
        assert!(minute < just_now);
        assert_eq!(just_now, now.timestamp_millis());
    }

    #[test]
    fn unparseable_labels_sort_as_epoch_zero() {
        let now = fixed_now();
        assert_eq!(date_sort_value("sometime soon", now), 0);
        assert_eq!(date_sort_value("", now), 0);
        // And therefore before every real label under ascending sort.
        assert!(date_sort_value("sometime soon", now) < date_sort_value("Feb 2, 2023", now));
    }

    #[test]
    fn direction_flips_the_order() {
        let rows = vec![
            row(0, "Alpha", "Just now", OrderStatus::Complete),
            row(1, "Beta", "Just now", OrderStatus::Complete),
        ];
        let mut refs: Vec<&OrderRecord> = rows.iter().collect();
        sort_rows(&mut refs, SortKey::Project, SortDir::Desc, fixed_now());
        assert_eq!(refs[0].uid, 1);
        sort_rows(&mut refs, SortKey::Project, SortDir::Asc, fixed_now());
        assert_eq!(refs[0].uid, 0);
    }

    #[test]
    fn fifty_rows_make_five_pages() {
        let rows = dataset::build_rows();
        let page = run_query(&rows, &OrderQuery::default(), fixed_now());
        assert_eq!(page.total_rows, 50);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.rows.len(), PAGE_SIZE);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let rows = dataset::build_rows();
        let query = OrderQuery {
            page: 12,
            ..OrderQuery::default()
        };
        let page = run_query(&rows, &query, fixed_now());
        assert_eq!(page.page, 5);
        assert!(!page.rows.is_empty());
    }

    #[test]
    fn filter_shrink_clamps_prior_page_to_one() {
        // Seven matching rows plus noise on another status.
        let mut rows: Vec<OrderRecord> = (0..7)
            .map(|i| row(i, "Landing Page", "Just now", OrderStatus::Approved))
            .collect();
        for i in 7..30 {
            rows.push(row(i, "Client Project", "Yesterday", OrderStatus::Rejected));
        }

        let query = OrderQuery {
            status_filter: Some(OrderStatus::Approved),
            page: 3,
            ..OrderQuery::default()
        };
        let page = run_query(&rows, &query, fixed_now());
        assert_eq!(page.total_rows, 7);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 7);
    }

    #[test]
    fn empty_result_still_reports_one_page() {
        let rows = vec![row(0, "Landing Page", "Just now", OrderStatus::Complete)];
        let query = OrderQuery {
            search: "no such thing".to_string(),
            ..OrderQuery::default()
        };
        let page = run_query(&rows, &query, fixed_now());
        assert_eq!(page.total_rows, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn page_slicing_returns_the_requested_window() {
        let rows = dataset::build_rows();
        let query = OrderQuery {
            page: 2,
            ..OrderQuery::default()
        };
        let first = run_query(&rows, &OrderQuery::default(), fixed_now());
        let second = run_query(&rows, &query, fixed_now());
        assert_eq!(second.page, 2);
        assert_eq!(second.rows.len(), PAGE_SIZE);
        // Pages are disjoint windows of the same ordering.
        for r in &second.rows {
            assert!(first.rows.iter().all(|f| f.uid != r.uid));
        }
    }
}
