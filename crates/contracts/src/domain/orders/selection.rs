//! Row selection, layered on top of the query pipeline.
//!
//! Selection is a `HashSet` of uids owned by the list UI. It is never pruned
//! when filters change: uids of rows outside the current filter (or even
//! outside the base set) simply stay inert until the row reappears. The
//! header checkbox only ever looks at, and only ever mutates, the uids
//! visible on the current page.

use std::collections::HashSet;

/// Tri-state of the header checkbox over the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Checked,
    Indeterminate,
    Unchecked,
}

/// Computes the header tri-state from the visible uids.
///
/// Checked iff the page is non-empty and every visible uid is selected;
/// indeterminate iff some but not all are; unchecked otherwise. An empty
/// page is unchecked.
pub fn header_state(page_uids: &[u32], selected: &HashSet<u32>) -> HeaderState {
    if page_uids.is_empty() {
        return HeaderState::Unchecked;
    }
    let count = page_uids.iter().filter(|uid| selected.contains(uid)).count();
    if count == 0 {
        HeaderState::Unchecked
    } else if count == page_uids.len() {
        HeaderState::Checked
    } else {
        HeaderState::Indeterminate
    }
}

/// Header checkbox click: when some or all visible rows are selected, clear
/// exactly the visible uids; when none are, select them all. Rows outside
/// the current page are never touched.
pub fn toggle_page_selection(selected: &mut HashSet<u32>, page_uids: &[u32]) {
    match header_state(page_uids, selected) {
        HeaderState::Checked | HeaderState::Indeterminate => {
            for uid in page_uids {
                selected.remove(uid);
            }
        }
        HeaderState::Unchecked => {
            selected.extend(page_uids.iter().copied());
        }
    }
}

/// Single row checkbox: insert on check, remove on uncheck.
pub fn set_row_selected(selected: &mut HashSet<u32>, uid: u32, checked: bool) {
    if checked {
        selected.insert(uid);
    } else {
        selected.remove(&uid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(uids: &[u32]) -> HashSet<u32> {
        uids.iter().copied().collect()
    }

    #[test]
    fn tri_state_over_visible_rows() {
        let page = [1, 2, 3];
        assert_eq!(header_state(&page, &set(&[1, 3])), HeaderState::Indeterminate);
        assert_eq!(header_state(&page, &set(&[1, 2, 3])), HeaderState::Checked);
        assert_eq!(header_state(&page, &set(&[])), HeaderState::Unchecked);
    }

    #[test]
    fn empty_page_is_unchecked() {
        assert_eq!(header_state(&[], &set(&[1, 2])), HeaderState::Unchecked);
    }

    #[test]
    fn off_page_uids_do_not_affect_the_header() {
        let page = [1, 2];
        // 99 is selected but not visible.
        assert_eq!(header_state(&page, &set(&[99])), HeaderState::Unchecked);
        assert_eq!(header_state(&page, &set(&[1, 99])), HeaderState::Indeterminate);
    }

    #[test]
    fn toggling_from_partial_clears_only_visible() {
        let page = [1, 2, 3];
        let mut selected = set(&[2, 77]);
        toggle_page_selection(&mut selected, &page);
        // Visible uid removed, off-page uid untouched.
        assert_eq!(selected, set(&[77]));
    }

    #[test]
    fn toggling_from_unchecked_selects_all_visible() {
        let page = [4, 5];
        let mut selected = set(&[77]);
        toggle_page_selection(&mut selected, &page);
        assert_eq!(selected, set(&[4, 5, 77]));
    }

    #[test]
    fn toggling_from_checked_clears_the_page() {
        let page = [4, 5];
        let mut selected = set(&[4, 5, 77]);
        toggle_page_selection(&mut selected, &page);
        assert_eq!(selected, set(&[77]));
    }

    #[test]
    fn row_toggle_adds_and_removes() {
        let mut selected = set(&[]);
        set_row_selected(&mut selected, 9, true);
        assert!(selected.contains(&9));
        set_row_selected(&mut selected, 9, false);
        assert!(selected.is_empty());
        // Unchecking an absent uid is a no-op, not an error.
        set_row_selected(&mut selected, 123, false);
        assert!(selected.is_empty());
    }
}
