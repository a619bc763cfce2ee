//! Table filtering and pagination
//!
//! Pure predicates over fetched record lists. All active filters are
//! AND-combined; there is no OR mode.

use chrono::NaiveDate;

use crate::db::models::{OrderStatus, SoldItem, SoldTicket};

/// Inclusive date range; an unset bound is unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// A missing date fails any bounded range
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        if let Some(start) = self.start
            && date < start
        {
            return false;
        }
        if let Some(end) = self.end
            && date > end
        {
            return false;
        }
        true
    }
}

/// A record the order tables can filter
pub trait TableRow {
    fn row_status(&self) -> OrderStatus;
    /// Case-insensitive substring match against the designated searchable
    /// field; `needle` is already lowercased
    fn matches_search(&self, needle: &str) -> bool;
    fn row_date(&self) -> Option<NaiveDate>;
}

impl TableRow for SoldItem {
    fn row_status(&self) -> OrderStatus {
        self.status
    }

    // Merchandise orders search across cart item names
    fn matches_search(&self, needle: &str) -> bool {
        self.cart_items
            .iter()
            .any(|line| line.name.to_lowercase().contains(needle))
    }

    fn row_date(&self) -> Option<NaiveDate> {
        self.order_date
    }
}

impl TableRow for SoldTicket {
    fn row_status(&self) -> OrderStatus {
        self.status
    }

    // Ticket orders search the buyer name
    fn matches_search(&self, needle: &str) -> bool {
        self.full_name.to_lowercase().contains(needle)
    }

    fn row_date(&self) -> Option<NaiveDate> {
        self.purchase_date
    }
}

/// Combined table filter; inactive predicates always pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableFilter {
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
    pub dates: DateRange,
}

impl TableFilter {
    pub fn matches<R: TableRow>(&self, row: &R) -> bool {
        if let Some(status) = self.status
            && row.row_status() != status
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !needle.is_empty() && !row.matches_search(&needle) {
                return false;
            }
        }
        self.dates.contains(row.row_date())
    }

    pub fn apply<'a, R: TableRow>(&self, rows: &'a [R]) -> Vec<&'a R> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }
}

/// Filter by an arbitrary date field, inclusive on both ends
pub fn filter_by_date_range<'a, T>(
    rows: &'a [T],
    field: impl Fn(&T) -> Option<NaiveDate>,
    range: &DateRange,
) -> Vec<&'a T> {
    rows.iter().filter(|row| range.contains(field(row))).collect()
}

/// Number of pages for `len` rows, at least 1
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 || len == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// Slice out one page, clamping `page` into `[1, page_count]`.
///
/// An out-of-range page yields the nearest valid page's content, never an
/// empty overflow slice.
pub fn paginate<T>(rows: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 || rows.is_empty() {
        return &[];
    }
    let page = page.clamp(1, page_count(rows.len(), page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::CartLine;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn merch(name: &str, status: OrderStatus, day: u32) -> SoldItem {
        SoldItem {
            id: None,
            transaction_id: "tx".to_string(),
            customer_name: "Buyer".to_string(),
            email: "buyer@example.com".to_string(),
            phone: "0917".to_string(),
            shipping_address: "Manila".to_string(),
            payment_method: "GCash".to_string(),
            total_amount: Decimal::ZERO,
            order_date: Some(date(2025, 3, day)),
            cart_items: vec![CartLine {
                name: name.to_string(),
                size: "M".to_string(),
                quantity: 1,
            }],
            status,
            receipt_url: None,
        }
    }

    #[test]
    fn filters_are_and_combined() {
        let rows = vec![
            merch("Band Shirt", OrderStatus::Approved, 1),
            merch("Band Shirt", OrderStatus::Pending, 2),
            merch("Cap", OrderStatus::Approved, 3),
        ];
        let filter = TableFilter {
            status: Some(OrderStatus::Approved),
            search: Some("shirt".to_string()),
            dates: DateRange::default(),
        };
        let hits = filter.apply(&rows);
        // Both predicates must hold, not either
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].status, OrderStatus::Approved);
        assert_eq!(hits[0].cart_items[0].name, "Band Shirt");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![merch("HOODIE Classic", OrderStatus::Pending, 1)];
        let filter = TableFilter {
            search: Some("hoodie".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 1);
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2025, 3, 2)), Some(date(2025, 3, 3)));
        assert!(range.contains(Some(date(2025, 3, 2))));
        assert!(range.contains(Some(date(2025, 3, 3))));
        assert!(!range.contains(Some(date(2025, 3, 1))));
        assert!(!range.contains(Some(date(2025, 3, 4))));
    }

    #[test]
    fn unset_bound_is_unbounded_on_that_side() {
        let range = DateRange::new(None, Some(date(2025, 3, 3)));
        assert!(range.contains(Some(date(2020, 1, 1))));
        assert!(!range.contains(Some(date(2025, 3, 4))));
        // Missing date fails a bounded range but passes an unbounded one
        assert!(!range.contains(None));
        assert!(DateRange::default().contains(None));
    }

    #[test]
    fn filter_by_arbitrary_date_field() {
        let rows = vec![
            merch("A", OrderStatus::Pending, 1),
            merch("B", OrderStatus::Pending, 5),
        ];
        let range = DateRange::new(Some(date(2025, 3, 4)), None);
        let hits = filter_by_date_range(&rows, |r| r.order_date, &range);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cart_items[0].name, "B");
    }

    #[test]
    fn pagination_clamps_out_of_range_pages() {
        let rows: Vec<u32> = (0..17).collect();

        assert_eq!(paginate(&rows, 8, 1).len(), 8);
        assert_eq!(paginate(&rows, 8, 2).len(), 8);
        assert_eq!(paginate(&rows, 8, 3), &[16]);

        // Page 0 clamps to the first page, page 4 to the last
        assert_eq!(paginate(&rows, 8, 0), paginate(&rows, 8, 1));
        assert_eq!(paginate(&rows, 8, 4), paginate(&rows, 8, 3));

        assert_eq!(page_count(17, 8), 3);
    }

    #[test]
    fn pagination_degenerate_inputs() {
        let rows: Vec<u32> = vec![1, 2, 3];
        assert!(paginate(&rows, 0, 1).is_empty());
        assert!(paginate::<u32>(&[], 8, 1).is_empty());
        assert_eq!(page_count(0, 8), 1);
    }
}
