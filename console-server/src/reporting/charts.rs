//! Chart series derivation
//!
//! Pure folds over fetched order collections. Output order is insertion
//! order of first occurrence; nothing here sorts. Series are ephemeral and
//! recomputed on every fetch.

use serde::{Deserialize, Serialize};

use crate::db::models::{SoldItem, SoldTicket};

/// Total quantity sold per item name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSales {
    pub name: String,
    pub sales: u32,
}

/// Total tickets per short month name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTickets {
    pub name: String,
    pub tickets: u32,
}

/// Flatten every order's cart lines and sum quantities per item name.
///
/// Orders with no cart lines contribute nothing; duplicate names across
/// orders merge into one bucket.
pub fn bucket_sales_by_item(orders: &[SoldItem]) -> Vec<ItemSales> {
    let mut series: Vec<ItemSales> = Vec::new();
    for order in orders {
        for line in &order.cart_items {
            match series.iter_mut().find(|b| b.name == line.name) {
                Some(bucket) => bucket.sales += line.quantity,
                None => series.push(ItemSales {
                    name: line.name.clone(),
                    sales: line.quantity,
                }),
            }
        }
    }
    series
}

/// Group ticket quantities by the short month name of the event date.
///
/// Records missing either the event date or the quantity are skipped.
pub fn bucket_tickets_by_month(tickets: &[SoldTicket]) -> Vec<MonthTickets> {
    let mut series: Vec<MonthTickets> = Vec::new();
    for ticket in tickets {
        let (Some(date), Some(quantity)) = (ticket.event_date, ticket.quantity) else {
            continue;
        };
        let month = date.format("%b").to_string();
        match series.iter_mut().find(|b| b.name == month) {
            Some(bucket) => bucket.tickets += quantity,
            None => series.push(MonthTickets {
                name: month,
                tickets: quantity,
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CartLine, OrderStatus};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn order(lines: Vec<CartLine>) -> SoldItem {
        SoldItem {
            id: None,
            transaction_id: "tx".to_string(),
            customer_name: "Buyer".to_string(),
            email: "buyer@example.com".to_string(),
            phone: "0917".to_string(),
            shipping_address: "Manila".to_string(),
            payment_method: "GCash".to_string(),
            total_amount: Decimal::ZERO,
            order_date: None,
            cart_items: lines,
            status: OrderStatus::Pending,
            receipt_url: None,
        }
    }

    fn line(name: &str, quantity: u32) -> CartLine {
        CartLine {
            name: name.to_string(),
            size: "M".to_string(),
            quantity,
        }
    }

    fn ticket(event_date: Option<NaiveDate>, quantity: Option<u32>) -> SoldTicket {
        SoldTicket {
            id: None,
            full_name: "Buyer".to_string(),
            email: "buyer@example.com".to_string(),
            phone: "0917".to_string(),
            quantity,
            purchase_date: None,
            event_date,
            status: OrderStatus::Pending,
            receipt_url: None,
        }
    }

    #[test]
    fn duplicate_item_names_merge_across_orders() {
        let orders = vec![order(vec![line("Tee", 2)]), order(vec![line("Tee", 3)])];
        let series = bucket_sales_by_item(&orders);
        assert_eq!(
            series,
            vec![ItemSales {
                name: "Tee".to_string(),
                sales: 5
            }]
        );
    }

    #[test]
    fn empty_carts_contribute_nothing() {
        let orders = vec![order(vec![]), order(vec![line("Cap", 1)])];
        let series = bucket_sales_by_item(&orders);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Cap");
    }

    #[test]
    fn sales_keep_first_occurrence_order() {
        let orders = vec![
            order(vec![line("Hoodie", 1), line("Tee", 1)]),
            order(vec![line("Cap", 1), line("Hoodie", 4)]),
        ];
        let series = bucket_sales_by_item(&orders);
        let names: Vec<&str> = series.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Hoodie", "Tee", "Cap"]);
    }

    #[test]
    fn tickets_sum_per_month() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 10);
        let tickets = vec![ticket(jan, Some(4)), ticket(jan, Some(6))];
        let series = bucket_tickets_by_month(&tickets);
        assert_eq!(
            series,
            vec![MonthTickets {
                name: "Jan".to_string(),
                tickets: 10
            }]
        );
    }

    #[test]
    fn tickets_missing_date_or_quantity_are_skipped() {
        let feb = NaiveDate::from_ymd_opt(2025, 2, 1);
        let tickets = vec![
            ticket(None, Some(3)),
            ticket(feb, None),
            ticket(feb, Some(2)),
        ];
        let series = bucket_tickets_by_month(&tickets);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].tickets, 2);
    }
}
