use crate::domain::order::Order;

/// Stateless filter over a repository snapshot, preserving input order.
///
/// An order is kept when its customer name or id contains `search_term`
/// case-insensitively, and its status matches `status_filter`. `"all"`
/// disables the status check; any other string that is not a declared
/// status matches nothing.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    search_term: &str,
    status_filter: &str,
) -> Vec<&'a Order> {
    let needle = search_term.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            let matches_search = order.customer.to_lowercase().contains(&needle)
                || order.id.to_lowercase().contains(&needle);
            let matches_status = status_filter == "all" || order.status.as_str() == status_filter;
            matches_search && matches_status
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    use crate::domain::order::{Order, OrderStatus};

    use super::*;

    fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer: customer.to_string(),
            amount: BigDecimal::from(100),
            status,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            items: vec![],
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order("ORD-002", "Sarah Johnson", OrderStatus::Processing),
            order("ORD-001", "John Smith", OrderStatus::Completed),
        ]
    }

    #[test]
    fn empty_search_and_all_statuses_return_everything_in_order() {
        let orders = sample();

        let filtered = filter_orders(&orders, "", "all");

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "ORD-002");
        assert_eq!(filtered[1].id, "ORD-001");
    }

    #[test]
    fn search_matches_customer_case_insensitively() {
        let orders = sample();

        let filtered = filter_orders(&orders, "SARAH", "all");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].customer, "Sarah Johnson");
    }

    #[test]
    fn search_matches_order_id_case_insensitively() {
        let orders = sample();

        let filtered = filter_orders(&orders, "ord-001", "all");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "ORD-001");
    }

    #[test]
    fn status_filter_narrows_to_exact_status() {
        let orders = sample();

        let filtered = filter_orders(&orders, "", "completed");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].status, OrderStatus::Completed);
    }

    #[test]
    fn unknown_status_filter_matches_nothing() {
        let orders = sample();

        assert!(filter_orders(&orders, "", "archived").is_empty());
        assert!(filter_orders(&orders, "", "Completed").is_empty());
    }

    #[test]
    fn search_and_status_must_both_match() {
        let orders = sample();

        assert!(filter_orders(&orders, "sarah", "completed").is_empty());
        assert_eq!(filter_orders(&orders, "sarah", "processing").len(), 1);
    }
}
