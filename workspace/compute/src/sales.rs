use common::{sum_currency, Money};
use model::Order;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

/// Headline numbers shown above the order table.
///
/// Revenue counts completed orders only, while the average divides that
/// revenue by the number of *all* orders, pending and cancelled included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub total_orders: usize,
    pub total_revenue: Money,
    pub average_order_value: Money,
}

impl SalesSummary {
    #[instrument(skip(orders), fields(num_orders = orders.len()))]
    pub fn from_orders(orders: &[Order]) -> Self {
        let total_orders = orders.len();
        let revenue = total_revenue(orders);
        let average = average_order_value(revenue, total_orders);

        debug!(%revenue, %average, "Computed sales summary");

        Self {
            total_orders,
            total_revenue: Money::new(revenue),
            average_order_value: Money::new(average),
        }
    }
}

/// Sum of `amount` over completed orders.
///
/// Malformed amounts count as zero and an amount that would overflow the
/// total is skipped, so this never panics.
pub fn total_revenue(orders: &[Order]) -> Decimal {
    sum_currency(
        orders
            .iter()
            .filter(|order| order.is_completed())
            .map(|order| order.amount.as_str()),
    )
}

/// `revenue / order_count`, or zero when there are no orders.
pub fn average_order_value(revenue: Decimal, order_count: usize) -> Decimal {
    if order_count == 0 {
        return Decimal::ZERO;
    }
    revenue / Decimal::from(order_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use model::{seed, OrderStatus};

    fn order(id: &str, amount: &str, status: OrderStatus) -> Order {
        Order::new(
            id,
            "Test Customer",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount,
            status,
            1,
        )
    }

    #[test]
    fn test_revenue_counts_completed_only() {
        let orders = vec![
            order("ORD-001", "$234.00", OrderStatus::Completed),
            order("ORD-002", "$456.00", OrderStatus::Pending),
            order("ORD-003", "$567.00", OrderStatus::Completed),
        ];

        let summary = SalesSummary::from_orders(&orders);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_revenue.to_string(), "$801.00");
        // Divides by all three orders, not the two completed ones
        assert_eq!(summary.average_order_value.to_string(), "$267.00");
    }

    #[test]
    fn test_cancelled_orders_contribute_nothing() {
        let orders = vec![
            order("ORD-001", "$100.00", OrderStatus::Cancelled),
            order("ORD-002", "$50.00", OrderStatus::Completed),
        ];
        assert_eq!(total_revenue(&orders), Decimal::new(5000, 2));
        assert_eq!(
            SalesSummary::from_orders(&orders).average_order_value.to_string(),
            "$25.00"
        );
    }

    #[test]
    fn test_seed_summary() {
        let summary = SalesSummary::from_orders(&seed::orders());
        assert_eq!(summary.total_orders, 7);
        assert_eq!(summary.total_revenue.to_string(), "$2369.00");
        assert_eq!(summary.average_order_value.to_string(), "$338.43");
    }

    #[test]
    fn test_malformed_amount_fails_closed() {
        let orders = vec![
            order("ORD-001", "$234.00", OrderStatus::Completed),
            order("ORD-002", "two hundred", OrderStatus::Completed),
        ];
        let summary = SalesSummary::from_orders(&orders);
        assert_eq!(summary.total_revenue.to_string(), "$234.00");
        assert_eq!(summary.average_order_value.to_string(), "$117.00");
    }

    #[test]
    fn test_empty_collection() {
        let summary = SalesSummary::from_orders(&[]);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_revenue, Money::ZERO);
        assert_eq!(summary.average_order_value, Money::ZERO);
    }

    #[test]
    fn test_decimal_sum_has_no_float_drift() {
        let orders: Vec<Order> = (0..1000)
            .map(|i| order(&format!("ORD-{i:03}"), "$0.10", OrderStatus::Completed))
            .collect();
        assert_eq!(total_revenue(&orders), Decimal::new(10000, 2));
    }

    #[test]
    fn test_revenue_overflow_keeps_previous_total() {
        let max = "$79,228,162,514,264,337,593,543,950,335";
        let orders = vec![
            order("ORD-001", max, OrderStatus::Completed),
            order("ORD-002", max, OrderStatus::Completed),
        ];

        let summary = SalesSummary::from_orders(&orders);
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_revenue, Money::new(Decimal::MAX));
        assert_eq!(
            summary.average_order_value,
            Money::new(Decimal::MAX / Decimal::from(2))
        );
    }
}
