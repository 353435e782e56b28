//! Hand-authored seed collections standing in for a data source.

use chrono::NaiveDate;

use crate::{
    ActivityEntry, AuthenticatedUser, CategorySales, Customer, CustomerStatus, KpiDatum, KpiIcon,
    Order, OrderStatus, RevenuePoint, Trend,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn customers() -> Vec<Customer> {
    use CustomerStatus::*;

    vec![
        Customer::new(
            "1",
            "John Doe",
            "john@example.com",
            "+1 234 567 8900",
            Active,
            12,
            "$2,450",
        ),
        Customer::new(
            "2",
            "Sarah Smith",
            "sarah@example.com",
            "+1 234 567 8901",
            Active,
            8,
            "$1,890",
        ),
        Customer::new(
            "3",
            "Mike Johnson",
            "mike@example.com",
            "+1 234 567 8902",
            Active,
            15,
            "$3,200",
        ),
        Customer::new(
            "4",
            "Emily Brown",
            "emily@example.com",
            "+1 234 567 8903",
            Inactive,
            5,
            "$890",
        ),
        Customer::new(
            "5",
            "David Wilson",
            "david@example.com",
            "+1 234 567 8904",
            Active,
            20,
            "$4,100",
        ),
    ]
}

pub fn orders() -> Vec<Order> {
    use OrderStatus::*;

    vec![
        Order::new(
            "ORD-001",
            "John Doe",
            date(2024, 1, 15),
            "$234.00",
            Completed,
            3,
        ),
        Order::new(
            "ORD-002",
            "Sarah Smith",
            date(2024, 1, 14),
            "$456.00",
            Pending,
            2,
        ),
        Order::new(
            "ORD-003",
            "Mike Johnson",
            date(2024, 1, 14),
            "$567.00",
            Completed,
            5,
        ),
        Order::new(
            "ORD-004",
            "Emily Brown",
            date(2024, 1, 13),
            "$123.00",
            Cancelled,
            1,
        ),
        Order::new(
            "ORD-005",
            "David Wilson",
            date(2024, 1, 13),
            "$890.00",
            Completed,
            4,
        ),
        Order::new(
            "ORD-006",
            "Lisa Anderson",
            date(2024, 1, 12),
            "$345.00",
            Pending,
            2,
        ),
        Order::new(
            "ORD-007",
            "James Taylor",
            date(2024, 1, 12),
            "$678.00",
            Completed,
            6,
        ),
    ]
}

pub fn kpis() -> Vec<KpiDatum> {
    vec![
        KpiDatum::new(
            "Total Revenue",
            "$48,574",
            "+12.5% from last month",
            KpiIcon::Dollar,
            Trend::Up,
        ),
        KpiDatum::new(
            "Total Customers",
            "2,847",
            "+8.2% from last month",
            KpiIcon::Users,
            Trend::Up,
        ),
        KpiDatum::new(
            "Total Orders",
            "1,234",
            "+23.1% from last month",
            KpiIcon::Cart,
            Trend::Up,
        ),
        KpiDatum::new(
            "Conversion Rate",
            "3.24%",
            "+2.4% from last month",
            KpiIcon::TrendingUp,
            Trend::Up,
        ),
    ]
}

pub fn monthly_revenue() -> Vec<RevenuePoint> {
    [
        ("Jan", 4200),
        ("Feb", 3800),
        ("Mar", 5100),
        ("Apr", 4600),
        ("May", 5900),
        ("Jun", 6200),
    ]
    .into_iter()
    .map(|(month, revenue)| RevenuePoint {
        month: month.to_string(),
        revenue,
    })
    .collect()
}

pub fn category_sales() -> Vec<CategorySales> {
    [
        ("Electronics", 4500),
        ("Clothing", 3200),
        ("Books", 2100),
        ("Home & Garden", 2800),
        ("Sports", 1900),
    ]
    .into_iter()
    .map(|(category, sales)| CategorySales {
        category: category.to_string(),
        sales,
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    [
        ("John Doe", "Placed an order", Some("$234.00"), "2 minutes ago"),
        ("Sarah Smith", "Updated profile", None, "15 minutes ago"),
        ("Mike Johnson", "Placed an order", Some("$567.00"), "1 hour ago"),
        ("Emily Brown", "Left a review", None, "2 hours ago"),
    ]
    .into_iter()
    .map(|(customer, action, amount, time)| ActivityEntry {
        customer: customer.to_string(),
        action: action.to_string(),
        amount: amount.map(str::to_string),
        time: time.to_string(),
    })
    .collect()
}

/// User handed out by the demo session provider.
pub fn demo_user() -> AuthenticatedUser {
    AuthenticatedUser::new("Admin User", "admin@crmpro.com", "Administrator")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(customers().len(), 5);
        assert_eq!(orders().len(), 7);
        assert_eq!(kpis().len(), 4);
        assert_eq!(monthly_revenue().len(), 6);
        assert_eq!(category_sales().len(), 5);
        assert_eq!(recent_activity().len(), 4);
    }

    #[test]
    fn test_order_ids_follow_format() {
        for order in orders() {
            assert!(order.id.starts_with("ORD-"), "bad id {}", order.id);
            assert_eq!(order.id.len(), 7);
            assert!(order.items > 0);
        }
    }

    #[test]
    fn test_seed_dates_are_real() {
        let first = &orders()[0];
        assert_eq!(first.display_date(), "2024-01-15");
    }

    #[test]
    fn test_activity_amounts_only_on_orders() {
        for entry in recent_activity() {
            assert_eq!(entry.amount.is_some(), entry.action == "Placed an order");
        }
    }
}
