use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Record;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Pending,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Completed,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Pending => "pending",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human label used in the status select.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Pending => "Pending",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sales order.
///
/// The customer is denormalized by name and is not a key into the customer
/// collection. `amount` stays in its display form (`$234.00`) and is parsed
/// only when metrics are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub date: NaiveDate,
    pub amount: String,
    pub status: OrderStatus,
    pub items: u32,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        date: NaiveDate,
        amount: impl Into<String>,
        status: OrderStatus,
        items: u32,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            date,
            amount: amount.into(),
            status,
            items,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }

    /// Date as rendered in the order table.
    pub fn display_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let order = Order::new(
            "ORD-001",
            "John Doe",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "$234.00",
            OrderStatus::Completed,
            3,
        );
        assert_eq!(order.display_date(), "2024-01-05");
        assert!(order.is_completed());
    }

    #[test]
    fn test_order_serializes_date_and_status() {
        let order = Order::new(
            "ORD-004",
            "Emily Brown",
            NaiveDate::from_ymd_opt(2024, 1, 13).unwrap(),
            "$123.00",
            OrderStatus::Cancelled,
            1,
        );
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["date"], "2024-01-13");
        assert_eq!(value["status"], "cancelled");
    }
}
