//! Stable filters that project a record collection down to what a list view shows.
//!
//! Every function here is a pure function of (collection, filter). Results
//! borrow from the input and keep its relative order.

use model::{Customer, Order, OrderStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::error::{ComputeError, Result};

/// Reads one searchable text field from a record.
pub type SearchField<T> = fn(&T) -> &str;

fn customer_name(customer: &Customer) -> &str {
    &customer.name
}

fn customer_email(customer: &Customer) -> &str {
    &customer.email
}

/// Fields the customer search box matches against.
pub const CUSTOMER_SEARCH_FIELDS: [SearchField<Customer>; 2] = [customer_name, customer_email];

/// Case-insensitive substring search across several fields.
///
/// A record is kept when any field contains the query. The empty query keeps
/// every record.
pub fn text_search<'a, T>(records: &'a [T], query: &str, fields: &[SearchField<T>]) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|&record| {
            fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Customers whose name or email contains `query`, ignoring case.
pub fn search_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let matched = text_search(customers, query, &CUSTOMER_SEARCH_FIELDS);
    trace!(query, total = customers.len(), matched = matched.len(), "Customer search");
    matched
}

/// Selection from the order status dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Sentinel meaning no filtering.
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub const ALL_VALUE: &'static str = "all";

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    /// Value used in the `<option value=...>` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => Self::ALL_VALUE,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Orders",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Every selectable filter, sentinel first.
    pub fn options() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(OrderStatus::ALL.into_iter().map(StatusFilter::Only))
            .collect()
    }
}

impl FromStr for StatusFilter {
    type Err = ComputeError;

    fn from_str(value: &str) -> Result<Self> {
        if value == Self::ALL_VALUE {
            return Ok(StatusFilter::All);
        }
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .map(StatusFilter::Only)
            .ok_or_else(|| ComputeError::UnknownStatusFilter(value.to_string()))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orders whose status matches `filter` exactly.
pub fn filter_orders(orders: &[Order], filter: StatusFilter) -> Vec<&Order> {
    let matched: Vec<&Order> = orders.iter().filter(|o| filter.matches(o.status)).collect();
    trace!(filter = %filter, total = orders.len(), matched = matched.len(), "Order status filter");
    matched
}
