use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Record;

/// Whether a customer is currently doing business with us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer row as shown in the customer list.
///
/// `total_spent` is kept as the display string (for example `$2,450`); it is
/// never summed anywhere, so it is not parsed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: CustomerStatus,
    pub total_orders: u32,
    pub total_spent: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        status: CustomerStatus,
        total_orders: u32,
        total_spent: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            status,
            total_orders,
            total_spent: total_spent.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}
