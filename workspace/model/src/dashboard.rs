//! View-model records rendered on the dashboard overview.

use serde::{Deserialize, Serialize};

/// Direction a KPI moved compared to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Icon shown on a KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiIcon {
    Dollar,
    Users,
    Cart,
    TrendingUp,
}

/// A single summary metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiDatum {
    pub title: String,
    pub value: String,
    pub change: String,
    pub icon: KpiIcon,
    pub trend: Trend,
}

impl KpiDatum {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        icon: KpiIcon,
        trend: Trend,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            icon,
            trend,
        }
    }
}

/// Revenue for one month, in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: u32,
}

/// Sales for one product category, in whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub sales: u32,
}

/// One line in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub customer: String,
    pub action: String,
    pub amount: Option<String>,
    pub time: String,
}
