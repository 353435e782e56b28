use model::{seed, ActivityEntry, CategorySales, KpiDatum, RevenuePoint};
use serde::Serialize;

/// Everything the dashboard page renders, assembled from the seed series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub kpis: Vec<KpiDatum>,
    pub revenue: Vec<RevenuePoint>,
    pub categories: Vec<CategorySales>,
    pub activity: Vec<ActivityEntry>,
}

impl DashboardOverview {
    pub fn from_seed() -> Self {
        Self {
            kpis: seed::kpis(),
            revenue: seed::monthly_revenue(),
            categories: seed::category_sales(),
            activity: seed::recent_activity(),
        }
    }

    /// Month labels and values for the revenue line chart.
    pub fn revenue_series(&self) -> (Vec<String>, Vec<u32>) {
        self.revenue
            .iter()
            .map(|point| (point.month.clone(), point.revenue))
            .unzip()
    }

    /// Category labels and values for the sales bar chart.
    pub fn category_series(&self) -> (Vec<String>, Vec<u32>) {
        self.categories
            .iter()
            .map(|c| (c.category.clone(), c.sales))
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Trend;

    #[test]
    fn test_overview_from_seed() {
        let overview = DashboardOverview::from_seed();
        assert_eq!(overview.kpis[0].title, "Total Revenue");
        assert_eq!(overview.kpis[0].value, "$48,574");
        assert!(overview.kpis.iter().all(|k| k.trend == Trend::Up));
        assert_eq!(overview.activity.len(), 4);
    }

    #[test]
    fn test_revenue_series_keeps_month_order() {
        let (months, values) = DashboardOverview::from_seed().revenue_series();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(values, vec![4200, 3800, 5100, 4600, 5900, 6200]);
    }

    #[test]
    fn test_category_series() {
        let (labels, values) = DashboardOverview::from_seed().category_series();
        assert_eq!(labels[3], "Home & Garden");
        assert_eq!(values.iter().sum::<u32>(), 14500);
    }
}
