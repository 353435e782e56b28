use anyhow::{Context, Result};
use common::{format_currency, sum_currency};
use compute::integrity::CheckedSeed;
use compute::{filter_orders, search_customers, SalesSummary, StatusFilter};
use model::{Customer, Order};
use serde::Serialize;
use tracing::{debug, info};

/// Seed data as the dashboard would show it for one search and one status filter.
#[derive(Debug, Serialize)]
pub struct SalesReport {
    pub summary: SalesSummary,
    pub search: String,
    pub status: String,
    pub customers: Vec<Customer>,
    pub customers_total_spent: String,
    pub orders: Vec<Order>,
}

pub fn build_report(search: &str, status: &str) -> Result<SalesReport> {
    let seed = CheckedSeed::load().context("Seed data failed its integrity check")?;
    let filter: StatusFilter = status
        .parse()
        .with_context(|| format!("Invalid --status value '{}'", status))?;

    let customers: Vec<Customer> = search_customers(&seed.customers, search)
        .into_iter()
        .cloned()
        .collect();
    let orders: Vec<Order> = filter_orders(&seed.orders, filter)
        .into_iter()
        .cloned()
        .collect();
    let spent = sum_currency(customers.iter().map(|c| c.total_spent.as_str()));

    debug!(
        customers = customers.len(),
        orders = orders.len(),
        "Report assembled"
    );

    Ok(SalesReport {
        summary: SalesSummary::from_orders(&seed.orders),
        search: search.to_string(),
        status: filter.as_str().to_string(),
        customers,
        customers_total_spent: format_currency(spent),
        orders,
    })
}

pub fn report(search: &str, status: &str, json: bool) -> Result<()> {
    info!("Building sales report");
    let report = build_report(search, status)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Sales summary (all orders)");
    println!("  Total Orders:    {}", report.summary.total_orders);
    println!("  Total Revenue:   {}", report.summary.total_revenue);
    println!("  Avg Order Value: {}", report.summary.average_order_value);
    println!();

    println!(
        "Customers matching '{}': {}",
        report.search,
        report.customers.len()
    );
    for customer in &report.customers {
        println!(
            "  {:<14} {:<20} {:<8} {:>3} orders {:>8}",
            customer.name,
            customer.email,
            customer.status.as_str(),
            customer.total_orders,
            customer.total_spent
        );
    }
    println!("  Total spent: {}", report.customers_total_spent);
    println!();

    println!("Orders ({}): {}", report.status, report.orders.len());
    for order in &report.orders {
        println!(
            "  {} {} {:<14} {:>2} items {:>8} {}",
            order.id,
            order.display_date(),
            order.customer,
            order.items,
            order.amount,
            order.status
        );
    }

    Ok(())
}
