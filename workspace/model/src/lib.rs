//! Record types and seed collections for the CRM dashboard.
//!
//! Every collection here is hand-authored seed data. Nothing in the workspace
//! mutates it; views derive filtered projections from it instead.

pub mod customer;
pub mod dashboard;
pub mod order;
pub mod seed;
pub mod user;

pub use customer::{Customer, CustomerStatus};
pub use dashboard::{ActivityEntry, CategorySales, KpiDatum, KpiIcon, RevenuePoint, Trend};
pub use order::{Order, OrderStatus};
pub use user::AuthenticatedUser;

/// A record that carries an identifier expected to be unique within its collection.
pub trait Record {
    fn id(&self) -> &str;
}
