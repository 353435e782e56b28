//! Pure derivations behind the dashboard views.
//!
//! Nothing in this crate touches the DOM or holds state between calls, so the
//! same functions can be rerun against freshly fetched data once a backend
//! exists.

pub mod badge;
pub mod commands;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod gate;
pub mod integrity;
pub mod navigation;
pub mod sales;
pub mod settings;

pub use error::{ComputeError, Result};
pub use filter::{filter_orders, search_customers, StatusFilter};
pub use sales::SalesSummary;
