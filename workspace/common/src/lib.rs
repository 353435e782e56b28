//! Shared helpers used by both the compute crate and the frontend.

pub mod currency;

pub use currency::{format_currency, parse_currency, sum_currency, try_parse_currency, Money};
