use model::{seed, Customer, Order, Record};
use std::collections::HashSet;
use tracing::{debug, error};

use crate::error::{ComputeError, Result};

/// Fails on the first identifier that appears twice in `records`.
pub fn ensure_unique_ids<T: Record>(collection: &str, records: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            let err = ComputeError::DuplicateId {
                collection: collection.to_string(),
                id: record.id().to_string(),
            };
            error!(?err, "Record collection failed integrity check");
            return Err(err);
        }
    }
    debug!(collection, count = records.len(), "Record ids are unique");
    Ok(())
}

/// Seed collections after their ids have been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedSeed {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
}

impl CheckedSeed {
    pub fn load() -> Result<Self> {
        let customers = seed::customers();
        let orders = seed::orders();
        ensure_unique_ids("customers", &customers)?;
        ensure_unique_ids("orders", &orders)?;
        Ok(Self { customers, orders })
    }
}
