//! In-memory order listing stub.
//!
//! Stands in for the persistence layer behind the protected listing
//! endpoint. Orders are keyed by account id and read-only after startup.

use crate::models::api::OrderSummary;
use crate::services::directory::Account;
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// Read-only order store keyed by account id
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: HashMap<Uuid, Vec<OrderSummary>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(mut self, account_id: Uuid, orders: Vec<OrderSummary>) -> Self {
        self.orders.insert(account_id, orders);
        self
    }

    /// Seed a couple of demo orders for each known account
    pub fn seed_demo<'a>(accounts: impl Iterator<Item = &'a Account>) -> Self {
        let mut store = Self::new();
        for account in accounts {
            let orders = (1..=3i64)
                .map(|n| OrderSummary {
                    id: Uuid::new_v4(),
                    reference: format!("{}-{n:04}", account.api_key),
                    total_minor: 1250 * n,
                    created_at: Utc::now(),
                })
                .collect();
            store.orders.insert(account.account_id, orders);
        }
        store
    }

    /// All orders for one account, newest first ordering left to the seed
    pub fn orders_for(&self, account_id: Uuid) -> Vec<OrderSummary> {
        self.orders.get(&account_id).cloned().unwrap_or_default()
    }
}
