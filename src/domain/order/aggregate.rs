use serde::Serialize;
use tracing::{debug, warn};

use super::errors::OrderError;
use super::value_objects::{Item, ItemId, OrderAction, OrderId, OrderStatus};

pub const DEFAULT_PAYMENT_METHOD: &str = "cash";

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

/// A customer order: line items, a payment method and a lifecycle status.
///
/// `total` is cached and recomputed by every method that touches `items`.
/// Fields are private so the cache and the status can only change through
/// the methods below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    // Identity
    id: OrderId,

    // Current State
    items: Vec<Item>,
    payment_method: String,
    status: OrderStatus,

    // Derived
    total: f64,
}

impl Order {
    /// Empty order paid in cash.
    pub fn new(id: OrderId) -> Self {
        Self::with_items(id, Vec::new(), DEFAULT_PAYMENT_METHOD)
    }

    /// Seed an order with pre-built items.
    ///
    /// The items are taken as-is: unlike [`Order::add_item`] nothing is
    /// validated here, so items built with [`Item::from_parts`] are kept
    /// even if their price is negative or NaN.
    pub fn with_items(
        id: OrderId,
        items: Vec<Item>,
        payment_method: impl Into<String>,
    ) -> Self {
        let mut order = Self {
            id,
            items,
            payment_method: payment_method.into(),
            status: OrderStatus::Created,
            total: 0.0,
        };
        order.total = order.calculate_total();

        debug!(
            order_id = %order.id,
            items = order.items.len(),
            total = order.total,
            payment_method = %order.payment_method,
            "Order created"
        );

        order
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum of the current item prices, `0.0` when there are none.
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().fold(0.0, |total, item| total + item.price())
    }

    /// Append an item and recompute the total.
    ///
    /// Only a NaN price is rejected. Negative prices pass, which is looser
    /// than [`Item::new`].
    pub fn add_item(&mut self, item: Item) -> Result<(), OrderError> {
        if item.price().is_nan() {
            warn!(order_id = %self.id, item_id = %item.id(), "Rejected item with invalid price");
            return Err(OrderError::InvalidItem);
        }

        debug!(order_id = %self.id, item_id = %item.id(), price = item.price(), "Item added");
        self.items.push(item);
        self.total = self.calculate_total();
        Ok(())
    }

    /// Remove every item carrying `item_id`.
    ///
    /// Returns `true` when at least one item was removed. An unknown id is
    /// not an error.
    pub fn remove_item(&mut self, item_id: ItemId) -> bool {
        let original_len = self.items.len();

        self.items.retain(|item| item.id() != item_id);
        self.total = self.calculate_total();

        let removed = self.items.len() != original_len;
        debug!(
            order_id = %self.id,
            %item_id,
            removed = original_len - self.items.len(),
            total = self.total,
            "Item removal"
        );
        removed
    }

    /// `created` → `paid`.
    pub fn pay(&mut self) -> Result<(), OrderError> {
        self.transition(OrderAction::Pay)
    }

    /// `paid` → `completed`.
    pub fn complete(&mut self) -> Result<(), OrderError> {
        self.transition(OrderAction::Complete)
    }

    /// Anything but `completed` → `cancelled`. Cancelling twice is allowed.
    pub fn cancel(&mut self) -> Result<(), OrderError> {
        self.transition(OrderAction::Cancel)
    }

    fn transition(&mut self, action: OrderAction) -> Result<(), OrderError> {
        let from = self.status;

        if !action.permits(from) {
            warn!(order_id = %self.id, ?action, status = %from, "Invalid status transition");
            return Err(OrderError::InvalidTransition { action, from });
        }

        self.status = action.target();
        debug!(order_id = %self.id, %from, to = %self.status, "Order status changed");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
