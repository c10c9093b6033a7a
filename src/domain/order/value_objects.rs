use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Caller-supplied item identifier. Opaque to the model; duplicates allowed.
pub type ItemId = u64;

/// Caller-supplied order identifier.
pub type OrderId = u64;

/// A priced line. Immutable once built.
///
/// Deserialization goes through [`Item::new`], so a payload with a negative
/// price is rejected. [`Item::from_parts`] is the only unchecked path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemParts")]
pub struct Item {
    id: ItemId,
    name: String,
    price: f64,
}

impl Item {
    /// Build an item, rejecting NaN and negative prices.
    pub fn new(id: ItemId, name: impl Into<String>, price: f64) -> Result<Self, OrderError> {
        if price.is_nan() || price < 0.0 {
            return Err(OrderError::InvalidPrice(price));
        }

        Ok(Self::from_parts(id, name, price))
    }

    /// Build an item without checking the price.
    ///
    /// Used when seeding an order from data that was produced elsewhere.
    pub fn from_parts(id: ItemId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Wire shape of an [`Item`] before the price check.
#[derive(Deserialize)]
struct ItemParts {
    id: ItemId,
    name: String,
    price: f64,
}

impl TryFrom<ItemParts> for Item {
    type Error = OrderError;

    fn try_from(parts: ItemParts) -> Result<Self, Self::Error> {
        Item::new(parts.id, parts.name, parts.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Paid,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Paid => "paid",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle commands that move an order between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderAction {
    Pay,
    Complete,
    Cancel,
}

impl OrderAction {
    /// Status the order ends up in when the action succeeds.
    pub fn target(&self) -> OrderStatus {
        match self {
            OrderAction::Pay => OrderStatus::Paid,
            OrderAction::Complete => OrderStatus::Completed,
            OrderAction::Cancel => OrderStatus::Cancelled,
        }
    }

    pub fn permits(&self, from: OrderStatus) -> bool {
        match self {
            OrderAction::Pay => from == OrderStatus::Created,
            OrderAction::Complete => from == OrderStatus::Paid,
            OrderAction::Cancel => from != OrderStatus::Completed,
        }
    }

    /// Message reported when the action is not permitted. Callers match on
    /// these strings, keep them stable.
    pub fn rejection(&self) -> &'static str {
        match self {
            OrderAction::Pay => "Order cannot be paid",
            OrderAction::Complete => "Order must be paid before it can be completed",
            OrderAction::Cancel => "Completed order cannot be cancelled",
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
