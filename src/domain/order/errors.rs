use super::value_objects::{OrderAction, OrderStatus};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    /// Carries the rejected price. A NaN payload never compares equal, even
    /// to itself, so match on the variant rather than using `==`.
    #[error("Invalid price")]
    InvalidPrice(f64),

    #[error("Invalid item")]
    InvalidItem,

    /// Display is the action's rejection message, nothing else.
    #[error("{}", .action.rejection())]
    InvalidTransition {
        action: OrderAction,
        from: OrderStatus,
    },
}
