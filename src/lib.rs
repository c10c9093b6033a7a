pub mod domain;

pub use domain::order::{
    Item, ItemId, Order, OrderAction, OrderError, OrderId, OrderStatus, DEFAULT_PAYMENT_METHOD,
};
