//! End-to-end lifecycle scenarios driven through the public API.

use order_lifecycle::{Item, Order, OrderAction, OrderError, OrderStatus, DEFAULT_PAYMENT_METHOD};

#[test]
fn scenario_card_order_paid_completed_then_cancel_rejected() {
    let items = vec![
        Item::new(1, "Burger", 10.0).unwrap(),
        Item::new(2, "Fries", 5.0).unwrap(),
    ];
    let mut order = Order::with_items(1, items, "card");

    assert_eq!(order.total(), 15.0);
    assert_eq!(order.payment_method(), "card");
    assert_eq!(order.status(), OrderStatus::Created);

    order.pay().unwrap();
    order.complete().unwrap();
    assert_eq!(order.status(), OrderStatus::Completed);

    let err = order.cancel().unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition {
            action: OrderAction::Cancel,
            from: OrderStatus::Completed,
        }
    );
    assert_eq!(err.to_string(), "Completed order cannot be cancelled");
    assert_eq!(order.status(), OrderStatus::Completed);
}

#[test]
fn scenario_default_order() {
    let order = Order::new(1);

    assert_eq!(order.id(), 1);
    assert!(order.items().is_empty());
    assert_eq!(order.payment_method(), DEFAULT_PAYMENT_METHOD);
    assert_eq!(order.payment_method(), "cash");
    assert_eq!(order.status(), OrderStatus::Created);
    assert_eq!(order.total(), 0.0);
}

#[test]
fn scenario_total_tracks_every_mutation() {
    let mut order = Order::new(7);

    order.add_item(Item::new(1, "Burger", 10.0).unwrap()).unwrap();
    order.add_item(Item::new(2, "Fries", 5.0).unwrap()).unwrap();
    order.add_item(Item::new(1, "Burger", 10.0).unwrap()).unwrap();
    assert_eq!(order.total(), 25.0);

    // Rejected add leaves everything as it was.
    assert_eq!(
        order.add_item(Item::from_parts(9, "Broken", f64::NAN)),
        Err(OrderError::InvalidItem)
    );
    assert_eq!(order.items().len(), 3);
    assert_eq!(order.total(), 25.0);

    assert!(order.remove_item(1));
    assert_eq!(order.items().len(), 1);
    assert_eq!(order.total(), 5.0);

    assert!(!order.remove_item(1));
    assert_eq!(order.total(), 5.0);

    assert!(order.remove_item(2));
    assert!(order.items().is_empty());
    assert_eq!(order.total(), 0.0);
    assert_eq!(order.total(), order.calculate_total());
}

#[test]
fn scenario_cancel_paid_order_then_pay_rejected() {
    let mut order = Order::new(3);
    order.pay().unwrap();
    order.cancel().unwrap();
    assert_eq!(order.status(), OrderStatus::Cancelled);

    let err = order.pay().unwrap_err();
    assert_eq!(err.to_string(), "Order cannot be paid");

    let err = order.complete().unwrap_err();
    assert_eq!(err.to_string(), "Order must be paid before it can be completed");
    assert_eq!(order.status(), OrderStatus::Cancelled);
}
