//! End-to-end storefront flows over in-memory storage

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use keepstudy::prelude::*;
use rust_decimal::Decimal;
use testresult::TestResult;

struct Storefront {
    storage: Arc<dyn KeyValueStore>,
    notifier: Notifier,
    cart: CartStore,
    orders: OrderStore,
}

fn storefront() -> TestResult<Storefront> {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let notifier = Notifier::new();

    Ok(Storefront {
        cart: CartStore::load(Arc::clone(&storage), notifier.clone())?,
        orders: OrderStore::load(Arc::clone(&storage))?,
        storage,
        notifier,
    })
}

#[tokio::test]
async fn browse_add_and_check_out() -> TestResult {
    let catalog = Catalog::demo()?;
    let mut store = storefront()?;

    let python = catalog.get(1).ok_or("course 1 should exist")?;
    let ai = catalog.get(2).ok_or("course 2 should exist")?;

    assert_eq!(store.cart.add(python.to_cart_item())?, AddOutcome::Added);
    assert_eq!(store.cart.add(ai.to_cart_item())?, AddOutcome::Added);
    assert_eq!(store.cart.add(python.to_cart_item())?, AddOutcome::AlreadyPresent);
    assert_eq!(format_price(&store.cart.total()?), "¥698");

    let id = checkout(
        &mut store.cart,
        &mut store.orders,
        &InstantGateway::new(),
        PaymentMethod::Wechat,
    )
    .await?;

    let order = store.orders.get(id.as_str()).ok_or("order should exist")?;

    assert_eq!(order.total, Decimal::new(698, 0));
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.status.label().text, "已支付");
    assert_eq!(order.payment_method.label(), "微信支付");
    assert!(store.cart.is_empty());
    assert!(store.storage.load("cartItems")?.is_none());

    Ok(())
}

#[test]
fn second_view_follows_cart_broadcasts() -> TestResult {
    let mut store = storefront()?;
    let badge = Arc::new(AtomicUsize::new(0));

    let observer = Arc::new(std::sync::Mutex::new(CartStore::load(
        Arc::clone(&store.storage),
        Notifier::new(),
    )?));

    {
        let badge = Arc::clone(&badge);
        let observer = Arc::clone(&observer);

        store.notifier.subscribe(move |event| {
            assert_eq!(event, ChangeEvent::CartUpdated, "unexpected event");

            if let Ok(mut observer) = observer.lock()
                && observer.reload().is_ok()
            {
                badge.store(observer.len(), Ordering::SeqCst);
            }
        });
    }

    let catalog = Catalog::demo()?;

    for course in catalog.courses().iter().take(3) {
        store.cart.add(course.to_cart_item())?;
    }

    assert_eq!(badge.load(Ordering::SeqCst), 3);

    store.cart.remove(2)?;

    assert_eq!(badge.load(Ordering::SeqCst), 2);

    store.cart.clear()?;

    assert_eq!(badge.load(Ordering::SeqCst), 0);

    Ok(())
}

#[test]
fn orders_survive_a_restart() -> TestResult {
    let store = storefront()?;
    let mut orders = store.orders;

    let items = vec![Catalog::demo()?.get(4).ok_or("course 4 should exist")?.to_cart_item()];
    let id = orders.create(items, Decimal::new(349, 0), PaymentMethod::Card)?;

    let restarted = OrderStore::load(store.storage)?;

    assert_eq!(restarted.len(), 1);
    assert_eq!(restarted.search("算法").len(), 1);
    assert_eq!(
        restarted.get(id.as_str()).map(|order| order.payment_method.label()),
        Some("银行卡")
    );

    Ok(())
}

#[test]
fn malformed_cart_is_reported() -> TestResult {
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    storage.save("cartItems", "[{\"id\":1,")?;

    let result = CartStore::load(storage, Notifier::new());

    assert!(
        matches!(result, Err(StorageError::Malformed { .. })),
        "expected malformed cart error, got {result:?}"
    );

    Ok(())
}
