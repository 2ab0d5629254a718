//! Favorites scenarios: toggle semantics and auth gating.

use shopwindow_client::commerce::CommerceError;
use shopwindow_client::{CartManager, MemoryStorage};
use shopwindow_core::ProductId;
use shopwindow_integration_tests::StubCatalog;

fn logged_in_manager() -> CartManager<MemoryStorage> {
    let mut manager = CartManager::new(MemoryStorage::new());
    manager
        .store_session("tok123", "mor_2314")
        .expect("store session");
    manager
}

#[tokio::test]
async fn toggle_pair_restores_membership() {
    let mut manager = logged_in_manager();

    // favorites = [1, 2]
    manager.toggle_favorite(ProductId::new(1)).await.expect("toggle");
    manager.toggle_favorite(ProductId::new(2)).await.expect("toggle");

    // toggle(2) removes it...
    let now = manager.toggle_favorite(ProductId::new(2)).await.expect("toggle");
    assert!(!now);
    assert!(manager.is_favorite(ProductId::new(1)));
    assert!(!manager.is_favorite(ProductId::new(2)));

    // ...and toggling again restores membership (position not guaranteed).
    let now = manager.toggle_favorite(ProductId::new(2)).await.expect("toggle");
    assert!(now);
    assert!(manager.is_favorite(ProductId::new(1)));
    assert!(manager.is_favorite(ProductId::new(2)));
    assert_eq!(manager.favorites().len(), 2);
}

#[tokio::test]
async fn unauthenticated_toggle_persists_nothing() {
    let mut manager = CartManager::new(MemoryStorage::new());

    assert!(matches!(
        manager.toggle_favorite(ProductId::new(1)).await,
        Err(CommerceError::LoginRequired)
    ));
    assert!(manager.favorites().is_empty());
}

#[tokio::test]
async fn favorite_details_load_all_favorites() {
    let mut manager = logged_in_manager();
    let stub = StubCatalog::with_prices(&[(1, "1.00"), (2, "2.00")]);

    manager.toggle_favorite(ProductId::new(1)).await.expect("toggle");
    manager.toggle_favorite(ProductId::new(2)).await.expect("toggle");

    let products = manager.load_favorite_details(&stub).await.expect("load");
    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn logout_clears_favorites() {
    let mut manager = logged_in_manager();
    manager.toggle_favorite(ProductId::new(1)).await.expect("toggle");

    manager.logout().expect("logout");

    assert!(manager.favorites().is_empty());
    assert_eq!(manager.session(), None);
}
