//! Persistence round trips through file-backed storage.

use shopwindow_client::{CartManager, FileStorage};
use shopwindow_core::ProductId;

#[tokio::test]
async fn cart_survives_reopen_with_same_quantities() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shopwindow.json");

    {
        let storage = FileStorage::open(&path).expect("open");
        let mut manager = CartManager::new(storage);
        manager.store_session("tok123", "mor_2314").expect("session");
        manager.add_to_cart(ProductId::new(3)).await.expect("add");
        manager.add_to_cart(ProductId::new(3)).await.expect("add");
        manager.add_to_cart(ProductId::new(5)).await.expect("add");
        manager.toggle_favorite(ProductId::new(9)).await.expect("toggle");
    }

    // A fresh process over the same file sees the same quantity-per-id
    // mapping (order is not part of the contract).
    let storage = FileStorage::open(&path).expect("reopen");
    let manager = CartManager::new(storage);

    let mut quantities = manager.quantities();
    quantities.sort_by_key(|(id, _)| *id);
    assert_eq!(
        quantities,
        vec![(ProductId::new(3), 2), (ProductId::new(5), 1)]
    );
    assert_eq!(manager.total_item_count(), 3);
    assert_eq!(manager.favorites(), vec![ProductId::new(9)]);

    let session = manager.session().expect("session survives reopen");
    assert_eq!(session.username, "mor_2314");
}

#[tokio::test]
async fn corrupted_file_degrades_to_empty_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("shopwindow.json");
    std::fs::write(&path, "}{ corrupted").expect("write");

    let storage = FileStorage::open(&path).expect("open");
    let manager = CartManager::new(storage);

    assert_eq!(manager.session(), None);
    assert!(manager.cart_ids().is_empty());
    assert!(manager.favorites().is_empty());
}
