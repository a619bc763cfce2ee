//! End-to-end flows over an in-memory store: order workflow, catalog
//! editing and the event listing.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use console_server::ServerState;
use console_server::catalog::ProductDraft;
use console_server::db::models::{Brand, CartLine, Category, Event, OrderStatus, Size, SoldItem};
use console_server::reporting::sold_items_report;
use console_server::services::{MediaFile, MediaUploader, UploadError};
use console_server::workflow::WorkflowError;

struct FakeUploader;

#[async_trait]
impl MediaUploader for FakeUploader {
    async fn upload(&self, file: MediaFile) -> Result<String, UploadError> {
        Ok(format!("https://media.test/shop/{}", file.filename))
    }
}

async fn test_state() -> ServerState {
    ServerState::for_tests(Arc::new(FakeUploader)).await
}

fn order(transaction_id: &str, item_name: &str, status: OrderStatus) -> SoldItem {
    SoldItem {
        id: None,
        transaction_id: transaction_id.to_string(),
        customer_name: "Ana Reyes".to_string(),
        email: "ana@example.com".to_string(),
        phone: "0917 555 0101".to_string(),
        shipping_address: "Quezon City".to_string(),
        payment_method: "GCash".to_string(),
        total_amount: Decimal::new(89900, 2),
        order_date: NaiveDate::from_ymd_opt(2024, 3, 14),
        cart_items: vec![CartLine {
            name: item_name.to_string(),
            size: "M".to_string(),
            quantity: 2,
        }],
        status,
        receipt_url: None,
    }
}

#[tokio::test]
async fn staged_transition_commits_to_store() {
    let state = test_state().await;
    let repo = state.sold_item_repo();

    let created = repo
        .create(order("TX-1001", "Tour Tee", OrderStatus::Pending))
        .await
        .unwrap();
    repo.create(order("TX-1002", "Cap", OrderStatus::Pending))
        .await
        .unwrap();
    let key = created.id.as_ref().unwrap().key().to_string();

    let mut engine = state.sold_items.lock().await;
    engine.load(repo.find_all().await.unwrap());
    engine
        .request_transition(&key, OrderStatus::Approved)
        .unwrap();
    let updated = engine.confirm_transition(&repo).await.unwrap();
    assert_eq!(updated.status, OrderStatus::Approved);
    drop(engine);

    // The store saw exactly the status change
    let stored = repo.find_by_id(&key).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Approved);
    assert_eq!(stored.transaction_id, "TX-1001");
    assert_eq!(stored.cart_items, created.cart_items);
}

#[tokio::test]
async fn delete_is_gated_on_declined_status() {
    let state = test_state().await;
    let repo = state.sold_item_repo();

    let created = repo
        .create(order("TX-2001", "Hoodie", OrderStatus::Pending))
        .await
        .unwrap();
    let key = created.id.as_ref().unwrap().key().to_string();

    let mut engine = state.sold_items.lock().await;
    engine.load(repo.find_all().await.unwrap());

    let err = engine.delete_record(&repo, &key).await.unwrap_err();
    assert!(matches!(err, WorkflowError::DeleteNotAllowed(_)));
    assert!(repo.find_by_id(&key).await.unwrap().is_some());

    // Decline it through the same staged flow, then deletion is allowed
    engine
        .request_transition(&key, OrderStatus::Declined)
        .unwrap();
    engine.confirm_transition(&repo).await.unwrap();
    engine.delete_record(&repo, &key).await.unwrap();

    assert!(repo.find_by_id(&key).await.unwrap().is_none());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn catalog_save_uploads_and_persists() {
    let state = test_state().await;

    let draft = ProductDraft {
        name: "Anniversary Tee".to_string(),
        brand: Some(Brand::from("CustomCo".to_string())),
        category: Some(Category::from("T-Shirts".to_string())),
        price: Some(Decimal::new(64900, 2)),
        sizes: vec![Size::L, Size::S],
        image: Vec::new(),
        attachments: vec![MediaFile {
            filename: "front.png".to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        }],
    };

    state.catalog.save_product(draft, None).await.unwrap();

    let products = state.catalog.refresh().await.unwrap();
    assert_eq!(products.len(), 1);
    let product = &products[0];
    assert_eq!(product.image, vec!["https://media.test/shop/front.png"]);
    assert_eq!(product.sizes, vec![Size::S, Size::L]);
    assert_eq!(product.brand, Brand::Custom("CustomCo".to_string()));
}

#[tokio::test]
async fn recent_events_come_newest_first() {
    let state = test_state().await;

    for (name, year) in [
        ("Homecoming", 2023),
        ("Block Party", 2025),
        ("Launch Night", 2024),
        ("First Gig", 2022),
    ] {
        let event = Event {
            id: None,
            name: name.to_string(),
            year,
            description: String::new(),
        };
        let _: Option<Event> = state.db.create("events").content(event).await.unwrap();
    }

    let recent = state.events().find_recent(3).await.unwrap();
    let years: Vec<i32> = recent.iter().map(|e| e.year).collect();
    assert_eq!(years, vec![2025, 2024, 2023]);
}

#[tokio::test]
async fn export_reflects_stored_orders() {
    let state = test_state().await;
    let repo = state.sold_item_repo();

    repo.create(order("TX-3001", "Tour Tee", OrderStatus::Approved))
        .await
        .unwrap();
    repo.create(order("TX-3002", "Sticker Pack", OrderStatus::Pending))
        .await
        .unwrap();

    let rows = repo.find_all().await.unwrap();
    let csv = sold_items_report(&rows).unwrap();
    let text = String::from_utf8(csv).unwrap();

    assert!(text.starts_with("Transaction ID"));
    assert!(text.contains("TX-3001"));
    assert!(text.contains("Tour Tee (Size: M, Qty: 2)"));
    assert_eq!(text.trim_end().lines().count(), 3);
}
