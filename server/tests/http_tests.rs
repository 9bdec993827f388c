//! End-to-end router tests using the nullable store.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use credo_nullables::NullCertificateStore;
use credo_store::{CertificateStore, CertificateWriter};
use credo_server::server::AppState;
use credo_server::VerifyServer;
use credo_types::{
    CertificateId, CertificateRecord, PublicId, Timestamp, VerificationToken,
};
use credo_verify::VerificationFlow;

fn sample_record() -> CertificateRecord {
    CertificateRecord {
        id: CertificateId::new("c1"),
        public_id: PublicId::new("qr-abc"),
        verification_token: VerificationToken::new("tok-123"),
        recipient_name: "Jane Doe".to_string(),
        training_label: "Fire Safety".to_string(),
        training_period: None,
        award_date: None,
        control_number: Some("CN-0099".to_string()),
        issued_at: Timestamp::new(1_704_844_800),
    }
}

fn router_over(store: Arc<NullCertificateStore>) -> Router {
    let flow = VerificationFlow::with_timeout(
        store as Arc<dyn CertificateStore>,
        Duration::from_secs(1),
    );
    VerifyServer::router(Arc::new(AppState { flow }))
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn matching_link_renders_the_certificate() {
    let store = Arc::new(NullCertificateStore::with_records([sample_record()]));
    let (status, body) = get(router_over(store), "/verify/qr-abc?token=tok-123").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Certificate Verified"));
    assert!(body.contains("Jane Doe"));
    assert!(body.contains("Fire Safety"));
    assert!(body.contains("CN-0099"));
    assert!(body.contains("Jan 10, 2024"));
    // Token must never appear in the rendered output.
    assert!(!body.contains("tok-123"));
}

#[tokio::test]
async fn wrong_token_renders_the_generic_failure() {
    let store = Arc::new(NullCertificateStore::with_records([sample_record()]));
    let (status, body) = get(router_over(store), "/verify/qr-abc?token=wrong").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Certificate not found or invalid"));
    assert!(!body.contains("Jane Doe"));
}

#[tokio::test]
async fn missing_token_is_an_invalid_link_and_makes_no_lookup() {
    let store = Arc::new(NullCertificateStore::with_records([sample_record()]));
    let (status, body) = get(router_over(store.clone()), "/verify/qr-abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid verification link"));
    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn undeserializable_query_renders_the_generic_invalid_link_page() {
    // A repeated token parameter fails query deserialization; that is a
    // malformed link, so the viewer gets the generic page and never a
    // framework diagnostic, and no lookup happens.
    let store = Arc::new(NullCertificateStore::with_records([sample_record()]));
    let (status, body) =
        get(router_over(store.clone()), "/verify/qr-abc?token=a&token=b").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid verification link"));
    assert!(!body.contains("Failed to deserialize"));
    assert_eq!(store.lookup_count(), 0);
}

#[tokio::test]
async fn empty_token_is_an_invalid_link() {
    let store = Arc::new(NullCertificateStore::with_records([sample_record()]));
    let (status, body) = get(router_over(store), "/verify/qr-abc?token=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid verification link"));
}

#[tokio::test]
async fn store_failure_and_no_match_produce_identical_bodies() {
    let failing = Arc::new(NullCertificateStore::new());
    failing.fail_lookups();
    let (failed_status, failed_body) =
        get(router_over(failing), "/verify/qr-abc?token=tok-123").await;

    let empty = Arc::new(NullCertificateStore::new());
    let (empty_status, empty_body) =
        get(router_over(empty), "/verify/qr-abc?token=tok-123").await;

    assert_eq!(failed_status, empty_status);
    assert_eq!(failed_body, empty_body);
}

#[tokio::test]
async fn repeated_requests_yield_the_same_outcome() {
    let store = Arc::new(NullCertificateStore::with_records([sample_record()]));
    let router = router_over(store);
    let (first_status, first_body) =
        get(router.clone(), "/verify/qr-abc?token=tok-123").await;
    let (second_status, second_body) =
        get(router, "/verify/qr-abc?token=tok-123").await;

    assert_eq!(first_status, second_status);
    assert_eq!(first_status, StatusCode::OK);
    assert!(first_body.contains("Jane Doe"));
    assert!(second_body.contains("Jane Doe"));
}

#[tokio::test]
async fn landing_page_explains_verification() {
    let store = Arc::new(NullCertificateStore::new());
    let (status, body) = get(router_over(store), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Certificate Verification"));
    assert!(body.contains("Scan the QR code"));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let store = Arc::new(NullCertificateStore::new());
    let (status, body) = get(router_over(store), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn seeding_a_used_store_still_verifies_the_new_record() {
    let store = Arc::new(NullCertificateStore::new());
    let router = router_over(store.clone());

    let (status, _) = get(router.clone(), "/verify/qr-new?token=tok-new").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut record = sample_record();
    record.public_id = PublicId::new("qr-new");
    record.verification_token = VerificationToken::new("tok-new");
    store.put_certificate(&record).unwrap();

    let (status, body) = get(router, "/verify/qr-new?token=tok-new").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Jane Doe"));
}
