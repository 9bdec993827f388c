//! Integration tests for the LMDB certificate store.

use std::sync::Arc;

use chrono::NaiveDate;
use credo_store::{CertificateStore, CertificateWriter, StoreError};
use credo_store_lmdb::{LmdbCertificateStore, LmdbEnvironment};
use credo_types::{
    CertificateId, CertificateRecord, DateValue, PublicId, Timestamp, TrainingPeriod,
    VerificationToken,
};

const TEST_MAP_SIZE: usize = 16 * 1024 * 1024;

fn sample_record(public_id: &str, token: &str) -> CertificateRecord {
    CertificateRecord {
        id: CertificateId::new(format!("cert-{public_id}")),
        public_id: PublicId::new(public_id),
        verification_token: VerificationToken::new(token),
        recipient_name: "Jane Doe".to_string(),
        training_label: "Fire Safety".to_string(),
        training_period: Some(TrainingPeriod::Range {
            start: NaiveDate::from_ymd_opt(2024, 1, 2),
            end: NaiveDate::from_ymd_opt(2024, 1, 8),
        }),
        award_date: Some(DateValue::Text("January 2024".to_string())),
        control_number: Some("CN-0099".to_string()),
        issued_at: Timestamp::new(1_704_844_800),
    }
}

fn open_store(path: &std::path::Path) -> LmdbCertificateStore {
    let env = LmdbEnvironment::open(path, TEST_MAP_SIZE).expect("open env");
    LmdbCertificateStore::new(Arc::new(env))
}

#[test]
fn put_then_matched_lookup_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());

    let record = sample_record("qr-abc", "tok-123");
    store.put_certificate(&record).unwrap();

    let found = store
        .find_certificate(&PublicId::new("qr-abc"), &VerificationToken::new("tok-123"))
        .unwrap()
        .expect("record should match");
    assert_eq!(found, record);
}

#[test]
fn wrong_token_is_a_definitive_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    store.put_certificate(&sample_record("qr-abc", "tok-123")).unwrap();

    let result = store
        .find_certificate(&PublicId::new("qr-abc"), &VerificationToken::new("wrong"))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn unknown_public_id_is_a_definitive_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    store.put_certificate(&sample_record("qr-abc", "tok-123")).unwrap();

    let result = store
        .find_certificate(&PublicId::new("qr-zzz"), &VerificationToken::new("tok-123"))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn duplicate_pair_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    let record = sample_record("qr-abc", "tok-123");
    store.put_certificate(&record).unwrap();

    let err = store.put_certificate(&record).unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
    assert_eq!(store.certificate_count().unwrap(), 1);
}

#[test]
fn same_public_id_with_different_tokens_are_distinct_entries() {
    // The pair is the key; a colliding public id alone must not collide.
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(dir.path());
    store.put_certificate(&sample_record("qr-abc", "tok-1")).unwrap();
    store.put_certificate(&sample_record("qr-abc", "tok-2")).unwrap();

    assert_eq!(store.certificate_count().unwrap(), 2);
    let found = store
        .find_certificate(&PublicId::new("qr-abc"), &VerificationToken::new("tok-2"))
        .unwrap();
    assert!(found.is_some());
}

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = open_store(dir.path());
        store.put_certificate(&sample_record("qr-abc", "tok-123")).unwrap();
    }
    let store = open_store(dir.path());
    let found = store
        .find_certificate(&PublicId::new("qr-abc"), &VerificationToken::new("tok-123"))
        .unwrap();
    assert!(found.is_some());
    assert_eq!(store.certificate_count().unwrap(), 1);
}
