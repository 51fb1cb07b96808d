//! Operation-level tests against the in-memory mock repository.
//!
//! These cover call patterns and failure handling that are awkward to
//! provoke with a real file.

mod mocks;

use contact_book::{
    ContactBookError, ContactDraft, ContactService, ContactServiceImpl, ErrorKind, Report,
    ReportLevel,
};
use mocks::{FailOn, MockContactRepository};
use std::sync::Arc;

fn service(repo: &MockContactRepository) -> ContactServiceImpl {
    ContactServiceImpl::new(Arc::new(repo.clone()))
}

fn draft() -> ContactDraft {
    ContactDraft::new("alice1", "alice@example.com", "5551234")
}

#[tokio::test]
async fn test_validation_failure_touches_nothing() {
    let repo = MockContactRepository::new();
    let service = service(&repo);

    let err = service
        .add_contact(ContactDraft::new("alice1", "alice@example.org", "1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(repo.get_call_count("read_all"), 0);
    assert_eq!(repo.get_call_count("write_all"), 0);
}

#[tokio::test]
async fn test_add_reads_once_and_writes_once() {
    let repo = MockContactRepository::new();
    let service = service(&repo);

    service.add_contact(draft()).await.unwrap();

    assert_eq!(repo.get_call_count("read_all"), 1);
    assert_eq!(repo.get_call_count("write_all"), 1);
    assert_eq!(repo.contacts().len(), 1);
}

#[tokio::test]
async fn test_failed_write_keeps_previous_state() {
    let repo = MockContactRepository::new();
    let service = service(&repo);
    let existing = service.add_contact(draft()).await.unwrap();

    repo.fail_on(Some(FailOn::Write));

    let err = service
        .add_contact(ContactDraft::new("bobby2", "bob@example.net", "2"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactBookError::Storage(_)));

    let err = service.remove_contact(&existing.id).await.unwrap_err();
    assert!(matches!(err, ContactBookError::Storage(_)));

    assert_eq!(repo.contacts(), vec![existing]);
}

#[tokio::test]
async fn test_failed_read_is_reported_not_treated_as_empty() {
    let repo = MockContactRepository::new();
    repo.fail_on(Some(FailOn::Read));
    let service = service(&repo);

    let err = service.list_contacts().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);

    let err = service.add_contact(draft()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert_eq!(repo.get_call_count("write_all"), 0);
}

#[tokio::test]
async fn test_remove_not_found_skips_write() {
    let repo = MockContactRepository::new();
    let service = service(&repo);

    let err = service.remove_contact("ghost").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(repo.get_call_count("write_all"), 0);
}

#[tokio::test]
async fn test_every_error_maps_to_a_report() {
    let repo = MockContactRepository::new();
    let service = service(&repo);

    let validation = service
        .add_contact(ContactDraft::new("al", "al@example.com", "1"))
        .await
        .unwrap_err();
    let report = Report::from_error(&validation);
    assert_eq!(report.level, ReportLevel::Error);
    assert_eq!(
        report.message,
        "ERROR: \"name\" length must be at least 3 characters long!"
    );

    let not_found = service.remove_contact("ghost").await.unwrap_err();
    assert_eq!(Report::from_error(&not_found).level, ReportLevel::Info);

    repo.fail_on(Some(FailOn::Read));
    let storage = service.list_contacts().await.unwrap_err();
    let report = Report::from_error(&storage);
    assert_eq!(report.level, ReportLevel::Error);
    assert!(report.message.contains("mock read failure"));
}
