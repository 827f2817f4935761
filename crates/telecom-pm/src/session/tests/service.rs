use super::common::*;
use std::sync::Arc;

use crate::dashboards::{Role, SampleData, ViewKind};
use crate::session::store::{SessionId, SessionStore, StoreError};
use crate::session::{SessionError, SessionService, SessionServiceError};

#[test]
fn login_stores_a_session_with_the_selected_role() {
    let (service, store) = build_service();
    let record = service.login("Field TL").expect("login succeeds");

    assert_eq!(record.context.role(), Some(Role::FieldTeamLead));
    assert!(record.id.0.starts_with("session-"));

    let stored = store
        .fetch(&record.id)
        .expect("store reachable")
        .expect("record persisted");
    assert_eq!(stored, record);
}

#[test]
fn login_without_role_is_rejected_and_not_stored() {
    let (service, store) = build_service();
    let err = service.login("").expect_err("missing role");

    assert!(matches!(
        err,
        SessionServiceError::Session(SessionError::MissingRole)
    ));
    assert!(store.records.lock().expect("store mutex").is_empty());
}

#[test]
fn switch_then_reselect_changes_the_dashboard() {
    let (service, _) = build_service();
    let record = service.login("PM").expect("login succeeds");

    let view = service
        .dashboard(&record.id)
        .expect("dashboard loads")
        .expect("dashboard present");
    assert_eq!(view.kind, ViewKind::BillingReadiness);

    let cleared = service.switch_role(&record.id).expect("switch succeeds");
    assert_eq!(cleared.context.role(), None);
    assert!(service
        .dashboard(&record.id)
        .expect("dashboard loads")
        .is_none());

    let reselected = service
        .select_role(&record.id, "GM")
        .expect("role selected");
    let session = reselected.view(service.source());
    assert_eq!(session.user_email, Some("GM@company.com"));
    assert_eq!(session.display_name, Some("General Manager"));
    let view = service
        .dashboard(&record.id)
        .expect("dashboard loads")
        .expect("dashboard present");
    assert_eq!(view.kind, ViewKind::ExecutiveOverview);
}

#[test]
fn unknown_session_is_not_found() {
    let (service, _) = build_service();
    let err = service
        .get(&SessionId("session-missing".to_string()))
        .expect_err("missing session");
    assert!(matches!(err, SessionServiceError::Store(StoreError::NotFound)));
}

#[test]
fn store_failures_propagate() {
    let service = SessionService::new(Arc::new(UnavailableStore), Arc::new(SampleData));
    let err = service.login("IM").expect_err("store offline");
    assert!(matches!(
        err,
        SessionServiceError::Store(StoreError::Unavailable(_))
    ));
}

#[test]
fn session_ids_are_unique() {
    let (service, _) = build_service();
    let first = service.login("IM").expect("first login");
    let second = service.login("IM").expect("second login");
    assert_ne!(first.id, second.id);
}
