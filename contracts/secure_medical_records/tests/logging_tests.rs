#![allow(clippy::unwrap_used)]

mod common;

use common::setup_records;
use secure_medical_records::{StructuredLog, LOG_INFO};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{symbol_short, Address, Bytes, Env, String, Symbol, TryFromVal};

/// Returns the most recent log entry for `operation` at `level`.
fn find_structured_log(env: &Env, level: Symbol, operation: &str) -> Option<StructuredLog> {
    let operation = String::from_str(env, operation);
    let mut latest = None;

    for (_, topics, data) in env.events().all().iter() {
        if topics.len() < 2 {
            continue;
        }
        let root = Symbol::try_from_val(env, &topics.get(0).unwrap());
        let event_level = Symbol::try_from_val(env, &topics.get(1).unwrap());
        if root != Ok(symbol_short!("LOG")) || event_level != Ok(level.clone()) {
            continue;
        }
        let Ok(entry) = StructuredLog::try_from_val(env, &data) else {
            continue;
        };
        if entry.operation == operation {
            latest = Some(entry);
        }
    }
    latest
}

#[test]
fn test_logging_onboarding() {
    let env = Env::default();
    env.ledger().with_mut(|l| l.timestamp = 9_000);
    let t = setup_records(&env);

    // Setup badges the doctor first and the researcher last.
    let log = find_structured_log(&env, LOG_INFO, "assign_badge")
        .expect("expected info log for assign_badge");
    assert_eq!(log.actor, Some(t.admin.clone()));
    assert_eq!(log.target_id, Some(t.researcher.clone()));
    assert_eq!(log.timestamp, 9_000);

    let other = Address::generate(&env);
    t.client.initialize(&other, &1);
    let log = find_structured_log(&env, LOG_INFO, "initialize")
        .expect("expected info log for initialize");
    assert_eq!(log.actor, Some(other));
    assert_eq!(log.target_id, None);
}

#[test]
fn test_logging_access_flow() {
    let env = Env::default();
    let t = setup_records(&env);

    t.client.request_access(&t.doctor, &t.patient, &55);
    let log = find_structured_log(&env, LOG_INFO, "request_access")
        .expect("expected info log for request_access");
    assert_eq!(log.actor, Some(t.doctor.clone()));
    assert_eq!(log.target_id, Some(t.patient.clone()));
    assert_eq!(log.request_id, Some(55));

    t.client.approve_access(&t.patient, &55);
    let log = find_structured_log(&env, LOG_INFO, "approve_access")
        .expect("expected info log for approve_access");
    assert_eq!(log.actor, Some(t.patient.clone()));
    assert_eq!(log.target_id, Some(t.doctor.clone()));
    assert_eq!(log.request_id, Some(55));
}

#[test]
fn test_logging_record_write() {
    let env = Env::default();
    let t = setup_records(&env);

    t.client.store_medical_record(
        &t.patient,
        &String::from_str(&env, "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"),
        &Bytes::from_array(&env, &[3; 64]),
    );
    let log = find_structured_log(&env, LOG_INFO, "store_medical_record")
        .expect("expected info log for store_medical_record");
    assert_eq!(log.actor, Some(t.patient.clone()));
    assert_eq!(log.request_id, None);
}

#[test]
fn test_logging_latest_entry_wins() {
    let env = Env::default();
    let t = setup_records(&env);

    t.client.grant_write_access(&t.patient, &t.doctor);
    t.client.grant_write_access(&t.patient, &t.researcher);

    let log = find_structured_log(&env, LOG_INFO, "grant_write_access")
        .expect("expected info log for grant_write_access");
    assert_eq!(log.actor, Some(t.patient.clone()));
    assert_eq!(log.target_id, Some(t.researcher.clone()));

    t.client.revoke_write_access(&t.patient, &t.researcher);
    t.client.grant_write_access(&t.patient, &t.admin);
    let log = find_structured_log(&env, LOG_INFO, "grant_write_access")
        .expect("expected info log for grant_write_access");
    assert_eq!(log.target_id, Some(t.admin.clone()));
}
