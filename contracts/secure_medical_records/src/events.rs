use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::types::Role;

// ==================== Structured Logs ====================

pub const LOG_INFO: Symbol = symbol_short!("LOG_INFO");
pub const LOG_WARN: Symbol = symbol_short!("LOG_WARN");

const LOG: Symbol = symbol_short!("LOG");
const TOPIC: Symbol = symbol_short!("SMR");

/// Operational log entry published under `("LOG", level)`. Indexers pick
/// these up alongside the domain events below.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StructuredLog {
    pub operation: String,
    pub actor: Option<Address>,
    pub target_id: Option<Address>,
    pub request_id: Option<u64>,
    pub timestamp: u64,
}

fn log(
    env: &Env,
    level: Symbol,
    operation: &str,
    actor: Option<Address>,
    target_id: Option<Address>,
    request_id: Option<u64>,
) {
    let entry = StructuredLog {
        operation: String::from_str(env, operation),
        actor,
        target_id,
        request_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((LOG, level), entry);
}

pub fn log_info(
    env: &Env,
    operation: &str,
    actor: &Address,
    target_id: Option<Address>,
    request_id: Option<u64>,
) {
    log(env, LOG_INFO, operation, Some(actor.clone()), target_id, request_id);
}

/// Recorded for denied attempts. Only survives when the caller tolerates the
/// failure (simulation, or a host that keeps diagnostic events).
pub fn log_warn(env: &Env, operation: &str, actor: &Address, target_id: Option<Address>) {
    log(env, LOG_WARN, operation, Some(actor.clone()), target_id, None);
}

// ==================== Domain Events ====================

pub fn emit_initialized(env: &Env, user: &Address, role: Role) {
    env.events()
        .publish((TOPIC, symbol_short!("INIT")), (user.clone(), role.as_u32()));
}

pub fn emit_badge_assigned(env: &Env, admin: &Address, user: &Address, previous: Role, role: Role) {
    env.events().publish(
        (TOPIC, symbol_short!("BADGE")),
        (admin.clone(), user.clone(), previous.as_u32(), role.as_u32()),
    );
}

pub fn emit_access_requested(env: &Env, requester: &Address, patient: &Address, request_id: u64) {
    env.events().publish(
        (TOPIC, symbol_short!("ACC_REQ"), patient.clone()),
        (requester.clone(), request_id),
    );
}

pub fn emit_access_approved(env: &Env, patient: &Address, requester: &Address, request_id: u64) {
    env.events().publish(
        (TOPIC, symbol_short!("ACC_OK"), patient.clone()),
        (requester.clone(), request_id),
    );
}

pub fn emit_record_stored(env: &Env, owner: &Address, cid: &String) {
    env.events()
        .publish((TOPIC, symbol_short!("REC_SET"), owner.clone()), cid.clone());
}

pub fn emit_record_updated(env: &Env, owner: &Address, writer: &Address, cid: &String) {
    env.events().publish(
        (TOPIC, symbol_short!("REC_UPD"), owner.clone()),
        (writer.clone(), cid.clone()),
    );
}

pub fn emit_write_granted(env: &Env, owner: &Address, grantee: &Address) {
    env.events().publish(
        (TOPIC, symbol_short!("WR_GRANT"), owner.clone()),
        grantee.clone(),
    );
}

pub fn emit_write_revoked(env: &Env, owner: &Address, grantee: &Address) {
    env.events().publish(
        (TOPIC, symbol_short!("WR_REVOKE"), owner.clone()),
        grantee.clone(),
    );
}

pub fn emit_contract_paused(env: &Env, admin: &Address) {
    env.events()
        .publish((TOPIC, symbol_short!("PAUSED")), admin.clone());
}

pub fn emit_contract_unpaused(env: &Env, admin: &Address) {
    env.events()
        .publish((TOPIC, symbol_short!("UNPAUSED")), admin.clone());
}
