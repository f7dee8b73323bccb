use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::types::{AccessRequest, DataKey, UserAccount};

/// Entries are re-extended once their remaining TTL falls below this many ledgers.
pub const LEDGER_THRESHOLD: u32 = 17_280; // ~1 day
/// TTL, in ledgers, that every persistent write extends to.
pub const LEDGER_BUMP: u32 = 518_400; // ~30 days

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn has_user(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::User(user.clone()))
}

pub fn load_user(env: &Env, user: &Address) -> Result<UserAccount, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::User(user.clone()))
        .ok_or(Error::AccountNotFound)
}

pub fn save_user(env: &Env, account: &UserAccount) {
    let key = DataKey::User(account.owner.clone());
    env.storage().persistent().set(&key, account);
    bump(env, &key);
}

pub fn has_request(env: &Env, request_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::AccessRequest(request_id))
}

pub fn load_request(env: &Env, request_id: u64) -> Result<AccessRequest, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::AccessRequest(request_id))
        .ok_or(Error::AccessRequestNotFound)
}

pub fn save_request(env: &Env, request: &AccessRequest) {
    let key = DataKey::AccessRequest(request.request_id);
    env.storage().persistent().set(&key, request);
    bump(env, &key);
}

pub fn patient_requests(env: &Env, patient: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientRequests(patient.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn push_patient_request(env: &Env, patient: &Address, request_id: u64) {
    let mut ids = patient_requests(env, patient);
    ids.push_back(request_id);
    let key = DataKey::PatientRequests(patient.clone());
    env.storage().persistent().set(&key, &ids);
    bump(env, &key);
}

pub fn admin(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    bump(env, &DataKey::Admin);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().persistent().set(&DataKey::Paused, &paused);
    bump(env, &DataKey::Paused);
}
