#![no_std]

mod errors;
mod events;
mod storage;
mod types;
pub mod validation;


use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Bytes, Env, String, Vec};

pub use errors::Error;
pub use events::{StructuredLog, LOG_INFO, LOG_WARN};
pub use types::{AccessRequest, DataKey, MedicalRecordView, Role, UserAccount};

contractmeta!(
    key = "Description",
    val = "Patient-owned medical record pointers with badge roles and write-access lists"
);

#[contract]
pub struct SecureMedicalRecords;

#[contractimpl]
impl SecureMedicalRecords {
    /// Creates the caller's account with the given badge.
    ///
    /// The first account that declares `Admin` becomes the contract admin;
    /// later attempts to self-declare `Admin` fail with `AdminAlreadySet`.
    /// Deployers must claim the admin seat in the same transaction as the
    /// deploy (or before announcing the contract address); until then any
    /// caller can take it.
    pub fn initialize(env: Env, user: Address, role: u32) -> Result<(), Error> {
        user.require_auth();
        Self::ensure_active(&env)?;

        let role = Role::from_u32(role)?;
        if storage::has_user(&env, &user) {
            return Err(Error::AlreadyInitialized);
        }
        if role == Role::Admin {
            if storage::admin(&env).is_some() {
                return Err(Error::AdminAlreadySet);
            }
            storage::set_admin(&env, &user);
        }

        let now = env.ledger().timestamp();
        let account = UserAccount {
            owner: user.clone(),
            role,
            medical_record_cid: String::from_str(&env, ""),
            signature: Bytes::new(&env),
            write_access_list: Vec::new(&env),
            created_at: now,
            updated_at: now,
        };
        storage::save_user(&env, &account);

        log!(&env, "Greetings from", env.current_contract_address());
        events::emit_initialized(&env, &user, role);
        events::log_info(&env, "initialize", &user, None, None);
        Ok(())
    }

    /// Admin-only badge change for an existing account.
    pub fn assign_badge(env: Env, caller: Address, user: Address, role: u32) -> Result<(), Error> {
        caller.require_auth();
        Self::ensure_active(&env)?;
        Self::require_admin(&env, &caller, "assign_badge")?;

        let role = Role::from_u32(role)?;
        if role == Role::Admin || user == caller {
            return Err(Error::InvalidRole);
        }

        let mut account = storage::load_user(&env, &user)?;
        let previous = account.role;
        account.role = role;
        account.updated_at = env.ledger().timestamp();
        storage::save_user(&env, &account);

        events::emit_badge_assigned(&env, &caller, &user, previous, role);
        events::log_info(&env, "assign_badge", &caller, Some(user), None);
        Ok(())
    }

    pub fn request_access(
        env: Env,
        requester: Address,
        patient: Address,
        request_id: u64,
    ) -> Result<(), Error> {
        requester.require_auth();
        Self::ensure_active(&env)?;

        if requester == patient {
            return Err(Error::SelfAccessRequest);
        }
        storage::load_user(&env, &requester)?;
        storage::load_user(&env, &patient)?;
        if storage::has_request(&env, request_id) {
            return Err(Error::DuplicateAccessRequest);
        }

        let request = AccessRequest {
            request_id,
            requester: requester.clone(),
            patient: patient.clone(),
            approved: false,
            requested_at: env.ledger().timestamp(),
            approved_at: None,
        };
        storage::save_request(&env, &request);
        storage::push_patient_request(&env, &patient, request_id);

        events::emit_access_requested(&env, &requester, &patient, request_id);
        events::log_info(&env, "request_access", &requester, Some(patient), Some(request_id));
        Ok(())
    }

    /// Only the patient named on the request can approve it.
    pub fn approve_access(env: Env, patient: Address, request_id: u64) -> Result<(), Error> {
        patient.require_auth();
        Self::ensure_active(&env)?;

        let mut request = storage::load_request(&env, request_id)?;
        if request.patient != patient {
            events::log_warn(&env, "approve_access", &patient, Some(request.patient));
            return Err(Error::Unauthorized);
        }
        if request.approved {
            return Err(Error::AccessAlreadyApproved);
        }

        request.approved = true;
        request.approved_at = Some(env.ledger().timestamp());
        storage::save_request(&env, &request);

        events::emit_access_approved(&env, &patient, &request.requester, request_id);
        events::log_info(
            &env,
            "approve_access",
            &patient,
            Some(request.requester),
            Some(request_id),
        );
        Ok(())
    }

    pub fn store_medical_record(
        env: Env,
        owner: Address,
        ipfs_cid: String,
        signature: Bytes,
    ) -> Result<(), Error> {
        owner.require_auth();
        Self::ensure_active(&env)?;
        validation::validate_cid(&ipfs_cid)?;
        validation::validate_signature(&signature)?;

        let mut account = storage::load_user(&env, &owner)?;
        account.medical_record_cid = ipfs_cid;
        account.signature = signature;
        account.updated_at = env.ledger().timestamp();
        storage::save_user(&env, &account);

        events::emit_record_stored(&env, &owner, &account.medical_record_cid);
        events::log_info(&env, "store_medical_record", &owner, None, None);
        Ok(())
    }

    pub fn grant_write_access(env: Env, owner: Address, grantee: Address) -> Result<(), Error> {
        owner.require_auth();
        Self::ensure_active(&env)?;

        let mut account = storage::load_user(&env, &owner)?;
        validation::ensure_acl_capacity(&account.write_access_list, &grantee)?;
        account.write_access_list.push_back(grantee.clone());
        account.updated_at = env.ledger().timestamp();
        storage::save_user(&env, &account);

        events::emit_write_granted(&env, &owner, &grantee);
        events::log_info(&env, "grant_write_access", &owner, Some(grantee), None);
        Ok(())
    }

    pub fn revoke_write_access(env: Env, owner: Address, grantee: Address) -> Result<(), Error> {
        owner.require_auth();
        Self::ensure_active(&env)?;

        let mut account = storage::load_user(&env, &owner)?;
        let index = account
            .write_access_list
            .first_index_of(&grantee)
            .ok_or(Error::WriteAccessNotFound)?;
        account.write_access_list.remove(index);
        account.updated_at = env.ledger().timestamp();
        storage::save_user(&env, &account);

        events::emit_write_revoked(&env, &owner, &grantee);
        events::log_info(&env, "revoke_write_access", &owner, Some(grantee), None);
        Ok(())
    }

    /// Replaces the record pointer on `owner`'s account. The signer must be on
    /// the owner's write-access list; the owner is not listed implicitly.
    pub fn update_medical_record(
        env: Env,
        signer: Address,
        owner: Address,
        new_ipfs_cid: String,
    ) -> Result<(), Error> {
        signer.require_auth();
        Self::ensure_active(&env)?;

        let mut account = storage::load_user(&env, &owner)?;
        if !account.write_access_list.contains(&signer) {
            events::log_warn(&env, "update_medical_record", &signer, Some(owner));
            return Err(Error::Unauthorized);
        }
        validation::validate_cid(&new_ipfs_cid)?;

        account.medical_record_cid = new_ipfs_cid;
        account.updated_at = env.ledger().timestamp();
        storage::save_user(&env, &account);

        events::emit_record_updated(&env, &owner, &signer, &account.medical_record_cid);
        events::log_info(&env, "update_medical_record", &signer, Some(owner), None);
        Ok(())
    }

    pub fn get_signature(env: Env, requester: Address, owner: Address) -> Result<Bytes, Error> {
        requester.require_auth();

        let account = storage::load_user(&env, &owner)?;
        if !account.write_access_list.contains(&requester) {
            events::log_warn(&env, "get_signature", &requester, Some(owner));
            return Err(Error::Unauthorized);
        }
        Ok(account.signature)
    }

    /// Readable by the patient, anyone on their write-access list, and
    /// requesters holding an approved access request.
    pub fn get_medical_record(
        env: Env,
        requester: Address,
        patient: Address,
    ) -> Result<MedicalRecordView, Error> {
        requester.require_auth();

        let account = storage::load_user(&env, &patient)?;
        let allowed = requester == patient
            || account.write_access_list.contains(&requester)
            || Self::has_approved_request(&env, &requester, &patient);
        if !allowed {
            events::log_warn(&env, "get_medical_record", &requester, Some(patient));
            return Err(Error::Unauthorized);
        }
        if account.medical_record_cid.is_empty() {
            return Err(Error::NoRecordStored);
        }

        Ok(MedicalRecordView {
            owner: account.owner,
            medical_record_cid: account.medical_record_cid,
            updated_at: account.updated_at,
        })
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller, "pause")?;
        storage::set_paused(&env, true);
        events::emit_contract_paused(&env, &caller);
        events::log_info(&env, "pause", &caller, None, None);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller, "unpause")?;
        storage::set_paused(&env, false);
        events::emit_contract_unpaused(&env, &caller);
        events::log_info(&env, "unpause", &caller, None, None);
        Ok(())
    }

    // ==================== Views ====================

    pub fn get_user(env: Env, user: Address) -> Result<UserAccount, Error> {
        storage::load_user(&env, &user)
    }

    pub fn get_access_request(env: Env, request_id: u64) -> Result<AccessRequest, Error> {
        storage::load_request(&env, request_id)
    }

    pub fn get_patient_requests(env: Env, patient: Address) -> Vec<u64> {
        storage::patient_requests(&env, &patient)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        storage::admin(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ==================== Internal ====================

    fn ensure_active(env: &Env) -> Result<(), Error> {
        if storage::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address, operation: &str) -> Result<(), Error> {
        match storage::admin(env) {
            Some(admin) if admin == *caller => Ok(()),
            _ => {
                events::log_warn(env, operation, caller, None);
                Err(Error::Unauthorized)
            }
        }
    }

    fn has_approved_request(env: &Env, requester: &Address, patient: &Address) -> bool {
        storage::patient_requests(env, patient).iter().any(|id| {
            storage::load_request(env, id)
                .map(|r| r.approved && r.requester == *requester)
                .unwrap_or(false)
        })
    }
}
