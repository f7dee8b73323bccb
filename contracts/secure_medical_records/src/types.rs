use soroban_sdk::{contracttype, Address, Bytes, String, Vec};

use crate::errors::Error;

/// Badge carried by every account. Stored as a plain integer on the ledger.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    None = 0,
    Patient = 1,
    Doctor = 2,
    Researcher = 3,
    Admin = 4,
}

impl Role {
    pub fn from_u32(value: u32) -> Result<Role, Error> {
        match value {
            0 => Ok(Role::None),
            1 => Ok(Role::Patient),
            2 => Ok(Role::Doctor),
            3 => Ok(Role::Researcher),
            4 => Ok(Role::Admin),
            _ => Err(Error::InvalidRole),
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserAccount {
    pub owner: Address,
    pub role: Role,
    /// IPFS CID of the encrypted record payload; empty until first store.
    pub medical_record_cid: String,
    pub signature: Bytes,
    pub write_access_list: Vec<Address>,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRequest {
    pub request_id: u64,
    pub requester: Address,
    pub patient: Address,
    pub approved: bool,
    pub requested_at: u64,
    pub approved_at: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecordView {
    pub owner: Address,
    pub medical_record_cid: String,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Paused,
    User(Address),
    AccessRequest(u64),
    PatientRequests(Address), // request ids addressed to a patient
}
