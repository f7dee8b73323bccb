//! Input validation for record pointers, signatures and access lists.
//!
//! Everything here is checked before state is touched, so a rejected call
//! leaves the account exactly as it was.

use soroban_sdk::{Address, Bytes, String, Vec};

use crate::errors::Error;

/// Maximum length of an IPFS CID (or `ipfs://` URI) stored on an account.
pub const MAX_CID_LEN: u32 = 128;
/// Maximum signature size in bytes. Covers ed25519 and DER-encoded ECDSA.
pub const MAX_SIGNATURE_LEN: u32 = 128;
/// Maximum number of addresses on a write-access list.
pub const MAX_WRITE_ACCESS: u32 = 10;

fn is_cid_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b':' | b'/' | b'.' | b'_' | b'-')
}

/// Validates a record pointer: non-empty, bounded, and restricted to the
/// characters that appear in CIDs and `ipfs://` URIs.
pub fn validate_cid(cid: &String) -> Result<(), Error> {
    let len = cid.len();
    if len == 0 {
        return Err(Error::EmptyCid);
    }
    if len > MAX_CID_LEN {
        return Err(Error::InvalidCidLength);
    }

    let mut buf = [0u8; MAX_CID_LEN as usize];
    let bytes = &mut buf[..len as usize];
    cid.copy_into_slice(bytes);
    if !bytes.iter().all(|b| is_cid_byte(*b)) {
        return Err(Error::InvalidCidCharset);
    }
    Ok(())
}

pub fn validate_signature(signature: &Bytes) -> Result<(), Error> {
    if signature.is_empty() {
        return Err(Error::EmptySignature);
    }
    if signature.len() > MAX_SIGNATURE_LEN {
        return Err(Error::SignatureTooLong);
    }
    Ok(())
}

/// Checks that `grantee` can be appended to `acl`.
pub fn ensure_acl_capacity(acl: &Vec<Address>, grantee: &Address) -> Result<(), Error> {
    if acl.contains(grantee) {
        return Err(Error::AlreadyHasWriteAccess);
    }
    if acl.len() >= MAX_WRITE_ACCESS {
        return Err(Error::AccessListFull);
    }
    Ok(())
}
