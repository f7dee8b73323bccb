use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    AccountNotFound = 2,
    Unauthorized = 3,
    InvalidRole = 4,
    AdminAlreadySet = 5,
    AccessRequestNotFound = 6,
    DuplicateAccessRequest = 7,
    AccessAlreadyApproved = 8,
    EmptyCid = 9,
    InvalidCidLength = 10,
    InvalidCidCharset = 11,
    EmptySignature = 12,
    SignatureTooLong = 13,
    AccessListFull = 14,
    AlreadyHasWriteAccess = 15,
    WriteAccessNotFound = 16,
    SelfAccessRequest = 17,
    ContractPaused = 18,
    NoRecordStored = 19,
}
