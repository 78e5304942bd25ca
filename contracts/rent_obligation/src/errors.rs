//! Rent obligation error types.
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ObligationError {
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized yet
    NotInitialized = 2,
    /// An obligation for this agreement was already minted
    ObligationAlreadyExists = 3,
    /// No obligation exists for this agreement
    ObligationNotFound = 4,
    /// Caller is not the current owner of the obligation
    Unauthorized = 5,
    /// Agreement identifier is empty
    InvalidAgreementId = 6,
}
