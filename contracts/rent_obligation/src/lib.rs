#![no_std]

//! Tokenized Rent Obligation Contract
//!
//! Mints a single ownership token per rent agreement and lets that
//! ownership be transferred by its current holder. The off-chain rental
//! backend mints after an agreement is activated, queries the current
//! owner to route rent payments, and transfers when the underlying
//! property changes hands.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod obligation;
mod storage;
mod types;


// Re-export public APIs
pub use errors::ObligationError;
pub use events::{ObligationMinted, ObligationTransferred};
pub use storage::DataKey;
pub use types::RentObligation;

#[contract]
pub struct TokenizedRentObligationContract;

#[contractimpl]
impl TokenizedRentObligationContract {
    /// Initializes the registry. Can only be called once; every mutating
    /// operation requires it to have run.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the registry is already initialized
    pub fn initialize(env: Env) -> Result<(), ObligationError> {
        obligation::initialize(&env)
    }

    /// Mints the unique obligation token for a rent agreement.
    ///
    /// Authorization:
    /// - Landlord MUST authorize the mint (the token starts in their hands)
    ///
    /// # Arguments
    /// * `agreement_id` - Unique identifier assigned by the rental backend
    /// * `landlord` - Address that becomes the initial owner
    ///
    /// # Errors
    /// * `NotInitialized` - If the registry hasn't been initialized
    /// * `InvalidAgreementId` - If the identifier is empty
    /// * `ObligationAlreadyExists` - If an obligation was already minted
    ///   for this agreement
    pub fn mint_obligation(
        env: Env,
        agreement_id: String,
        landlord: Address,
    ) -> Result<(), ObligationError> {
        obligation::mint_obligation(&env, agreement_id, landlord)
    }

    /// Transfers ownership of an existing obligation.
    ///
    /// Authorization:
    /// - `from` MUST be the current owner and MUST authorize the transfer
    ///
    /// # Arguments
    /// * `from` - Current owner giving up the obligation
    /// * `to` - Address receiving ownership; any valid address is accepted
    /// * `agreement_id` - Identifier of the obligation's agreement
    ///
    /// # Errors
    /// * `NotInitialized` - If the registry hasn't been initialized
    /// * `ObligationNotFound` - If no obligation exists for the agreement
    /// * `Unauthorized` - If `from` is not the current owner
    pub fn transfer_obligation(
        env: Env,
        from: Address,
        to: Address,
        agreement_id: String,
    ) -> Result<(), ObligationError> {
        obligation::transfer_obligation(&env, from, to, agreement_id)
    }

    /// Returns the current owner of an obligation, or None if no
    /// obligation exists for the agreement. This is the payment-routing
    /// lookup and reads the denormalized owner entry directly.
    pub fn get_obligation_owner(env: Env, agreement_id: String) -> Option<Address> {
        obligation::get_obligation_owner(&env, agreement_id)
    }

    /// Retrieves the full obligation record for an agreement.
    pub fn get_obligation(env: Env, agreement_id: String) -> Option<RentObligation> {
        obligation::get_obligation(&env, agreement_id)
    }

    /// Checks whether an obligation exists for the given agreement.
    pub fn has_obligation(env: Env, agreement_id: String) -> bool {
        obligation::has_obligation(&env, agreement_id)
    }

    /// Returns the total number of obligations minted. Transfers do not
    /// affect this count.
    pub fn get_obligation_count(env: Env) -> u32 {
        obligation::get_obligation_count(&env)
    }

    /// Checks whether the registry has been initialized.
    pub fn is_initialized(env: Env) -> bool {
        obligation::is_initialized(&env)
    }
}
