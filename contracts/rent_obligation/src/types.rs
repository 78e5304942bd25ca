//! Core data types for the rent obligation registry.
use soroban_sdk::{contracttype, Address, String};

/// Ownership record for a tokenized rent obligation.
///
/// Exactly one record is minted per rent agreement. `agreement_id` and
/// `minted_at` are fixed at mint time; only `owner` changes, and only
/// through an authorized transfer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentObligation {
    /// Identifier of the rent agreement, assigned by the rental backend
    pub agreement_id: String,
    /// Current holder of the right to receive rent income
    pub owner: Address,
    /// Ledger timestamp captured when the obligation was minted
    pub minted_at: u64,
}
