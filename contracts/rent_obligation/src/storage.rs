//! Storage key definitions for the rent obligation registry.
use soroban_sdk::{contracttype, String};

/// Storage key variants for the registry state.
///
/// `Obligation` and `Owner` are written together in the same invocation
/// and must never diverge; `Owner` exists so payment routing can read a
/// bare address without decoding the full record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// One-time initialization flag
    Initialized,
    /// Full obligation record by agreement ID
    Obligation(String),
    /// Current owner by agreement ID
    Owner(String),
    /// Counter for total obligations minted
    ObligationCount,
}
