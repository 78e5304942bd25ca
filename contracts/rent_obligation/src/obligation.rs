//! Mint, transfer and query handlers for the obligation registry.

use soroban_sdk::{Address, Env, String};

use crate::errors::ObligationError;
use crate::events;
use crate::storage::DataKey;
use crate::types::RentObligation;

pub fn initialize(env: &Env) -> Result<(), ObligationError> {
    if env.storage().persistent().has(&DataKey::Initialized) {
        return Err(ObligationError::AlreadyInitialized);
    }

    env.storage().persistent().set(&DataKey::Initialized, &true);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Initialized, 500000, 500000);
    env.storage().instance().extend_ttl(500000, 500000);

    Ok(())
}

/// Mints the unique obligation token for `agreement_id`, owned by
/// `landlord`.
///
/// Preconditions are checked in order: the registry must be initialized,
/// the identifier must be non-empty, no obligation may exist for the
/// agreement yet, and the landlord must have authorized the invocation.
/// Any failure aborts the whole invocation with no state change and no
/// event.
pub fn mint_obligation(
    env: &Env,
    agreement_id: String,
    landlord: Address,
) -> Result<(), ObligationError> {
    ensure_initialized(env)?;

    if agreement_id.is_empty() {
        return Err(ObligationError::InvalidAgreementId);
    }

    if env
        .storage()
        .persistent()
        .has(&DataKey::Obligation(agreement_id.clone()))
    {
        return Err(ObligationError::ObligationAlreadyExists);
    }

    landlord.require_auth();

    let minted_at = env.ledger().timestamp();
    let obligation = RentObligation {
        agreement_id: agreement_id.clone(),
        owner: landlord.clone(),
        minted_at,
    };

    write_obligation(env, &agreement_id, &obligation);

    // Counts mints only; transfers never touch this.
    let mut count: u32 = env
        .storage()
        .instance()
        .get(&DataKey::ObligationCount)
        .unwrap_or(0);
    count += 1;
    env.storage()
        .instance()
        .set(&DataKey::ObligationCount, &count);
    env.storage().instance().extend_ttl(500000, 500000);

    events::obligation_minted(env, agreement_id, landlord, minted_at);

    Ok(())
}

/// Reassigns ownership of an existing obligation from `from` to `to`.
///
/// `from` must be the stored owner and must have authorized the
/// invocation. `agreement_id` and `minted_at` are untouched; `to` is not
/// checked against any allow-list.
pub fn transfer_obligation(
    env: &Env,
    from: Address,
    to: Address,
    agreement_id: String,
) -> Result<(), ObligationError> {
    ensure_initialized(env)?;

    let mut obligation: RentObligation = env
        .storage()
        .persistent()
        .get(&DataKey::Obligation(agreement_id.clone()))
        .ok_or(ObligationError::ObligationNotFound)?;

    if obligation.owner != from {
        return Err(ObligationError::Unauthorized);
    }

    from.require_auth();

    obligation.owner = to.clone();
    write_obligation(env, &agreement_id, &obligation);

    events::obligation_transferred(env, agreement_id, from, to);

    Ok(())
}

pub fn get_obligation_owner(env: &Env, agreement_id: String) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner(agreement_id))
}

pub fn get_obligation(env: &Env, agreement_id: String) -> Option<RentObligation> {
    env.storage()
        .persistent()
        .get(&DataKey::Obligation(agreement_id))
}

pub fn has_obligation(env: &Env, agreement_id: String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Obligation(agreement_id))
}

pub fn get_obligation_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ObligationCount)
        .unwrap_or(0)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

fn ensure_initialized(env: &Env) -> Result<(), ObligationError> {
    if !env.storage().persistent().has(&DataKey::Initialized) {
        return Err(ObligationError::NotInitialized);
    }
    Ok(())
}

// Record and denormalized owner entry are written together; the retention
// window of every durable entry touched by the mutation is renewed here.
fn write_obligation(env: &Env, agreement_id: &String, obligation: &RentObligation) {
    let record_key = DataKey::Obligation(agreement_id.clone());
    let owner_key = DataKey::Owner(agreement_id.clone());

    env.storage().persistent().set(&record_key, obligation);
    env.storage().persistent().set(&owner_key, &obligation.owner);

    env.storage()
        .persistent()
        .extend_ttl(&record_key, 500000, 500000);
    env.storage()
        .persistent()
        .extend_ttl(&owner_key, 500000, 500000);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Initialized, 500000, 500000);
}
