//! Contract events for the rent obligation registry.
//!
//! Events are the outbound channel to the off-chain indexer and payment
//! router. Publishing never blocks the invocation; delivery is the host's
//! concern.
use soroban_sdk::{contractevent, Address, Env, String};

/// Emitted when an obligation token is minted for an agreement.
/// Topics: ["minted", landlord]
#[contractevent(topics = ["minted"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObligationMinted {
    #[topic]
    pub landlord: Address,
    pub agreement_id: String,
    pub minted_at: u64,
}

/// Emitted when ownership of an obligation changes hands.
/// Topics: ["transferred", from, to]
#[contractevent(topics = ["transferred"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObligationTransferred {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub agreement_id: String,
}

pub(crate) fn obligation_minted(
    env: &Env,
    agreement_id: String,
    landlord: Address,
    minted_at: u64,
) {
    ObligationMinted {
        landlord,
        agreement_id,
        minted_at,
    }
    .publish(env);
}

pub(crate) fn obligation_transferred(env: &Env, agreement_id: String, from: Address, to: Address) {
    ObligationTransferred {
        from,
        to,
        agreement_id,
    }
    .publish(env);
}
