//! Read-only view of the asset ledger.
//!
//! The engine only ever needs to know who owns an asset when an agreement is
//! opened. The generated `AssetOwnershipClient` carries that single call and
//! nothing that could mutate the ledger.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::Error;

#[allow(dead_code)]
#[contractclient(name = "AssetOwnershipClient")]
pub trait AssetOwnership {
    fn owner_of(env: Env, asset_id: u64) -> Address;
}

/// Resolves the current owner of `asset_id` through the ledger at `ledger`.
///
/// Any failure of the cross-contract call (unminted asset, a ledger that does
/// not implement `owner_of`, a malformed reply) is reported as `AssetNotFound`.
pub fn resolve_owner(env: &Env, ledger: &Address, asset_id: u64) -> Result<Address, Error> {
    let client = AssetOwnershipClient::new(env, ledger);
    match client.try_owner_of(&asset_id) {
        Ok(Ok(owner)) => Ok(owner),
        _ => Err(Error::AssetNotFound),
    }
}
