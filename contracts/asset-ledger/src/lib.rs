/*!
 * Asset Ledger Smart Contract
 *
 * Lists physical goods as uniquely numbered, non-fungible assets. A single
 * issuer mints assets on behalf of producers; each asset carries an owner and
 * an immutable descriptive record. Owners can hand assets on with `transfer`.
 *
 * Other contracts read ownership through `owner_of`.
 */

#![no_std]

mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

pub use types::{AssetDetails, DataKey, Error, ASSET_LISTED, ASSET_TRANSFERRED};

const ISSUER_KEY: Symbol = symbol_short!("ISSUER"); // Minting authority (persistent)

#[contract]
pub struct AssetLedgerContract;

impl AssetLedgerContract {
    fn _issuer(env: &Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&ISSUER_KEY)
            .ok_or(Error::NotInitialized)
    }

    fn _balance(env: &Env, owner: &Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(0)
    }

    fn _set_balance(env: &Env, owner: &Address, balance: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(owner.clone()), &balance);
    }
}

#[contractimpl]
impl AssetLedgerContract {
    /// Sets the address allowed to mint. Can only be called once.
    pub fn initialize(env: Env, issuer: Address) -> Result<(), Error> {
        if env.storage().persistent().has(&ISSUER_KEY) {
            return Err(Error::AlreadyInitialized);
        }
        issuer.require_auth();

        env.storage().persistent().set(&ISSUER_KEY, &issuer);
        env.storage().instance().set(&DataKey::AssetCount, &0u64);

        Ok(())
    }

    /// Lists a new product for `owner` and returns its id (the first is 1).
    ///
    /// # Errors
    /// - NotInitialized: no issuer configured yet
    /// - Unauthorized: `issuer` is not the configured issuer
    pub fn mint(
        env: Env,
        issuer: Address,
        owner: Address,
        name: String,
        content_hash: String,
    ) -> Result<u64, Error> {
        issuer.require_auth();
        if issuer != Self::_issuer(&env)? {
            return Err(Error::Unauthorized);
        }

        let count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::AssetCount)
            .unwrap_or(0);
        let asset_id = count + 1;

        let details = AssetDetails {
            name: name.clone(),
            content_hash,
            created_at: env.ledger().timestamp(),
            issuer: owner.clone(),
        };

        env.storage()
            .persistent()
            .set(&DataKey::Owner(asset_id), &owner);
        env.storage()
            .persistent()
            .set(&DataKey::Details(asset_id), &details);
        Self::_set_balance(&env, &owner, Self::_balance(&env, &owner) + 1);
        env.storage().instance().set(&DataKey::AssetCount, &asset_id);

        env.events().publish((ASSET_LISTED, owner), (asset_id, name));

        Ok(asset_id)
    }

    /// Moves `asset_id` from its current owner `from` to `to`.
    pub fn transfer(env: Env, from: Address, to: Address, asset_id: u64) -> Result<(), Error> {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), asset_id)?;
        if owner != from {
            return Err(Error::Unauthorized);
        }

        Self::_set_balance(&env, &from, Self::_balance(&env, &from) - 1);
        Self::_set_balance(&env, &to, Self::_balance(&env, &to) + 1);
        env.storage().persistent().set(&DataKey::Owner(asset_id), &to);

        env.events()
            .publish((ASSET_TRANSFERRED, from, to), asset_id);

        Ok(())
    }

    pub fn owner_of(env: Env, asset_id: u64) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(asset_id))
            .ok_or(Error::AssetNotFound)
    }

    pub fn asset_details(env: Env, asset_id: u64) -> Result<AssetDetails, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Details(asset_id))
            .ok_or(Error::AssetNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        Self::_balance(&env, &owner)
    }

    /// Number of assets minted so far, which is also the latest id.
    pub fn total_supply(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::AssetCount)
            .unwrap_or(0)
    }

    pub fn get_issuer(env: Env) -> Result<Address, Error> {
        Self::_issuer(&env)
    }
}
