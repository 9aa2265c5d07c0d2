/*!
 * Tracking Ledger Smart Contract
 *
 * Append-only logistics history per asset. A single authority (normally the
 * logistics partner) writes checkpoints; anyone can read the trail. Entries
 * are never edited or removed.
 */

#![no_std]

mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use types::{DataKey, Error, TrackingEntry, AUTHORITY_CHANGED, STATUS_UPDATED};

const AUTHORITY_KEY: Symbol = symbol_short!("AUTHORITY"); // Only writer of the log (persistent)

#[contract]
pub struct TrackingLedgerContract;

impl TrackingLedgerContract {
    /// Checks `caller` signed the call and is the current authority.
    fn _require_authority(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let authority: Address = env
            .storage()
            .persistent()
            .get(&AUTHORITY_KEY)
            .ok_or(Error::NotInitialized)?;
        if *caller != authority {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

#[contractimpl]
impl TrackingLedgerContract {
    pub fn initialize(env: Env, authority: Address) -> Result<(), Error> {
        if env.storage().persistent().has(&AUTHORITY_KEY) {
            return Err(Error::AlreadyInitialized);
        }
        authority.require_auth();

        env.storage().persistent().set(&AUTHORITY_KEY, &authority);

        Ok(())
    }

    /// Hands the writer role to `new_authority`. The old authority loses it.
    pub fn transfer_authority(env: Env, caller: Address, new_authority: Address) -> Result<(), Error> {
        Self::_require_authority(&env, &caller)?;

        env.storage().persistent().set(&AUTHORITY_KEY, &new_authority);
        env.events().publish((AUTHORITY_CHANGED,), new_authority);

        Ok(())
    }

    /// Appends a checkpoint to the history of `asset_id`.
    ///
    /// The asset id is not checked against the asset ledger; the log is keyed
    /// by whatever id the logistics side reports.
    pub fn append(
        env: Env,
        caller: Address,
        asset_id: u64,
        location: String,
        status: String,
    ) -> Result<(), Error> {
        Self::_require_authority(&env, &caller)?;

        let key = DataKey::History(asset_id);
        let mut history: Vec<TrackingEntry> = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or(Vec::new(&env));

        let timestamp = env.ledger().timestamp();
        history.push_back(TrackingEntry {
            location: location.clone(),
            status: status.clone(),
            timestamp,
        });
        env.storage().persistent().set(&key, &history);

        env.events()
            .publish((STATUS_UPDATED, asset_id), (location, status, timestamp));

        Ok(())
    }

    /// Full history of `asset_id`, oldest first. Empty for unknown ids.
    pub fn history(env: Env, asset_id: u64) -> Vec<TrackingEntry> {
        env.storage()
            .persistent()
            .get(&DataKey::History(asset_id))
            .unwrap_or(Vec::new(&env))
    }

    pub fn get_authority(env: Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&AUTHORITY_KEY)
            .ok_or(Error::NotInitialized)
    }
}
