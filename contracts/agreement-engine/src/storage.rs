//! Storage layout of the engine.
//!
//! Configuration is written once by `initialize` under short symbol keys.
//! Agreements are persistent entries keyed by id; the id counter lives in
//! instance storage next to the contract.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{Agreement, DataKey, Error};

const ADMIN_KEY: Symbol = symbol_short!("ADMIN"); // Engine owner (persistent)
const ASSET_LEDGER_KEY: Symbol = symbol_short!("AST_LDGR"); // Asset ledger contract (persistent)
const PAYMENT_TOKEN_KEY: Symbol = symbol_short!("PAY_TKN"); // Escrow token contract (persistent)

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&ADMIN_KEY)
}

pub fn write_config(env: &Env, admin: &Address, asset_ledger: &Address, payment_token: &Address) {
    env.storage().persistent().set(&ADMIN_KEY, admin);
    env.storage().persistent().set(&ASSET_LEDGER_KEY, asset_ledger);
    env.storage().persistent().set(&PAYMENT_TOKEN_KEY, payment_token);
    env.storage().instance().set(&DataKey::AgreementCount, &0u64);
}

pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&ADMIN_KEY)
        .ok_or(Error::NotInitialized)
}

pub fn asset_ledger(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&ASSET_LEDGER_KEY)
        .ok_or(Error::NotInitialized)
}

pub fn payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&PAYMENT_TOKEN_KEY)
        .ok_or(Error::NotInitialized)
}

pub fn agreement_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::AgreementCount)
        .unwrap_or(0)
}

/// Hands out the next agreement id. Ids start at 1 and are never reused.
pub fn next_agreement_id(env: &Env) -> u64 {
    let id = agreement_count(env) + 1;
    env.storage().instance().set(&DataKey::AgreementCount, &id);
    id
}

pub fn load_agreement(env: &Env, agreement_id: u64) -> Result<Agreement, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Agreement(agreement_id))
        .ok_or(Error::AgreementNotFound)
}

pub fn save_agreement(env: &Env, agreement_id: u64, agreement: &Agreement) {
    env.storage()
        .persistent()
        .set(&DataKey::Agreement(agreement_id), agreement);
}
