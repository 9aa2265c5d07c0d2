use soroban_sdk::{contracterror, contracttype, symbol_short, String, Symbol};

/// One logistics checkpoint for an asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrackingEntry {
    pub location: String,
    pub status: String,
    /// Ledger timestamp at which the entry was recorded
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Ordered history of an asset
    History(u64),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the tracking authority
    Unauthorized = 3,
}

/// Topics: (STATUS_UPDATED, asset_id). Data: (location, status, timestamp)
pub const STATUS_UPDATED: Symbol = symbol_short!("stat_upd");

/// Topics: (AUTHORITY_CHANGED,). Data: new authority
pub const AUTHORITY_CHANGED: Symbol = symbol_short!("auth_chg");
