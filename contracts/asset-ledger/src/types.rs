//! Types for the asset ledger: listing metadata, storage keys, errors, events.

use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

/// Descriptive record bound to an asset at mint time. Never modified.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetDetails {
    /// Product name, e.g. "Organic Tomatoes"
    pub name: String,

    /// Content-addressed reference (IPFS hash) of the product image or dossier
    pub content_hash: String,

    /// Ledger timestamp at which the asset was listed
    pub created_at: u64,

    /// The producer the asset was first issued to
    pub issuer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Current owner of an asset
    Owner(u64),
    /// Immutable listing record of an asset
    Details(u64),
    /// Number of assets currently held by an address
    Balance(Address),
    /// Last minted asset id
    AssetCount,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the issuer, or not the owner of the asset being moved
    Unauthorized = 3,
    /// No asset was ever minted under this id
    AssetNotFound = 4,
}

/// Topics: (ASSET_LISTED, owner). Data: (asset_id, name)
pub const ASSET_LISTED: Symbol = symbol_short!("listed");

/// Topics: (ASSET_TRANSFERRED, from, to). Data: asset_id
pub const ASSET_TRANSFERRED: Symbol = symbol_short!("transfer");
