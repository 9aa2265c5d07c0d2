/*!
 * Type Definitions for the Agreement Engine
 *
 * Data structures, storage keys, errors and event topics shared by the
 * escrow entry points, the storage helpers and the authorization policy.
 */

use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

// ================================================================================================
// CORE DATA STRUCTURES
// ================================================================================================

/// A binding purchase agreement between one buyer and one seller.
///
/// The agreement is created when a buyer escrows the full price for an asset
/// listed in the asset ledger. The seller is the asset's owner at that moment
/// and stays fixed for the lifetime of the agreement, even if the asset is
/// transferred afterwards.
///
/// # Lifecycle
/// 1. Created: price is held by the engine
/// 2. DeliveryConfirmed: buyer acknowledged receipt of the goods
/// 3. Closed: price released to the seller, record becomes immutable
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Agreement {
    /// Asset ledger identifier of the goods being purchased
    pub asset_id: u64,

    /// The address that opened the agreement and funded the escrow.
    /// Only this address may confirm delivery.
    pub buyer: Address,

    /// Owner of the asset when the agreement was created.
    /// Only this address may settle, and it is the sole payee.
    pub seller: Address,

    /// Escrowed amount in base units of the payment token
    pub price: i128,

    pub state: AgreementState,

    /// Ledger timestamp of creation (seconds since epoch)
    pub created_at: u64,
}

// ================================================================================================
// ENUMERATIONS
// ================================================================================================

/// Position of an agreement in its lifecycle.
///
/// # State Transition Rules
/// - Created → DeliveryConfirmed (buyer confirms receipt)
/// - DeliveryConfirmed → Closed (seller settles)
///
/// There is no way back and no way to skip a stage. Closed is final.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AgreementState {
    Created = 0,
    DeliveryConfirmed = 1,
    Closed = 2,
}

impl AgreementState {
    /// The only state reachable from `self`, or `None` once closed.
    pub fn advance(self) -> Option<AgreementState> {
        match self {
            AgreementState::Created => Some(AgreementState::DeliveryConfirmed),
            AgreementState::DeliveryConfirmed => Some(AgreementState::Closed),
            AgreementState::Closed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == AgreementState::Closed
    }
}

/// Keys for per-agreement records and the id counter.
///
/// Each agreement lives in its own persistent entry so that no operation ever
/// loads or rewrites another agreement's record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Agreement record by id
    Agreement(u64),
    /// Last issued agreement id (0 before the first agreement)
    AgreementCount,
}

// ================================================================================================
// ERROR DEFINITIONS
// ================================================================================================

/// Errors returned by the engine's entry points.
///
/// # Error Code Ranges
/// - 1-2: Configuration
/// - 3-4: Validation of caller input
/// - 5: Authorization
/// - 6-7: Agreement lookup and state
/// - 8: Asset resolution
/// - 9: Value transfer
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` has not been called yet
    NotInitialized = 1,

    /// `initialize` was already called once
    AlreadyInitialized = 2,

    /// The transferred value differs from the declared price
    PriceMismatch = 3,

    /// The declared price is zero or negative
    InvalidAmount = 4,

    /// Caller is not the party allowed to drive this transition
    Unauthorized = 5,

    /// No agreement exists under the requested id
    AgreementNotFound = 6,

    /// The operation is not valid in the agreement's current state
    InvalidAgreementState = 7,

    /// The asset ledger could not resolve an owner for the asset id
    AssetNotFound = 8,

    /// The payment token refused the transfer
    TransferFailed = 9,
}

/// Coarse classification of [`Error`] values.
///
/// Not used by the contract itself. Off-chain clients and indexers that link
/// this crate map a failed call's error code to a category with
/// [`Error::category`] to decide whether a retry can help (only `Transfer`
/// failures are worth retrying unchanged).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Authorization,
    State,
    Resolution,
    Transfer,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotInitialized | Error::AlreadyInitialized => ErrorCategory::Configuration,
            Error::PriceMismatch | Error::InvalidAmount => ErrorCategory::Validation,
            Error::Unauthorized => ErrorCategory::Authorization,
            Error::AgreementNotFound | Error::InvalidAgreementState => ErrorCategory::State,
            Error::AssetNotFound => ErrorCategory::Resolution,
            Error::TransferFailed => ErrorCategory::Transfer,
        }
    }
}

// ================================================================================================
// EVENT CONSTANTS
// ================================================================================================

/// Event emitted when a buyer opens and funds an agreement
/// Topics: (AGREEMENT_CREATED, buyer)
/// Data: (agreement_id, asset_id, buyer, seller, price)
pub const AGREEMENT_CREATED: Symbol = symbol_short!("agr_crt");

/// Event emitted when the buyer confirms receipt
/// Topics: (DELIVERY_CONFIRMED, buyer)
/// Data: (agreement_id,)
pub const DELIVERY_CONFIRMED: Symbol = symbol_short!("dlv_conf");

/// Event emitted when the seller withdraws the escrow and the agreement closes
/// Topics: (PAYMENT_SETTLED, seller)
/// Data: (agreement_id, seller, price)
pub const PAYMENT_SETTLED: Symbol = symbol_short!("pay_setl");
