use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

/// Participant roles in the supply chain.
///
/// Stored as a plain integer so clients can pass `1` for Farmer, `2` for Buyer
/// and so on. `Unregistered` is what unknown addresses read back as; it can
/// never be assigned.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Unregistered = 0,
    Farmer = 1,
    Buyer = 2,
    LogisticsPartner = 3,
}

/// Registration record of a single address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    pub user_address: Address,
    pub role: Role,
    pub is_registered: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    User(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The address already holds a role; roles are assigned once
    AlreadyRegistered = 1,
    /// `Unregistered` was requested as a role
    InvalidRole = 2,
}

/// Topics: (USER_REGISTERED, user). Data: role as u32
pub const USER_REGISTERED: Symbol = symbol_short!("usr_reg");
