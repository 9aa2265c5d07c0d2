/*!
 * Identity Registry Smart Contract
 *
 * Assigns each participant address exactly one supply-chain role. The role is
 * chosen by the participant, signed by that participant, and can never be
 * changed afterwards.
 */

#![no_std]

mod types;


use soroban_sdk::{contract, contractimpl, Address, Env};

pub use types::{DataKey, Error, Role, UserProfile, USER_REGISTERED};

#[contract]
pub struct IdentityRegistryContract;

#[contractimpl]
impl IdentityRegistryContract {
    /// Registers `user` under `role`.
    ///
    /// # Errors
    /// - InvalidRole: `role` is `Unregistered`
    /// - AlreadyRegistered: `user` already has a role
    pub fn register(env: Env, user: Address, role: Role) -> Result<(), Error> {
        user.require_auth();

        if role == Role::Unregistered {
            return Err(Error::InvalidRole);
        }

        let key = DataKey::User(user.clone());
        if env.storage().persistent().has(&key) {
            return Err(Error::AlreadyRegistered);
        }

        let profile = UserProfile {
            user_address: user.clone(),
            role,
            is_registered: true,
        };
        env.storage().persistent().set(&key, &profile);

        env.events()
            .publish((USER_REGISTERED, user), role as u32);

        Ok(())
    }

    pub fn role_of(env: Env, user: Address) -> Role {
        Self::get_user(env, user)
            .map(|profile| profile.role)
            .unwrap_or(Role::Unregistered)
    }

    pub fn get_user(env: Env, user: Address) -> Option<UserProfile> {
        env.storage().persistent().get(&DataKey::User(user))
    }

    pub fn is_registered(env: Env, user: Address) -> bool {
        env.storage().persistent().has(&DataKey::User(user))
    }
}
