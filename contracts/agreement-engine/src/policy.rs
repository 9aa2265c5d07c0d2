//! Authorization policy for agreement transitions.
//!
//! Every state-changing operation on an existing agreement is checked here
//! before any storage is touched. The check is a pure function of the
//! operation, the caller and the stored agreement, so it can be exercised
//! without a deployed contract.

use soroban_sdk::Address;

use crate::types::{Agreement, AgreementState, Error};

/// Transitions that can be requested on an existing agreement.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    ConfirmDelivery,
    SettlePayment,
}

impl Operation {
    /// State the agreement must be in for this operation.
    pub fn required_state(self) -> AgreementState {
        match self {
            Operation::ConfirmDelivery => AgreementState::Created,
            Operation::SettlePayment => AgreementState::DeliveryConfirmed,
        }
    }

    /// The single party allowed to request this operation.
    pub fn authorized_party(self, agreement: &Agreement) -> &Address {
        match self {
            Operation::ConfirmDelivery => &agreement.buyer,
            Operation::SettlePayment => &agreement.seller,
        }
    }
}

/// Decides whether `caller` may apply `operation` to `agreement`.
///
/// The caller is checked before the state, so an outsider always learns
/// `Unauthorized` regardless of where the agreement is in its lifecycle.
/// On success returns the state the agreement moves to.
pub fn authorize(
    operation: Operation,
    caller: &Address,
    agreement: &Agreement,
) -> Result<AgreementState, Error> {
    if caller != operation.authorized_party(agreement) {
        return Err(Error::Unauthorized);
    }

    if agreement.state != operation.required_state() {
        return Err(Error::InvalidAgreementState);
    }

    agreement.state.advance().ok_or(Error::InvalidAgreementState)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    fn agreement(env: &Env, state: AgreementState) -> Agreement {
        Agreement {
            asset_id: 1,
            buyer: Address::generate(env),
            seller: Address::generate(env),
            price: 10_000_000,
            state,
            created_at: 0,
        }
    }

    #[test]
    fn buyer_confirms_created_agreement() {
        let env = Env::default();
        let a = agreement(&env, AgreementState::Created);

        assert_eq!(
            authorize(Operation::ConfirmDelivery, &a.buyer, &a),
            Ok(AgreementState::DeliveryConfirmed)
        );
    }

    #[test]
    fn seller_settles_confirmed_agreement() {
        let env = Env::default();
        let a = agreement(&env, AgreementState::DeliveryConfirmed);

        assert_eq!(
            authorize(Operation::SettlePayment, &a.seller, &a),
            Ok(AgreementState::Closed)
        );
    }

    #[test]
    fn counterparty_cannot_drive_the_other_edge() {
        let env = Env::default();
        let created = agreement(&env, AgreementState::Created);
        let confirmed = agreement(&env, AgreementState::DeliveryConfirmed);

        assert_eq!(
            authorize(Operation::ConfirmDelivery, &created.seller, &created),
            Err(Error::Unauthorized)
        );
        assert_eq!(
            authorize(Operation::SettlePayment, &confirmed.buyer, &confirmed),
            Err(Error::Unauthorized)
        );
    }

    #[test]
    fn outsider_is_rejected_in_every_state() {
        let env = Env::default();
        let outsider = Address::generate(&env);

        for state in [
            AgreementState::Created,
            AgreementState::DeliveryConfirmed,
            AgreementState::Closed,
        ] {
            let a = agreement(&env, state);
            for op in [Operation::ConfirmDelivery, Operation::SettlePayment] {
                assert_eq!(authorize(op, &outsider, &a), Err(Error::Unauthorized));
            }
        }
    }

    #[test]
    fn right_party_wrong_state_is_a_state_error() {
        let env = Env::default();

        let confirmed = agreement(&env, AgreementState::DeliveryConfirmed);
        assert_eq!(
            authorize(Operation::ConfirmDelivery, &confirmed.buyer, &confirmed),
            Err(Error::InvalidAgreementState)
        );

        let created = agreement(&env, AgreementState::Created);
        assert_eq!(
            authorize(Operation::SettlePayment, &created.seller, &created),
            Err(Error::InvalidAgreementState)
        );

        let closed = agreement(&env, AgreementState::Closed);
        assert_eq!(
            authorize(Operation::ConfirmDelivery, &closed.buyer, &closed),
            Err(Error::InvalidAgreementState)
        );
        assert_eq!(
            authorize(Operation::SettlePayment, &closed.seller, &closed),
            Err(Error::InvalidAgreementState)
        );
    }

    #[test]
    fn states_only_move_forward() {
        assert_eq!(
            AgreementState::Created.advance(),
            Some(AgreementState::DeliveryConfirmed)
        );
        assert_eq!(
            AgreementState::DeliveryConfirmed.advance(),
            Some(AgreementState::Closed)
        );
        assert_eq!(AgreementState::Closed.advance(), None);
        assert!(AgreementState::Closed.is_terminal());
        assert!(!AgreementState::Created.is_terminal());
    }
}
