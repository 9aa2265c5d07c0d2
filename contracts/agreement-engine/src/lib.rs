/*!
 * Agreement Engine Smart Contract
 *
 * Escrow for purchases of goods listed in the asset ledger.
 * Key features:
 * - Buyer funds the full price into escrow when opening an agreement
 * - Seller is resolved once, from the asset ledger, at creation time
 * - Buyer confirms delivery, seller settles; nobody else can move an agreement
 * - One settlement transfer per agreement, issued only after the agreement is
 *   already recorded as closed
 *
 * Business Logic:
 * 1. Buyer calls create_agreement with the asset id and the exact price
 * 2. Contract asks the asset ledger for the asset owner (the seller) and
 *   pulls the price from the buyer
 * 3. Buyer calls confirm_delivery once the goods arrive
 * 4. Seller calls settle_payment and receives the escrowed price
 */

#![no_std]

mod ledger;
mod policy;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use ledger::{AssetOwnership, AssetOwnershipClient};
pub use policy::{authorize, Operation};
pub use types::{
    Agreement, AgreementState, Error, ErrorCategory, AGREEMENT_CREATED, DELIVERY_CONFIRMED,
    PAYMENT_SETTLED,
};

#[contract]
pub struct AgreementEngineContract;

#[contractimpl]
impl AgreementEngineContract {
    /// Configures the engine. Can only be called once.
    ///
    /// # Arguments
    /// * `admin` - Engine owner. Recorded for reference; it has no say over agreements
    /// * `asset_ledger` - Contract answering `owner_of(asset_id)`
    /// * `payment_token` - Token contract whose balances are escrowed
    pub fn initialize(
        env: Env,
        admin: Address,
        asset_ledger: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::write_config(&env, &admin, &asset_ledger, &payment_token);

        Ok(())
    }

    /// Opens an agreement for `asset_id` and escrows the buyer's payment.
    ///
    /// # Business Flow
    /// 1. Checks the transferred value equals the declared price exactly
    /// 2. Resolves the seller as the asset's current owner
    /// 3. Moves the price from the buyer into the contract
    /// 4. Stores the agreement in the Created state and emits an event
    ///
    /// # Returns
    /// The new agreement id (the first agreement is 1)
    ///
    /// # Errors
    /// - PriceMismatch: `transferred_value != declared_price`
    /// - InvalidAmount: the price is not positive
    /// - AssetNotFound: the asset ledger has no owner for `asset_id`
    /// - TransferFailed: the buyer's payment could not be pulled in
    pub fn create_agreement(
        env: Env,
        buyer: Address,
        asset_id: u64,
        declared_price: i128,
        transferred_value: i128,
    ) -> Result<u64, Error> {
        buyer.require_auth();

        if transferred_value != declared_price {
            log!(
                &env,
                "Price mismatch. Declared: {}, Transferred: {}",
                declared_price,
                transferred_value
            );
            return Err(Error::PriceMismatch);
        }
        if declared_price <= 0 {
            return Err(Error::InvalidAmount);
        }

        let ledger_id = storage::asset_ledger(&env)?;
        let seller = ledger::resolve_owner(&env, &ledger_id, asset_id)?;

        let token_id = storage::payment_token(&env)?;
        let token_client = token::Client::new(&env, &token_id);
        if token_client
            .try_transfer(&buyer, &env.current_contract_address(), &transferred_value)
            .is_err()
        {
            log!(&env, "Escrow deposit of {} failed", transferred_value);
            return Err(Error::TransferFailed);
        }

        let agreement_id = storage::next_agreement_id(&env);
        let agreement = Agreement {
            asset_id,
            buyer: buyer.clone(),
            seller: seller.clone(),
            price: declared_price,
            state: AgreementState::Created,
            created_at: env.ledger().timestamp(),
        };
        storage::save_agreement(&env, agreement_id, &agreement);

        env.events().publish(
            (AGREEMENT_CREATED, buyer.clone()),
            (agreement_id, asset_id, buyer, seller, declared_price),
        );

        Ok(agreement_id)
    }

    /// Records that the buyer received the goods.
    ///
    /// # Errors
    /// - AgreementNotFound: unknown id
    /// - Unauthorized: `caller` is not the agreement's buyer
    /// - InvalidAgreementState: the agreement is not in the Created state
    pub fn confirm_delivery(env: Env, agreement_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut agreement = storage::load_agreement(&env, agreement_id)?;
        agreement.state = policy::authorize(Operation::ConfirmDelivery, &caller, &agreement)?;
        storage::save_agreement(&env, agreement_id, &agreement);

        env.events()
            .publish((DELIVERY_CONFIRMED, caller), (agreement_id,));

        Ok(())
    }

    /// Releases the escrowed price to the seller and closes the agreement.
    ///
    /// The Closed state is written before the token transfer is issued, so any
    /// call that reaches this agreement while the transfer is in flight finds
    /// it already closed. If the transfer fails the whole invocation fails and
    /// its writes are discarded: the agreement stays DeliveryConfirmed with the
    /// funds still escrowed, and the seller can simply call again.
    ///
    /// # Errors
    /// - AgreementNotFound: unknown id
    /// - Unauthorized: `caller` is not the seller recorded at creation
    /// - InvalidAgreementState: delivery has not been confirmed, or already settled
    /// - TransferFailed: the token refused the payout
    pub fn settle_payment(env: Env, agreement_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut agreement = storage::load_agreement(&env, agreement_id)?;
        agreement.state = policy::authorize(Operation::SettlePayment, &caller, &agreement)?;
        storage::save_agreement(&env, agreement_id, &agreement);

        let token_id = storage::payment_token(&env)?;
        let token_client = token::Client::new(&env, &token_id);
        if token_client
            .try_transfer(
                &env.current_contract_address(),
                &agreement.seller,
                &agreement.price,
            )
            .is_err()
        {
            log!(
                &env,
                "Payout of {} for agreement {} failed",
                agreement.price,
                agreement_id
            );
            return Err(Error::TransferFailed);
        }

        env.events().publish(
            (PAYMENT_SETTLED, agreement.seller.clone()),
            (agreement_id, agreement.seller, agreement.price),
        );

        Ok(())
    }

    // ================================================================================================
    // QUERY FUNCTIONS (GETTERS)
    // ================================================================================================

    pub fn get_agreement(env: Env, agreement_id: u64) -> Result<Agreement, Error> {
        storage::load_agreement(&env, agreement_id)
    }

    /// Number of agreements ever created, which is also the latest id.
    pub fn agreement_count(env: Env) -> u64 {
        storage::agreement_count(&env)
    }

    /// Amount the contract currently holds on behalf of `agreement_id`.
    pub fn escrowed_amount(env: Env, agreement_id: u64) -> Result<i128, Error> {
        let agreement = storage::load_agreement(&env, agreement_id)?;
        if agreement.state.is_terminal() {
            Ok(0)
        } else {
            Ok(agreement.price)
        }
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::admin(&env)
    }

    pub fn get_asset_ledger(env: Env) -> Result<Address, Error> {
        storage::asset_ledger(&env)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, Error> {
        storage::payment_token(&env)
    }
}
