#![cfg(test)]

use super::*;
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    Address, Env, IntoVal, String,
};

fn setup_test_env() -> (Env, AssetLedgerContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AssetLedgerContract, ());
    let client = AssetLedgerContractClient::new(&env, &contract_id);

    let issuer = Address::generate(&env);
    client.initialize(&issuer);

    (env, client, issuer, contract_id)
}

fn list(env: &Env, client: &AssetLedgerContractClient, issuer: &Address, owner: &Address, name: &str) -> u64 {
    client.mint(
        issuer,
        owner,
        &String::from_str(env, name),
        &String::from_str(env, "QmTp2h4544p4p5g5V5f5g5h6h6j6k6l6m6n6o6"),
    )
}

#[test]
fn test_initialize() {
    let (_, client, issuer, _) = setup_test_env();

    assert_eq!(client.get_issuer(), issuer);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_initialize_twice() {
    let (env, client, _, _) = setup_test_env();
    let other = Address::generate(&env);

    assert_eq!(
        client.try_initialize(&other),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_mint_assigns_owner_and_details() {
    let (env, client, issuer, _) = setup_test_env();
    env.ledger().set_timestamp(1_700_000_000);
    let farmer = Address::generate(&env);

    let asset_id = list(&env, &client, &issuer, &farmer, "Organic Tomatoes");

    assert_eq!(asset_id, 1);
    assert_eq!(client.owner_of(&asset_id), farmer);
    assert_eq!(client.balance_of(&farmer), 1);

    let details = client.asset_details(&asset_id);
    assert_eq!(details.name, String::from_str(&env, "Organic Tomatoes"));
    assert_eq!(
        details.content_hash,
        String::from_str(&env, "QmTp2h4544p4p5g5V5f5g5h6h6j6k6l6m6n6o6")
    );
    assert_eq!(details.issuer, farmer);
    assert_eq!(details.created_at, 1_700_000_000);
}

#[test]
fn test_mint_increments_ids() {
    let (env, client, issuer, _) = setup_test_env();
    let farmer = Address::generate(&env);
    let other = Address::generate(&env);

    assert_eq!(list(&env, &client, &issuer, &farmer, "Tomatoes"), 1);
    assert_eq!(list(&env, &client, &issuer, &other, "Cucumbers"), 2);

    assert_eq!(client.owner_of(&1), farmer);
    assert_eq!(client.owner_of(&2), other);
    assert_eq!(client.total_supply(), 2);
}

#[test]
fn test_mint_emits_listing_event() {
    let (env, client, issuer, contract_id) = setup_test_env();
    let farmer = Address::generate(&env);

    let asset_id = list(&env, &client, &issuer, &farmer, "Organic Apples");

    let (emitter, topics, data) = env.events().all().last().unwrap();
    assert_eq!(emitter, contract_id);
    assert_eq!(topics, (ASSET_LISTED, farmer.clone()).into_val(&env));
    let data: (u64, String) = data.into_val(&env);
    assert_eq!(data, (asset_id, String::from_str(&env, "Organic Apples")));
}

#[test]
fn test_mint_unauthorized() {
    let (env, client, _, _) = setup_test_env();
    let impostor = Address::generate(&env);
    let farmer = Address::generate(&env);

    let result = client.try_mint(
        &impostor,
        &farmer,
        &String::from_str(&env, "Carrots"),
        &String::from_str(&env, "hash"),
    );

    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_mint_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(AssetLedgerContract, ());
    let client = AssetLedgerContractClient::new(&env, &contract_id);

    let issuer = Address::generate(&env);
    let result = client.try_mint(
        &issuer,
        &issuer,
        &String::from_str(&env, "Carrots"),
        &String::from_str(&env, "hash"),
    );

    assert_eq!(result, Err(Ok(Error::NotInitialized)));
}

#[test]
fn test_owner_of_unminted() {
    let (_, client, _, _) = setup_test_env();

    assert_eq!(client.try_owner_of(&99), Err(Ok(Error::AssetNotFound)));
    assert_eq!(client.try_asset_details(&99), Err(Ok(Error::AssetNotFound)));
}

#[test]
fn test_transfer() {
    let (env, client, issuer, _) = setup_test_env();
    let farmer = Address::generate(&env);
    let buyer = Address::generate(&env);
    let asset_id = list(&env, &client, &issuer, &farmer, "Maize");

    client.transfer(&farmer, &buyer, &asset_id);

    assert_eq!(client.owner_of(&asset_id), buyer);
    assert_eq!(client.balance_of(&farmer), 0);
    assert_eq!(client.balance_of(&buyer), 1);
    // the listing record keeps the original producer
    assert_eq!(client.asset_details(&asset_id).issuer, farmer);
}

#[test]
fn test_transfer_by_non_owner() {
    let (env, client, issuer, _) = setup_test_env();
    let farmer = Address::generate(&env);
    let thief = Address::generate(&env);
    let asset_id = list(&env, &client, &issuer, &farmer, "Maize");

    assert_eq!(
        client.try_transfer(&thief, &thief, &asset_id),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(client.owner_of(&asset_id), farmer);
}

#[test]
fn test_transfer_unminted() {
    let (env, client, _, _) = setup_test_env();
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    assert_eq!(client.try_transfer(&a, &b, &7), Err(Ok(Error::AssetNotFound)));
}
