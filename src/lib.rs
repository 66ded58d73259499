#![no_std]

mod adapters;
mod events;
mod extensions;
mod tests;
mod types;
mod validation;

use adapters::amm_router;
use extensions::{auth_helper::residual_allowance, env_extensions::EnvExtensions};
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, BytesN, Env, Vec,
};
use types::swapinfo::LegSwap;

pub use types::{error::RouterError, leg::SwapLeg};
pub use validation::MAX_LEGS;

#[contract]
pub struct ChopRouter;

#[contractimpl]
impl ChopRouter {
    // Initialize contract
    //
    // # Arguments
    //
    // * `admin` - Admin account address
    // * `exchange` - Exchange router address used to execute leg swaps
    //
    // # Panics
    //
    // Panics if the contract is already initialized
    pub fn init(e: Env, admin: Address, exchange: Address) {
        if e.is_initialized() {
            e.panic_with_error(RouterError::AlreadyInitialized);
        }
        admin.require_auth();
        e.set_admin(&admin);
        e.set_exchange(&exchange);
        e.bump_instance();
        events::initialized(&e, &admin, &exchange);
    }

    // Point the router to another exchange router
    //
    // # Arguments
    //
    // * `exchange` - New exchange router address
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the admin
    pub fn set_exchange(e: Env, exchange: Address) {
        e.panic_if_not_initialized();
        e.panic_if_not_admin();
        e.set_exchange(&exchange);
        e.bump_instance();
        events::exchange_updated(&e, &exchange);
    }

    // Retrieve the configured exchange router address
    pub fn exchange(e: Env) -> Address {
        e.get_exchange()
            .unwrap_or_else(|| panic_with_error!(&e, RouterError::NotInitialized))
    }

    // Retrieve the admin address
    pub fn admin(e: Env) -> Address {
        e.get_admin()
            .unwrap_or_else(|| panic_with_error!(&e, RouterError::NotInitialized))
    }

    // Update the contract's WASM hash
    //
    // # Arguments
    //
    // * `wasm_hash` - New WASM hash
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the admin
    pub fn update_contract(e: Env, wasm_hash: BytesN<32>) {
        e.panic_if_not_initialized();
        e.panic_if_not_admin();
        e.deployer().update_current_contract_wasm(wasm_hash)
    }

    // Swap the input token into several output tokens and pay each output to its destination
    //
    // Either every leg is swapped and delivered, or the whole invocation reverts.
    //
    // # Arguments
    //
    // * `caller` - Account funding the swap, must approve `total_amount` to the router
    // * `input_token` - Selling token address
    // * `total_amount` - Total amount to sell, equals the sum of leg amounts
    // * `legs` - Swap legs, executed in the provided order
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the request is malformed (InvalidLegs, InvalidAmount, InvalidDestination, InvalidPath)
    // Panics with AmountMismatch if leg amounts do not add up to `total_amount`
    // Panics with InsufficientAllowanceOrBalance if the caller cannot fund the swap
    // Panics with SlippageExceeded if any leg can't deliver its min amount
    // Panics with ExchangeMisconduct if the exchange did not spend exactly the leg amount
    // Panics with DistributionFailed if any destination can't receive its tokens
    pub fn swap_and_distribute(
        e: Env,
        caller: Address,
        input_token: Address,
        total_amount: i128,
        legs: Vec<SwapLeg>,
    ) {
        //require authentication
        caller.require_auth();
        let exchange = match e.get_exchange() {
            Some(exchange) => exchange,
            None => panic_with_error!(&e, RouterError::NotInitialized),
        };
        //bump TTL
        e.bump_instance();

        let router = e.current_contract_address();
        validation::validate_request(&e, &router, &input_token, total_amount, &legs);

        let input_client = token::Client::new(&e, &input_token);
        //router balance snapshot, may include tokens sent to the contract directly
        let custody_before = input_client.balance(&router);

        collect_input(&e, &input_client, &caller, &router, total_amount);

        for leg in legs.iter() {
            let received = execute_leg(&e, &exchange, &input_token, &leg, &router);
            distribute(&e, &leg, received, &router);
            events::leg_distributed(&e, &leg, received);
        }

        //every collected token should have been sold
        if input_client.balance(&router) != custody_before {
            panic_with_error!(&e, RouterError::ExchangeMisconduct);
        }

        events::chopped(&e, &caller, &input_token, total_amount, legs.len());
    }

    // Withdraw tokens sent to the contract address outside of swaps
    //
    // # Arguments
    //
    // * `dest` - Destination account address
    // * `token` - Token address to withdraw
    // * `amount` - Amount of tokens to withdraw
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not admin
    pub fn withdraw(e: Env, dest: Address, token: Address, amount: i128) {
        e.panic_if_not_initialized();
        //check admin auth
        e.panic_if_not_admin();
        //extend TTL
        e.bump_instance();
        //transfer tokens from the contract balance
        let token_client = token::Client::new(&e, &token);
        token_client.transfer(&e.current_contract_address(), &dest, &amount);
    }
}

// Pull the total selling amount from the caller into router custody
fn collect_input(
    e: &Env,
    token_client: &token::Client,
    caller: &Address,
    router: &Address,
    amount: i128,
) {
    //fail before touching the exchange if the caller can't fund the swap
    if token_client.allowance(caller, router) < amount || token_client.balance(caller) < amount {
        panic_with_error!(e, RouterError::InsufficientAllowanceOrBalance);
    }
    let before = token_client.balance(router);
    match token_client.try_transfer_from(router, caller, router, &amount) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(e, RouterError::InsufficientAllowanceOrBalance),
    }
    let collected = token_client.balance(router).checked_sub(before);
    if collected != Some(amount) {
        panic_with_error!(e, RouterError::InsufficientAllowanceOrBalance);
    }
}

// Swap the leg amount through the exchange, returns the amount actually received by the router
fn execute_leg(
    e: &Env,
    exchange: &Address,
    input_token: &Address,
    leg: &SwapLeg,
    router: &Address,
) -> i128 {
    let selling_client = token::Client::new(e, input_token);
    let buying_client = token::Client::new(e, &leg.destination_token);

    //make balances snapshot before swap
    let selling_before = selling_client.balance(router);
    let buying_before = buying_client.balance(router);

    let reported = amm_router::swap(
        e,
        &LegSwap {
            leg: leg.clone(),
            in_token: input_token.clone(),
            exchange: exchange.clone(),
        },
    );

    verify_sold(e, selling_before, selling_client.balance(router), leg.swap_amount);
    if residual_allowance(e, exchange, input_token) != 0 {
        panic_with_error!(e, RouterError::ExchangeMisconduct);
    }
    let received = verify_bought(
        e,
        buying_before,
        buying_client.balance(router),
        leg.min_out_amount,
    );
    log!(e, "leg swapped", leg.swap_amount, reported, received);
    received
}

// Forward the leg output to its destination
fn distribute(e: &Env, leg: &SwapLeg, amount: i128, router: &Address) {
    if amount == 0 {
        return;
    }
    let token_client = token::Client::new(e, &leg.destination_token);
    match token_client.try_transfer(router, &leg.destination, &amount) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(e, RouterError::DistributionFailed),
    }
}

// Verify that actually sold amount exactly equals the leg amount
fn verify_sold(e: &Env, before: i128, after: i128, plan_sold: i128) {
    let sold = before.checked_sub(after);
    if sold != Some(plan_sold) {
        panic_with_error!(e, RouterError::ExchangeMisconduct);
    }
}

// Verify that actually bought amount is greater or equal the leg min amount
fn verify_bought(e: &Env, before: i128, after: i128, min_bought: i128) -> i128 {
    match after.checked_sub(before) {
        Some(bought) if bought >= min_bought => bought,
        _ => panic_with_error!(e, RouterError::SlippageExceeded),
    }
}
