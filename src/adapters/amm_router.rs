use soroban_sdk::{contractclient, panic_with_error, Address, Env, Vec};

use crate::extensions::auth_helper::approve_exact;
use crate::types::{error::RouterError, swapinfo::LegSwap};

// Seconds added to the ledger timestamp, routers reject `now >= deadline`
const DEADLINE_WINDOW: u64 = 60;

// Fixed-path swap primitive of the exchange router
#[contractclient(name = "AmmRouterClient")]
#[allow(dead_code)]
pub trait AmmRouterTrait {
    fn swap_exact_tokens_for_tokens(
        e: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Vec<i128>;
}

// Execute the leg swap through the exchange router, returns the amount reported by the exchange
pub fn swap(env: &Env, si: &LegSwap) -> i128 {
    let client = AmmRouterClient::new(env, &si.exchange);

    approve_exact(env, &si.exchange, &si.in_token, si.leg.swap_amount);

    //the exchange pulls the approved amount from the router and sends the output back
    let result = client.try_swap_exact_tokens_for_tokens(
        &si.leg.swap_amount,
        &si.leg.min_out_amount,
        &si.leg.exchange_path,
        &env.current_contract_address(),
        &swap_deadline(env),
    );
    match result {
        Ok(Ok(amounts)) => amounts.last().unwrap_or_default(),
        _ => panic_with_error!(env, RouterError::SlippageExceeded),
    }
}

pub fn swap_deadline(env: &Env) -> u64 {
    env.ledger().timestamp().saturating_add(DEADLINE_WINDOW)
}
