use soroban_sdk::{symbol_short, Address, Env};

use crate::types::leg::SwapLeg;

// Router initialized with admin and exchange
pub fn initialized(e: &Env, admin: &Address, exchange: &Address) {
    e.events()
        .publish((symbol_short!("init"), admin.clone()), exchange.clone());
}

// Exchange router address changed by the admin
pub fn exchange_updated(e: &Env, exchange: &Address) {
    e.events()
        .publish((symbol_short!("exchange"),), exchange.clone());
}

// Leg output delivered to its destination
pub fn leg_distributed(e: &Env, leg: &SwapLeg, received: i128) {
    e.events().publish(
        (symbol_short!("leg"), leg.destination.clone()),
        (leg.destination_token.clone(), leg.swap_amount, received),
    );
}

// All legs of the request executed and distributed
pub fn chopped(e: &Env, caller: &Address, input_token: &Address, total_amount: i128, legs: u32) {
    e.events().publish(
        (symbol_short!("chop"), caller.clone()),
        (input_token.clone(), total_amount, legs),
    );
}
