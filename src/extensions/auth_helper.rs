use soroban_sdk::{token, Address, Env};

// Approve the exchange to spend exactly the leg amount from the router balance
//
// The allowance expires with the current ledger.
//
// # Arguments
//
// * `env` - The environment
// * `exchange` - The exchange router address (spender)
// * `token` - The address of the token to sell
// * `amount` - The exact amount the exchange may pull
pub fn approve_exact(env: &Env, exchange: &Address, token: &Address, amount: i128) {
    token::Client::new(env, token).approve(
        &env.current_contract_address(),
        exchange,
        &amount,
        &env.ledger().sequence(),
    );
}

// Retrieve the allowance the exchange left unspent
//
// # Arguments
//
// * `env` - The environment
// * `exchange` - The exchange router address (spender)
// * `token` - The address of the approved token
pub fn residual_allowance(env: &Env, exchange: &Address, token: &Address) -> i128 {
    token::Client::new(env, token).allowance(&env.current_contract_address(), exchange)
}
