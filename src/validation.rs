use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::types::{error::RouterError, leg::SwapLeg};

// Max number of legs in a single request
pub const MAX_LEGS: u32 = 16;

// Check request shape before any token movement
//
// # Arguments
//
// * `e` - The environment
// * `router` - Router contract address
// * `input_token` - Selling token address
// * `total_amount` - Total amount to collect from the caller
// * `legs` - Requested legs
//
// # Panics
//
// Panics with InvalidLegs if there are no legs or more than MAX_LEGS
// Panics with InvalidAmount, InvalidDestination or InvalidPath if a leg is malformed
// Panics with AmountMismatch if leg amounts do not sum up to the total amount
pub fn validate_request(
    e: &Env,
    router: &Address,
    input_token: &Address,
    total_amount: i128,
    legs: &Vec<SwapLeg>,
) {
    if legs.is_empty() || legs.len() > MAX_LEGS {
        panic_with_error!(e, RouterError::InvalidLegs);
    }
    let mut sum: i128 = 0;
    for leg in legs.iter() {
        validate_leg(e, router, input_token, &leg);
        sum = match sum.checked_add(leg.swap_amount) {
            Some(sum) => sum,
            None => panic_with_error!(e, RouterError::AmountMismatch),
        };
    }
    if sum != total_amount {
        panic_with_error!(e, RouterError::AmountMismatch);
    }
}

fn validate_leg(e: &Env, router: &Address, input_token: &Address, leg: &SwapLeg) {
    if leg.swap_amount <= 0 || leg.min_out_amount < 0 {
        panic_with_error!(e, RouterError::InvalidAmount);
    }
    if &leg.destination == router {
        panic_with_error!(e, RouterError::InvalidDestination);
    }
    if !is_valid_path(input_token, &leg.destination_token, &leg.exchange_path) {
        panic_with_error!(e, RouterError::InvalidPath);
    }
}

// Path should lead from the input token to a different destination token
fn is_valid_path(input_token: &Address, destination_token: &Address, path: &Vec<Address>) -> bool {
    if destination_token == input_token || path.len() < 2 {
        return false;
    }
    &path.first_unchecked() == input_token && &path.last_unchecked() == destination_token
}
