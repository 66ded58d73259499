use soroban_sdk::Address;

use super::leg::SwapLeg;

// Normalized leg execution descriptor
#[derive(Clone, Eq, PartialEq)]
pub struct LegSwap {
    pub leg: SwapLeg,
    // Selling token address
    pub in_token: Address,
    // Exchange router address
    pub exchange: Address,
}
