use soroban_sdk::{contracttype, Address, Vec};

// Single swap-and-pay unit of a chop request
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SwapLeg {
    // Address receiving this leg's output
    pub destination: Address,
    // Token delivered to the destination
    pub destination_token: Address,
    // Amount of input token sold by this leg
    pub swap_amount: i128,
    // Min amount of destination token to receive
    pub min_out_amount: i128,
    // Exchange route, from the input token to the destination token
    pub exchange_path: Vec<Address>,
}
