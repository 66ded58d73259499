use soroban_sdk::contracterror;

// Router contract errors
#[contracterror]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouterError {
    // Caller is not allowed to execute this function
    Unauthorized = 32_700,
    // Contract has not been initialized yet
    NotInitialized = 32_701,
    // Cannot initialize the contract for the second time
    AlreadyInitialized = 32_702,
    // Sum of leg amounts does not match the total amount
    AmountMismatch = 32_710,
    // Caller cannot fund the initial collection
    InsufficientAllowanceOrBalance = 32_711,
    // Exchange path does not start at the input token or end at the leg's token
    InvalidPath = 32_712,
    // Exchange could not deliver the leg's minimum output
    SlippageExceeded = 32_713,
    // Destination cannot receive its output token
    DistributionFailed = 32_714,
    // Empty legs list or too many legs
    InvalidLegs = 32_715,
    // Non-positive swap amount or negative minimum
    InvalidAmount = 32_716,
    // Leg output would be sent back to the router
    InvalidDestination = 32_717,
    // Exchange did not spend exactly the approved amount
    ExchangeMisconduct = 32_718,
}
