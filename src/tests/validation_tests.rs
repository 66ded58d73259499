extern crate std;
use crate::tests::chop_test_context::{amount, setup};
use crate::{ChopRouter, ChopRouterClient, RouterError, MAX_LEGS};
use soroban_sdk::Vec;

#[test]
fn reject_amount_mismatch() {
    let ctx = setup();
    ctx.fund_caller(amount(1001));
    ctx.approve_router(amount(1001));

    let destinations = ctx.destinations(5);
    let legs = ctx.five_legs(&destinations);
    let mut accounts = destinations.clone();
    accounts.extend([ctx.caller.clone(), ctx.router.clone(), ctx.exchange.clone()]);
    let before = ctx.snapshot(&accounts);

    ctx.swap_should_fail(amount(1001), &legs, RouterError::AmountMismatch);
    assert_eq!(ctx.snapshot(&accounts), before);

    //same request fails the same way
    ctx.swap_should_fail(amount(1001), &legs, RouterError::AmountMismatch);
    assert_eq!(ctx.snapshot(&accounts), before);
}

#[test]
fn reject_overflowing_leg_amounts() {
    let ctx = setup();
    let destinations = ctx.destinations(2);
    let legs = ctx.legs([
        ctx.leg(&destinations[0], &ctx.outputs[0], i128::MAX, 0),
        ctx.leg(&destinations[1], &ctx.outputs[1], i128::MAX, 0),
    ]);
    ctx.swap_should_fail(i128::MAX, &legs, RouterError::AmountMismatch);
}

#[test]
fn reject_path_not_starting_at_input_token() {
    let ctx = setup();
    ctx.fund_caller(amount(1000));
    ctx.approve_router(amount(1000));

    let destinations = ctx.destinations(5);
    let mut legs = ctx.five_legs(&destinations);
    let mut malformed = legs.get_unchecked(3);
    malformed.exchange_path = ctx.path([ctx.outputs[2].clone(), ctx.outputs[3].clone()]);
    legs.set(3, malformed);

    let mut accounts = destinations.clone();
    accounts.extend([ctx.caller.clone(), ctx.router.clone(), ctx.exchange.clone()]);
    let before = ctx.snapshot(&accounts);

    ctx.swap_should_fail(amount(1000), &legs, RouterError::InvalidPath);
    assert_eq!(ctx.snapshot(&accounts), before);
    assert_eq!(ctx.snapshot(&[ctx.caller.clone()])[0], amount(1000));
}

#[test]
fn reject_path_not_ending_at_destination_token() {
    let ctx = setup();
    let destinations = ctx.destinations(1);
    let mut leg = ctx.leg(&destinations[0], &ctx.outputs[1], amount(10), 0);
    leg.exchange_path = ctx.path([ctx.usdc.clone(), ctx.outputs[0].clone()]);
    ctx.swap_should_fail(amount(10), &ctx.legs([leg]), RouterError::InvalidPath);
}

#[test]
fn reject_destination_token_equal_to_input() {
    let ctx = setup();
    let destinations = ctx.destinations(1);
    let mut leg = ctx.leg(&destinations[0], &ctx.usdc, amount(10), 0);
    leg.exchange_path = ctx.path([ctx.usdc.clone(), ctx.outputs[0].clone(), ctx.usdc.clone()]);
    ctx.swap_should_fail(amount(10), &ctx.legs([leg]), RouterError::InvalidPath);
}

#[test]
fn reject_single_hop_path() {
    let ctx = setup();
    let destinations = ctx.destinations(1);
    let mut leg = ctx.leg(&destinations[0], &ctx.outputs[0], amount(10), 0);
    leg.exchange_path = ctx.path([ctx.usdc.clone()]);
    ctx.swap_should_fail(amount(10), &ctx.legs([leg]), RouterError::InvalidPath);
}

#[test]
fn reject_empty_legs() {
    let ctx = setup();
    ctx.swap_should_fail(0, &Vec::new(&ctx.env), RouterError::InvalidLegs);
}

#[test]
fn reject_too_many_legs() {
    let ctx = setup();
    let destinations = ctx.destinations(MAX_LEGS as usize + 1);
    let mut legs = Vec::new(&ctx.env);
    for destination in destinations.iter() {
        legs.push_back(ctx.leg(destination, &ctx.outputs[0], amount(1), 0));
    }
    ctx.swap_should_fail(amount(MAX_LEGS as i128 + 1), &legs, RouterError::InvalidLegs);
}

#[test]
fn reject_non_positive_swap_amount() {
    let ctx = setup();
    let destinations = ctx.destinations(2);
    let legs = ctx.legs([
        ctx.leg(&destinations[0], &ctx.outputs[0], amount(10), 0),
        ctx.leg(&destinations[1], &ctx.outputs[1], 0, 0),
    ]);
    ctx.swap_should_fail(amount(10), &legs, RouterError::InvalidAmount);
}

#[test]
fn reject_negative_min_amount() {
    let ctx = setup();
    let destinations = ctx.destinations(1);
    let legs = ctx.legs([ctx.leg(&destinations[0], &ctx.outputs[0], amount(10), -1)]);
    ctx.swap_should_fail(amount(10), &legs, RouterError::InvalidAmount);
}

#[test]
fn reject_router_as_destination() {
    let ctx = setup();
    let legs = ctx.legs([ctx.leg(&ctx.router, &ctx.outputs[0], amount(10), 0)]);
    ctx.swap_should_fail(amount(10), &legs, RouterError::InvalidDestination);
}

#[test]
#[should_panic(expected = "32701")]
fn reject_swap_before_init() {
    let ctx = setup();
    ctx.fund_caller(amount(10));
    ctx.approve_router(amount(10));

    let uninitialized = ctx.env.register(ChopRouter, ());
    let client = ChopRouterClient::new(&ctx.env, &uninitialized);
    let destinations = ctx.destinations(1);
    let legs = ctx.legs([ctx.leg(&destinations[0], &ctx.outputs[0], amount(10), 0)]);

    client.swap_and_distribute(&ctx.caller, &ctx.usdc, &amount(10), &legs);
}
