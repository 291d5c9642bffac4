use anchor_lang::prelude::*;

use crate::{
    errors::OracleResult, switchboard::state::write_aggregator_result, utils::get_clock,
    UpdateOracle,
};

pub fn handler(
    ctx: Context<UpdateOracle>,
    price: i64,
    expo: i32,
    slot: Option<u64>,
) -> OracleResult {
    msg!("Mock Switchboard: Set Switchboard price");

    let clock = get_clock()?.with_slot(slot);
    write_aggregator_result(&ctx.accounts.target, price, expo, clock)
}
