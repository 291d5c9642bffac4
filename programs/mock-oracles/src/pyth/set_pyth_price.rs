use anchor_lang::prelude::*;

use crate::{errors::OracleResult, pyth::state::*, utils::get_clock, UpdateOracle};

pub fn handler(
    ctx: Context<UpdateOracle>,
    price: i64,
    conf: u64,
    expo: i32,
    ema_price: i64,
    ema_conf: u64,
    slot: Option<u64>,
) -> OracleResult {
    msg!("Mock Pyth: Set price");

    let clock = get_clock()?.with_slot(slot);
    write_price(
        &ctx.accounts.target,
        PythPrice {
            price,
            conf,
            expo,
            ema_price,
            ema_conf,
        },
        clock,
    )
}
