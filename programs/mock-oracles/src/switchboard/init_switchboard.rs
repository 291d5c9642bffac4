use anchor_lang::prelude::*;

use crate::{
    errors::OracleResult,
    utils::{write_bytes, AGGREGATOR_DISCRIMINATOR},
    UpdateOracle,
};

pub fn handler(ctx: Context<UpdateOracle>) -> OracleResult {
    msg!("Mock Switchboard: Init Switchboard");

    write_bytes(&ctx.accounts.target, 0, &AGGREGATOR_DISCRIMINATOR)
}
