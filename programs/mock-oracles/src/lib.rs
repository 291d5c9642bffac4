use anchor_lang::prelude::*;
use errors::*;

pub mod errors;
pub mod pyth;
pub mod switchboard;
pub mod utils;
pub mod write_data;

use pyth::*;
use switchboard::*;
use write_data::*;

declare_id!("6PLWdUXJJRYeTsCHv72iwubm43E1Z1HChkyC3cQHCEtD");

#[program]
pub mod mock_oracles {

    use super::*;

    pub fn init_pyth(ctx: Context<InitPyth>) -> OracleResult {
        pyth::init_pyth::handler(ctx)
    }

    pub fn set_pyth_price(
        ctx: Context<UpdateOracle>,
        price: i64,
        conf: u64,
        expo: i32,
        ema_price: i64,
        ema_conf: u64,
        slot: Option<u64>,
    ) -> OracleResult {
        pyth::set_pyth_price::handler(ctx, price, conf, expo, ema_price, ema_conf, slot)
    }

    pub fn init_switchboard(ctx: Context<UpdateOracle>) -> OracleResult {
        switchboard::init_switchboard::handler(ctx)
    }

    pub fn set_switchboard_price(
        ctx: Context<UpdateOracle>,
        price: i64,
        expo: i32,
        slot: Option<u64>,
    ) -> OracleResult {
        switchboard::set_switchboard_price::handler(ctx, price, expo, slot)
    }

    pub fn write_data(ctx: Context<UpdateOracle>, offset: u64, data: Vec<u8>) -> OracleResult {
        write_data::handler(ctx, offset, data)
    }
}

#[derive(Accounts)]
pub struct UpdateOracle<'info> {
    /// CHECK: mock accounts are owned by this program and carry foreign layouts
    #[account(mut, owner = *program_id)]
    pub target: UncheckedAccount<'info>,
}
