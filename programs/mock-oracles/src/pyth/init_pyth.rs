use anchor_lang::prelude::*;

use crate::{errors::OracleResult, pyth::state::*};

#[derive(Accounts)]
pub struct InitPyth<'info> {
    /// CHECK: raw pyth price layout, written by `init_price_account`
    #[account(mut, owner = *program_id)]
    pub price_account: UncheckedAccount<'info>,

    /// CHECK: raw pyth product layout, written by `init_product_account`
    #[account(mut, owner = *program_id)]
    pub product_account: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<InitPyth>) -> OracleResult {
    msg!("Mock Pyth: Init");

    let price_account = &ctx.accounts.price_account;
    let product_account = &ctx.accounts.product_account;

    init_price_account(price_account)?;
    init_product_account(product_account, price_account.key)?;

    Ok(())
}
