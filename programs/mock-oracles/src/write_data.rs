use anchor_lang::prelude::*;
use std::convert::TryFrom;

use crate::{
    errors::{MockOracleError, OracleResult},
    utils::write_bytes,
    UpdateOracle,
};

pub fn handler(ctx: Context<UpdateOracle>, offset: u64, data: Vec<u8>) -> OracleResult {
    msg!("Mock Oracles: Write {} bytes at {}", data.len(), offset);

    let offset = usize::try_from(offset).map_err(|_| MockOracleError::WriteOutOfBounds)?;
    write_bytes(&ctx.accounts.target, offset, &data)
}
