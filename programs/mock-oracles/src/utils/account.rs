use std::cell::RefMut;
use std::mem::size_of;

use anchor_lang::prelude::*;
use bytemuck::Pod;

use crate::errors::{MockOracleError, OracleResult};

/// Mounts the first `size_of::<T>()` bytes of the account data as `T`.
pub fn load_account_as_mut<'a, T: Pod>(account: &'a AccountInfo) -> OracleResult<RefMut<'a, T>> {
    let data = account.try_borrow_mut_data()?;
    require!(
        data.len() >= size_of::<T>(),
        MockOracleError::AccountTooSmall
    );

    Ok(RefMut::map(data, |data| {
        bytemuck::from_bytes_mut(&mut data[..size_of::<T>()])
    }))
}

pub fn write_bytes(account: &AccountInfo, offset: usize, bytes: &[u8]) -> OracleResult {
    let mut data = account.try_borrow_mut_data()?;

    let end = offset
        .checked_add(bytes.len())
        .ok_or(MockOracleError::WriteOutOfBounds)?;
    require!(end <= data.len(), MockOracleError::WriteOutOfBounds);

    data[offset..end].copy_from_slice(bytes);

    Ok(())
}
