use anchor_lang::prelude::*;
use pyth_sdk_solana::state::{
    AccountType, PriceAccount, PriceStatus, PriceType, ProductAccount, Rational, MAGIC,
    PROD_ACCT_SIZE, PROD_ATTR_SIZE, VERSION_2,
};
use std::mem::size_of;

use crate::{
    errors::OracleResult,
    utils::{load_account_as_mut, OracleClock, QUOTE_CURRENCY, QUOTE_CURRENCY_KEY},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PythPrice {
    pub price: i64,
    pub conf: u64,
    pub expo: i32,
    pub ema_price: i64,
    pub ema_conf: u64,
}

pub fn init_price_account(account: &AccountInfo) -> OracleResult {
    let mut price_account = load_account_as_mut::<PriceAccount>(account)?;

    price_account.magic = MAGIC;
    price_account.ver = VERSION_2;
    price_account.atype = AccountType::Price as u32;
    price_account.size = size_of::<PriceAccount>() as u32;
    price_account.ptype = PriceType::Price;

    Ok(())
}

pub fn init_product_account(account: &AccountInfo, price_account: &Pubkey) -> OracleResult {
    let mut product_account = load_account_as_mut::<ProductAccount>(account)?;

    product_account.magic = MAGIC;
    product_account.ver = VERSION_2;
    product_account.atype = AccountType::Product as u32;
    product_account.size = PROD_ACCT_SIZE as u32;
    product_account.px_acc = *price_account;
    product_account.attr = quote_currency_attributes();

    Ok(())
}

/// Length-prefixed key/value pairs, zero padded to the attribute area.
pub fn quote_currency_attributes() -> [u8; PROD_ATTR_SIZE] {
    let mut attr = [0u8; PROD_ATTR_SIZE];
    let mut cursor = 0;

    for field in [QUOTE_CURRENCY_KEY, &QUOTE_CURRENCY[..]] {
        attr[cursor] = field.len() as u8;
        attr[cursor + 1..cursor + 1 + field.len()].copy_from_slice(field);
        cursor += 1 + field.len();
    }

    attr
}

pub fn write_price(account: &AccountInfo, input: PythPrice, clock: OracleClock) -> OracleResult {
    let mut price_account = load_account_as_mut::<PriceAccount>(account)?;

    price_account.prev_slot = price_account.agg.pub_slot;
    price_account.prev_price = price_account.agg.price;
    price_account.prev_conf = price_account.agg.conf;
    price_account.prev_timestamp = price_account.timestamp;

    price_account.agg.price = input.price;
    price_account.agg.conf = input.conf;
    price_account.expo = input.expo;

    // numer and denom are not read by any consumer
    price_account.ema_price = Rational {
        val: input.ema_price,
        numer: 1,
        denom: 1,
    };
    price_account.ema_conf = Rational {
        val: input.ema_conf as i64,
        numer: 1,
        denom: 1,
    };

    price_account.last_slot = clock.slot;
    price_account.valid_slot = clock.slot;
    price_account.timestamp = clock.unix_timestamp;
    price_account.agg.pub_slot = clock.slot;
    price_account.agg.status = PriceStatus::Trading;

    Ok(())
}
