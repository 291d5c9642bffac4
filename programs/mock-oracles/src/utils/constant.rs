pub const PYTH_PRICE_ACCOUNT_SIZE: usize = 3312;
pub const PYTH_PRODUCT_ACCOUNT_SIZE: usize = 512;
pub const SWITCHBOARD_ACCOUNT_SIZE: usize = 3851;

pub const QUOTE_CURRENCY_KEY: &[u8] = b"quote_currency";
pub const QUOTE_CURRENCY: [u8; 32] = *b"USD\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0";

// sha256("account:AggregatorAccountData")[..8]
pub const AGGREGATOR_DISCRIMINATOR: [u8; 8] = [217, 230, 65, 101, 201, 162, 27, 125];
pub const AGGREGATOR_DISCRIMINATOR_SIZE: usize = 8;
