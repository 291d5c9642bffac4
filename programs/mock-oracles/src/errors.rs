use anchor_lang::{error_code, Result};

#[error_code]
pub enum MockOracleError {
    #[msg("Account data is too small for the oracle layout")]
    AccountTooSmall,
    #[msg("Write exceeds the account data length")]
    WriteOutOfBounds,
    #[msg("Account is not an initialized switchboard aggregator")]
    InvalidAggregatorDiscriminator,
}

pub type OracleResult<T = ()> = Result<T>;
