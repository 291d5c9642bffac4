use anchor_client::solana_sdk::signature::Keypair;
use mock_oracles::utils::{
    PYTH_PRICE_ACCOUNT_SIZE, PYTH_PRODUCT_ACCOUNT_SIZE, SWITCHBOARD_ACCOUNT_SIZE,
};

/// Account layouts the program can initialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockOracleAccountType {
    PythPrice,
    PythProduct,
    Switchboard,
}

impl MockOracleAccountType {
    pub fn space(&self) -> usize {
        match self {
            MockOracleAccountType::PythPrice => PYTH_PRICE_ACCOUNT_SIZE,
            MockOracleAccountType::PythProduct => PYTH_PRODUCT_ACCOUNT_SIZE,
            MockOracleAccountType::Switchboard => SWITCHBOARD_ACCOUNT_SIZE,
        }
    }
}

/// Keypairs of a freshly created Pyth price/product pair.
#[derive(Debug)]
pub struct PythAccounts {
    pub price_keypair: Keypair,
    pub product_keypair: Keypair,
}

#[derive(Debug)]
pub struct SwitchboardAccount {
    pub switchboard_keypair: Keypair,
}
