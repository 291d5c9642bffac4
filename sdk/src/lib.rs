//! Client SDK for the mock-oracles program.
//!
//! Creates Pyth and Switchboard shaped accounts owned by the program and
//! overwrites their prices, so programs consuming oracle data can be tested
//! against deterministic feeds.

use std::sync::Arc;

use anchor_client::solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use log::info;

pub mod account;
pub mod config;
pub mod error;
pub mod instruction;
pub mod params;
pub mod provider;

pub use account::*;
pub use config::ProviderConfig;
pub use error::{MockOraclesError, Result};
pub use mock_oracles::ID as MOCK_ORACLES_ADDRESS;
pub use params::*;
pub use provider::*;

use instruction::*;

pub struct MockOracles<P: Provider> {
    provider: P,
    program_id: Pubkey,
}

impl<P: Provider> MockOracles<P> {
    /// Binds to `provider`, targeting `MOCK_ORACLES_ADDRESS` unless another
    /// deployment is given.
    pub fn load(provider: P, program_id: Option<Pubkey>) -> Self {
        MockOracles {
            provider,
            program_id: program_id.unwrap_or(MOCK_ORACLES_ADDRESS),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Same program, paid for and signed by `signer`.
    pub fn with_signer(&self, signer: Arc<Keypair>) -> Self {
        MockOracles {
            provider: self.provider.with_signer(signer),
            program_id: self.program_id,
        }
    }

    async fn create_account(
        &self,
        account_type: MockOracleAccountType,
    ) -> Result<(Keypair, Instruction)> {
        let account = Keypair::new();
        let lamports = self
            .provider
            .minimum_balance_for_rent_exemption(account_type.space())
            .await?;

        let ix = compose_create_account_ix(
            &self.program_id,
            &self.provider.wallet(),
            &account.pubkey(),
            lamports,
            account_type,
        );

        Ok((account, ix))
    }

    pub async fn create_pyth(&self) -> Result<PythAccounts> {
        let (price_keypair, create_price_ix) =
            self.create_account(MockOracleAccountType::PythPrice).await?;
        let (product_keypair, create_product_ix) =
            self.create_account(MockOracleAccountType::PythProduct).await?;

        let mut ixs = vec![create_price_ix, create_product_ix];
        ixs.extend(compose_init_pyth_ixs(
            &self.program_id,
            &self.provider.wallet(),
            &price_keypair.pubkey(),
            &product_keypair.pubkey(),
        )?);

        self.provider
            .send(
                &ixs,
                &[&price_keypair, &product_keypair],
                SendOptions::confirmed_skip_preflight(),
            )
            .await?;
        info!(
            "created pyth price {} product {}",
            price_keypair.pubkey(),
            product_keypair.pubkey()
        );

        Ok(PythAccounts {
            price_keypair,
            product_keypair,
        })
    }

    pub async fn create_switchboard(&self) -> Result<SwitchboardAccount> {
        let (switchboard_keypair, create_ix) = self
            .create_account(MockOracleAccountType::Switchboard)
            .await?;

        let mut ixs = vec![create_ix];
        ixs.extend(compose_init_switchboard_ixs(
            &self.program_id,
            &self.provider.wallet(),
            &switchboard_keypair.pubkey(),
        )?);

        self.provider
            .send(
                &ixs,
                &[&switchboard_keypair],
                SendOptions::confirmed_skip_preflight(),
            )
            .await?;
        info!("created switchboard aggregator {}", switchboard_keypair.pubkey());

        Ok(SwitchboardAccount {
            switchboard_keypair,
        })
    }

    pub async fn set_pyth_price(
        &self,
        account: &Pubkey,
        params: PythPriceParams,
    ) -> Result<Signature> {
        let ixs = compose_set_pyth_price_ixs(
            &self.program_id,
            &self.provider.wallet(),
            account,
            params,
        )?;

        let signature = self
            .provider
            .send(&ixs, &[], SendOptions::confirmed())
            .await?;
        info!("set pyth price {:?} on {}: {}", params, account, signature);

        Ok(signature)
    }

    pub async fn set_switchboard_price(
        &self,
        account: &Pubkey,
        params: SwitchboardPriceParams,
    ) -> Result<Signature> {
        let ixs = compose_set_switchboard_price_ixs(
            &self.program_id,
            &self.provider.wallet(),
            account,
            params,
        )?;

        let signature = self
            .provider
            .send(&ixs, &[], SendOptions::confirmed_skip_preflight())
            .await?;
        info!(
            "set switchboard price {:?} on {}: {}",
            params, account, signature
        );

        Ok(signature)
    }

    /// Copies `data` into `account` at `offset`, bypassing any layout.
    pub async fn write_data(
        &self,
        account: &Pubkey,
        offset: u64,
        data: Vec<u8>,
    ) -> Result<Signature> {
        let len = data.len();
        let ixs = compose_write_data_ixs(
            &self.program_id,
            &self.provider.wallet(),
            account,
            offset,
            data,
        )?;

        let signature = self
            .provider
            .send(&ixs, &[], SendOptions::confirmed())
            .await?;
        info!(
            "wrote {} bytes at offset {} on {}: {}",
            len, offset, account, signature
        );

        Ok(signature)
    }
}
