//! Connection and wallet through which the SDK submits transactions.

use std::sync::Arc;

use anchor_client::{
    solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig},
    solana_sdk::{
        commitment_config::CommitmentConfig, hash::Hash, instruction::Instruction,
        pubkey::Pubkey, signature::Keypair, signature::Signature, signer::Signer,
        transaction::Transaction,
    },
};
use async_trait::async_trait;
use log::debug;

use crate::{config::ProviderConfig, error::Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Falls back to the provider commitment when unset
    pub commitment: Option<CommitmentConfig>,
    pub skip_preflight: bool,
}

impl SendOptions {
    pub fn confirmed() -> Self {
        SendOptions {
            commitment: Some(CommitmentConfig::confirmed()),
            skip_preflight: false,
        }
    }

    pub fn confirmed_skip_preflight() -> Self {
        SendOptions {
            commitment: Some(CommitmentConfig::confirmed()),
            skip_preflight: true,
        }
    }
}

#[async_trait]
pub trait Provider: Send + Sync {
    /// Fee payer and default signer.
    fn wallet(&self) -> Pubkey;

    fn with_signer(&self, signer: Arc<Keypair>) -> Self
    where
        Self: Sized;

    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> Result<u64>;

    /// Signs with the wallet plus `signers`, submits, and waits for the
    /// requested commitment.
    async fn send(
        &self,
        instructions: &[Instruction],
        signers: &[&Keypair],
        options: SendOptions,
    ) -> Result<Signature>;

    async fn get_account_data(&self, pubkey: &Pubkey) -> Result<Vec<u8>>;
}

fn sign_transaction(
    instructions: &[Instruction],
    wallet: &Keypair,
    signers: &[&Keypair],
    recent_blockhash: Hash,
) -> Transaction {
    let mut all_signers = vec![wallet];
    all_signers.extend_from_slice(signers);

    Transaction::new_signed_with_payer(
        instructions,
        Some(&wallet.pubkey()),
        &all_signers,
        recent_blockhash,
    )
}

pub struct RpcProvider {
    client: Arc<RpcClient>,
    wallet: Arc<Keypair>,
}

impl RpcProvider {
    pub fn new(client: RpcClient, wallet: Keypair) -> Self {
        RpcProvider {
            client: Arc::new(client),
            wallet: Arc::new(wallet),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let client =
            RpcClient::new_with_commitment(config.cluster.url().to_string(), config.commitment);

        Ok(RpcProvider::new(client, config.load_wallet()?))
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

#[async_trait]
impl Provider for RpcProvider {
    fn wallet(&self) -> Pubkey {
        self.wallet.pubkey()
    }

    fn with_signer(&self, signer: Arc<Keypair>) -> Self {
        RpcProvider {
            client: self.client.clone(),
            wallet: signer,
        }
    }

    async fn minimum_balance_for_rent_exemption(&self, space: usize) -> Result<u64> {
        let lamports = self
            .client
            .get_minimum_balance_for_rent_exemption(space)
            .await?;

        Ok(lamports)
    }

    async fn send(
        &self,
        instructions: &[Instruction],
        signers: &[&Keypair],
        options: SendOptions,
    ) -> Result<Signature> {
        let commitment = options
            .commitment
            .unwrap_or_else(|| self.client.commitment());

        let recent_blockhash = self.client.get_latest_blockhash().await?;
        let transaction = sign_transaction(instructions, &self.wallet, signers, recent_blockhash);

        let config = RpcSendTransactionConfig {
            skip_preflight: options.skip_preflight,
            preflight_commitment: Some(commitment.commitment),
            ..RpcSendTransactionConfig::default()
        };
        let signature = self
            .client
            .send_transaction_with_config(&transaction, config)
            .await?;
        debug!("sent {} at {:?}", signature, commitment.commitment);

        self.client
            .poll_for_signature_with_commitment(&signature, commitment)
            .await?;
        if let Some(Err(err)) = self
            .client
            .get_signature_status_with_commitment(&signature, commitment)
            .await?
        {
            return Err(err.into());
        }

        Ok(signature)
    }

    async fn get_account_data(&self, pubkey: &Pubkey) -> Result<Vec<u8>> {
        Ok(self.client.get_account_data(pubkey).await?)
    }
}

#[cfg(feature = "program-test")]
pub use banks::BanksProvider;

#[cfg(feature = "program-test")]
mod banks {
    use super::*;
    use anchor_client::solana_sdk::commitment_config::CommitmentLevel;
    use solana_program_test::BanksClient;

    use crate::error::MockOraclesError;

    /// In-process provider backed by a `solana-program-test` bank.
    #[derive(Clone)]
    pub struct BanksProvider {
        client: BanksClient,
        wallet: Arc<Keypair>,
        commitment: CommitmentLevel,
    }

    impl BanksProvider {
        pub fn new(client: BanksClient, wallet: Keypair) -> Self {
            BanksProvider {
                client,
                wallet: Arc::new(wallet),
                commitment: CommitmentLevel::Processed,
            }
        }
    }

    #[async_trait]
    impl Provider for BanksProvider {
        fn wallet(&self) -> Pubkey {
            self.wallet.pubkey()
        }

        fn with_signer(&self, signer: Arc<Keypair>) -> Self {
            BanksProvider {
                client: self.client.clone(),
                wallet: signer,
                commitment: self.commitment,
            }
        }

        async fn minimum_balance_for_rent_exemption(&self, space: usize) -> Result<u64> {
            let rent = self.client.clone().get_rent().await?;

            Ok(rent.minimum_balance(space))
        }

        async fn send(
            &self,
            instructions: &[Instruction],
            signers: &[&Keypair],
            options: SendOptions,
        ) -> Result<Signature> {
            let mut client = self.client.clone();
            let commitment = options
                .commitment
                .map(|commitment| commitment.commitment)
                .unwrap_or(self.commitment);

            let recent_blockhash = client.get_latest_blockhash().await?;
            let transaction =
                sign_transaction(instructions, &self.wallet, signers, recent_blockhash);
            let signature = transaction.signatures[0];

            if options.skip_preflight {
                client
                    .process_transaction_with_commitment(transaction, commitment)
                    .await?;
            } else {
                client
                    .process_transaction_with_preflight_and_commitment(transaction, commitment)
                    .await?;
            }
            debug!("processed {} at {:?}", signature, commitment);

            Ok(signature)
        }

        async fn get_account_data(&self, pubkey: &Pubkey) -> Result<Vec<u8>> {
            self.client
                .clone()
                .get_account(*pubkey)
                .await?
                .map(|account| account.data)
                .ok_or(MockOraclesError::AccountNotFound(*pubkey))
        }
    }
}
