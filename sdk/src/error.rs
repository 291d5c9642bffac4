use anchor_client::{
    solana_client::client_error::ClientError as RpcClientError,
    solana_sdk::{pubkey::Pubkey, transaction::TransactionError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MockOraclesError {
    #[error(transparent)]
    Rpc(#[from] RpcClientError),

    #[error(transparent)]
    Anchor(#[from] anchor_client::ClientError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[cfg(feature = "program-test")]
    #[error(transparent)]
    Banks(#[from] solana_program_test::BanksClientError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("failed to read keypair {path}: {message}")]
    Keypair { path: String, message: String },

    #[error("unknown cluster {0}")]
    Cluster(String),

    #[error("invalid program id {0}")]
    ProgramId(String),

    #[error("missing provider setting {0}")]
    MissingSetting(&'static str),

    #[error("account {0} not found")]
    AccountNotFound(Pubkey),
}

pub type Result<T> = std::result::Result<T, MockOraclesError>;
