//! Provider configuration
//!
//! Resolved either from the variables the Anchor CLI exports to test runners
//! or from an `Anchor.toml` workspace file.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
};

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
    },
    Cluster,
};
use serde::Deserialize;

use crate::{
    error::{MockOraclesError, Result},
    MOCK_ORACLES_ADDRESS,
};

pub const PROVIDER_URL_ENV: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_ENV: &str = "ANCHOR_WALLET";
pub const PROGRAM_ID_ENV: &str = "MOCK_ORACLES_PROGRAM_ID";

const PROGRAM_NAME: &str = "mock_oracles";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub cluster: Cluster,
    /// Keypair file paying for and signing every transaction
    pub wallet: PathBuf,
    pub commitment: CommitmentConfig,
    pub program_id: Pubkey,
}

#[derive(Debug, Deserialize)]
struct AnchorToml {
    provider: ProviderSection,
    #[serde(default)]
    programs: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct ProviderSection {
    cluster: String,
    wallet: String,
}

impl ProviderConfig {
    /// Load configuration from `ANCHOR_PROVIDER_URL` and `ANCHOR_WALLET`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = var(PROVIDER_URL_ENV).ok_or(MockOraclesError::MissingSetting(PROVIDER_URL_ENV))?;
        let wallet = var(WALLET_ENV).ok_or(MockOraclesError::MissingSetting(WALLET_ENV))?;
        let program_id = match var(PROGRAM_ID_ENV) {
            Some(program_id) => parse_program_id(&program_id)?,
            None => MOCK_ORACLES_ADDRESS,
        };

        Ok(ProviderConfig {
            cluster: parse_cluster(&url)?,
            wallet: expand_path(&wallet),
            commitment: CommitmentConfig::confirmed(),
            program_id,
        })
    }

    /// Load configuration from an `Anchor.toml` file
    pub fn from_anchor_toml(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        Self::from_anchor_toml_str(&config_str)
    }

    pub fn from_anchor_toml_str(config_str: &str) -> Result<Self> {
        let config: AnchorToml = toml::from_str(config_str)?;
        let cluster = parse_cluster(&config.provider.cluster)?;

        let program_id = match config
            .programs
            .get(&cluster_section(&config.provider.cluster))
            .and_then(|programs| programs.get(PROGRAM_NAME))
        {
            Some(program_id) => parse_program_id(program_id)?,
            None => MOCK_ORACLES_ADDRESS,
        };

        Ok(ProviderConfig {
            cluster,
            wallet: expand_path(&config.provider.wallet),
            commitment: CommitmentConfig::confirmed(),
            program_id,
        })
    }

    pub fn load_wallet(&self) -> Result<Keypair> {
        read_keypair_file(&self.wallet).map_err(|e| MockOraclesError::Keypair {
            path: self.wallet.display().to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_cluster(cluster: &str) -> Result<Cluster> {
    Cluster::from_str(cluster).map_err(|_| MockOraclesError::Cluster(cluster.to_string()))
}

fn parse_program_id(program_id: &str) -> Result<Pubkey> {
    Pubkey::from_str(program_id).map_err(|_| MockOraclesError::ProgramId(program_id.to_string()))
}

// Anchor keys `[programs.*]` tables by lowercase cluster moniker
fn cluster_section(cluster: &str) -> String {
    cluster.to_lowercase()
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
