use std::rc::Rc;

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig, instruction::Instruction, pubkey::Pubkey,
        signer::null_signer::NullSigner, system_instruction,
    },
    Client, Cluster, Program,
};
use mock_oracles::accounts::{InitPyth, UpdateOracle};

use crate::{
    account::MockOracleAccountType,
    error::Result,
    params::{PythPriceParams, SwitchboardPriceParams},
};

// The request builder is only used to encode instructions, so the payer never signs.
fn get_program(program_id: &Pubkey, payer: &Pubkey) -> Program {
    let client = Client::new_with_options(
        Cluster::Debug,
        Rc::new(NullSigner::new(payer)),
        CommitmentConfig::processed(),
    );
    client.program(*program_id)
}

pub fn compose_create_account_ix(
    program_id: &Pubkey,
    payer: &Pubkey,
    account: &Pubkey,
    lamports: u64,
    account_type: MockOracleAccountType,
) -> Instruction {
    system_instruction::create_account(
        payer,
        account,
        lamports,
        account_type.space() as u64,
        program_id,
    )
}

pub fn compose_init_pyth_ixs(
    program_id: &Pubkey,
    payer: &Pubkey,
    price: &Pubkey,
    product: &Pubkey,
) -> Result<Vec<Instruction>> {
    let ixs = get_program(program_id, payer)
        .request()
        .accounts(InitPyth {
            price_account: *price,
            product_account: *product,
        })
        .args(mock_oracles::instruction::InitPyth {})
        .instructions()?;

    Ok(ixs)
}

pub fn compose_init_switchboard_ixs(
    program_id: &Pubkey,
    payer: &Pubkey,
    target: &Pubkey,
) -> Result<Vec<Instruction>> {
    let ixs = get_program(program_id, payer)
        .request()
        .accounts(UpdateOracle { target: *target })
        .args(mock_oracles::instruction::InitSwitchboard {})
        .instructions()?;

    Ok(ixs)
}

pub fn compose_set_pyth_price_ixs(
    program_id: &Pubkey,
    payer: &Pubkey,
    target: &Pubkey,
    params: PythPriceParams,
) -> Result<Vec<Instruction>> {
    let ixs = get_program(program_id, payer)
        .request()
        .accounts(UpdateOracle { target: *target })
        .args(mock_oracles::instruction::SetPythPrice::from(params))
        .instructions()?;

    Ok(ixs)
}

pub fn compose_set_switchboard_price_ixs(
    program_id: &Pubkey,
    payer: &Pubkey,
    target: &Pubkey,
    params: SwitchboardPriceParams,
) -> Result<Vec<Instruction>> {
    let ixs = get_program(program_id, payer)
        .request()
        .accounts(UpdateOracle { target: *target })
        .args(mock_oracles::instruction::SetSwitchboardPrice::from(params))
        .instructions()?;

    Ok(ixs)
}

pub fn compose_write_data_ixs(
    program_id: &Pubkey,
    payer: &Pubkey,
    target: &Pubkey,
    offset: u64,
    data: Vec<u8>,
) -> Result<Vec<Instruction>> {
    let ixs = get_program(program_id, payer)
        .request()
        .accounts(UpdateOracle { target: *target })
        .args(mock_oracles::instruction::WriteData { offset, data })
        .instructions()?;

    Ok(ixs)
}
