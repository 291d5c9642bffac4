#![allow(dead_code)]
use anchor_client::{
    solana_sdk::{
        signature::Keypair, signer::Signer, transaction::Transaction, transport::TransportError,
    },
    Program,
};
use anchor_lang::prelude::Pubkey;
use solana_program_test::ProgramTestContext;

use super::compose_set_switchboard_price_ix;

pub async fn setup(
    context: &mut ProgramTestContext,
    program: &Program,
    payer: &Keypair,
    aggregator: &Pubkey,
    price: i64,
    expo: i32,
    slot: Option<u64>,
) -> Result<(), TransportError> {
    let set_switchboard_price_ix =
        compose_set_switchboard_price_ix(program, aggregator, price, expo, slot);

    let transaction = Transaction::new_signed_with_payer(
        &[set_switchboard_price_ix],
        Some(&payer.pubkey()),
        &[payer],
        context.last_blockhash,
    );

    context
        .banks_client
        .process_transaction(transaction)
        .await
        .map_err(|e| e.into())
}
