#![allow(dead_code)]
use anchor_client::{
    solana_sdk::{
        signature::Keypair, signer::Signer, transaction::Transaction, transport::TransportError,
    },
    Program,
};
use solana_program_test::ProgramTestContext;

use super::compose_init_switchboard_ixs;

pub async fn setup(
    context: &mut ProgramTestContext,
    program: &Program,
    payer: &Keypair,
    aggregator: &Keypair,
    space: usize,
) -> Result<(), TransportError> {
    let init_switchboard_ixs =
        compose_init_switchboard_ixs(context, program, payer, aggregator, space).await;

    let transaction = Transaction::new_signed_with_payer(
        &init_switchboard_ixs,
        Some(&payer.pubkey()),
        &[payer, aggregator],
        context.last_blockhash,
    );

    context
        .banks_client
        .process_transaction(transaction)
        .await
        .map_err(|e| e.into())
}
